use std::marker::PhantomData;

/// Reified read-write accessor for a part of type `B` within a parent value
/// of type `A`.
///
/// Accessors are closure-passing so that a lens may synthesize its target
/// on the fly instead of borrowing it out of the parent.
pub trait Lens<A, B> {
    fn with<R, F: FnOnce(&B) -> R>(&self, data: &A, f: F) -> R;
    fn with_mut<R, F: FnOnce(&mut B) -> R>(&self, data: &mut A, f: F) -> R;

    /// Lens composition: applies `self`, then `rhs` within it.
    fn compose<L, C>(self, rhs: L) -> Compose<Self, L, B>
    where
        Self: Sized,
        L: Lens<B, C>,
    {
        Compose(self, rhs, PhantomData)
    }
}

pub trait LensExt<A, B>: Lens<A, B> {
    fn get(&self, data: &A) -> B
    where
        B: Clone,
    {
        self.with(data, |b| b.clone())
    }

    fn set(&self, data: &mut A, value: B) {
        self.with_mut(data, |b| *b = value);
    }
}

impl<A, B, L: Lens<A, B>> LensExt<A, B> for L {}

/// Identity lens.
#[derive(Copy, Clone, Debug)]
pub struct Identity;

impl<A> Lens<A, A> for Identity {
    fn with<R, F: FnOnce(&A) -> R>(&self, data: &A, f: F) -> R {
        f(data)
    }

    fn with_mut<R, F: FnOnce(&mut A) -> R>(&self, data: &mut A, f: F) -> R {
        f(data)
    }
}

/// Function-pair lens addressing a place inside the parent, usually a named
/// field. Built by [`Field::new`] or the [`lens!`](crate::lens!) macro.
#[derive(Copy, Clone)]
pub struct Field<G, GM> {
    get: G,
    get_mut: GM,
}

impl<G, GM> Field<G, GM> {
    pub fn new<A: ?Sized, B: ?Sized>(get: G, get_mut: GM) -> Self
    where
        G: Fn(&A) -> &B,
        GM: Fn(&mut A) -> &mut B,
    {
        Self { get, get_mut }
    }
}

impl<A, B, G, GM> Lens<A, B> for Field<G, GM>
where
    G: Fn(&A) -> &B,
    GM: Fn(&mut A) -> &mut B,
{
    fn with<R, F: FnOnce(&B) -> R>(&self, data: &A, f: F) -> R {
        f((self.get)(data))
    }

    fn with_mut<R, F: FnOnce(&mut B) -> R>(&self, data: &mut A, f: F) -> R {
        f((self.get_mut)(data))
    }
}

/// Composition of two lenses: combines `Lens<A, B>` and `Lens<B, C>` into a
/// `Lens<A, C>`.
pub struct Compose<K, L, B>(K, L, PhantomData<B>);

// manual impl, K/L need not constrain B (#26925)
impl<K: Clone, L: Clone, B> Clone for Compose<K, L, B> {
    fn clone(&self) -> Self {
        Compose(self.0.clone(), self.1.clone(), PhantomData)
    }
}

impl<K, L, A, B, C> Lens<A, C> for Compose<K, L, B>
where
    K: Lens<A, B>,
    L: Lens<B, C>,
{
    fn with<R, F: FnOnce(&C) -> R>(&self, data: &A, f: F) -> R {
        self.0.with(data, |b| self.1.with(b, f))
    }

    fn with_mut<R, F: FnOnce(&mut C) -> R>(&self, data: &mut A, f: F) -> R {
        self.0.with_mut(data, |b| self.1.with_mut(b, f))
    }
}

/// Builds a [`Field`] lens for a named struct field.
#[macro_export]
macro_rules! lens {
    ($ty:ty, $field:ident) => {
        $crate::Field::new(
            |data: &$ty| &data.$field,
            |data: &mut $ty| &mut data.$field,
        )
    };
}
