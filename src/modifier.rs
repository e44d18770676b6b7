use std::any::type_name;
use std::fmt::{Debug, Formatter, Result};
use std::ops::Add;
use std::rc::Rc;

/// A reusable mutation over values of type `T`.
///
/// A `Mod` wraps a single `Fn(&mut T)` and composes with other `Mod`s into
/// larger ones. It holds no relationship to any particular `T` instance and
/// can be applied to arbitrarily many items.
pub struct Mod<T: 'static> {
    run: Rc<dyn Fn(&mut T)>,
}

impl<T: 'static> Mod<T> {
    pub fn new(f: impl Fn(&mut T) + 'static) -> Self {
        Self { run: Rc::new(f) }
    }

    /// The no-op modifier.
    pub fn identity() -> Self {
        Self::new(|_| {})
    }

    /// Runs the wrapped function against `item`, mutating it directly.
    #[inline]
    pub fn apply(&self, item: &mut T) {
        (self.run)(item);
    }

    /// Clones `item`, mutates the clone, returns it. The original is left
    /// untouched.
    pub fn applied(&self, item: &T) -> T
    where
        T: Clone,
    {
        let mut next = item.clone();
        self.apply(&mut next);
        next
    }

    /// Sequences `self` before `other` against the same evolving item.
    pub fn then(self, other: Mod<T>) -> Mod<T> {
        Mod::new(move |item| {
            (self.run)(item);
            (other.run)(item);
        })
    }

    pub fn then_fn(self, f: impl Fn(&mut T) + 'static) -> Mod<T> {
        self.then(Mod::new(f))
    }

    /// Folds `mods` left to right into a single modifier. An empty input
    /// yields [`Mod::identity`].
    pub fn concat<I>(mods: I) -> Mod<T>
    where
        I: IntoIterator<Item = Mod<T>>,
    {
        let mods: Vec<Mod<T>> = mods.into_iter().collect();
        Mod::new(move |item| {
            for m in &mods {
                m.apply(item);
            }
        })
    }

    /// Replaces the held function with old-then-`other`. Only this binding
    /// changes; clones taken earlier keep applying the old sequence.
    pub fn append(&mut self, other: Mod<T>) {
        let head = self.run.clone();
        self.run = Rc::new(move |item| {
            head(item);
            (other.run)(item);
        });
    }

    pub fn append_fn(&mut self, f: impl Fn(&mut T) + 'static) {
        self.append(Mod::new(f));
    }

    /// Non-mutating [`Mod::append`]: the receiver applies exactly as before,
    /// the returned modifier carries the extra step.
    pub fn appending(&self, other: Mod<T>) -> Mod<T> {
        let mut next = self.clone();
        next.append(other);
        next
    }

    pub fn appending_fn(&self, f: impl Fn(&mut T) + 'static) -> Mod<T> {
        self.appending(Mod::new(f))
    }
}

/// Alias for `m.applied(item)`.
pub fn configure<T>(item: &T, m: &Mod<T>) -> T
where
    T: Clone + 'static,
{
    m.applied(item)
}

impl<T: 'static> Clone for Mod<T> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<T: 'static> Default for Mod<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: 'static> Add for Mod<T> {
    type Output = Mod<T>;

    fn add(self, rhs: Mod<T>) -> Mod<T> {
        self.then(rhs)
    }
}

impl<T: 'static> Debug for Mod<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Mod<{}>", type_name::<T>())
    }
}
