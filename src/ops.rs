use crate::Mod;

/// Item-side application sugar, implemented for every sized type.
pub trait Modify: Sized + 'static {
    /// Mutates `self` in place through `m`.
    fn modify(&mut self, m: &Mod<Self>) {
        m.apply(self);
    }

    /// Returns a modified clone of `self`; `self` is left untouched.
    fn modified(&self, m: &Mod<Self>) -> Self
    where
        Self: Clone,
    {
        m.applied(self)
    }
}

impl<T: 'static> Modify for T {}
