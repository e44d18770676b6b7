use crate::{Lens, Mod};

impl<T: 'static> Mod<T> {
    /// Lifts a `Mod<T>` into a `Mod<Root>` through a lens addressing a `T`
    /// inside `Root`. The wrapped function runs exactly once per
    /// application, and every part of the root outside the addressed place
    /// is left untouched.
    pub fn pullback<Root, L>(self, lens: L) -> Mod<Root>
    where
        Root: 'static,
        L: Lens<Root, T> + 'static,
    {
        Mod::new(move |root| lens.with_mut(root, |item| self.apply(item)))
    }

    /// Lifts a `Mod<T>` over a sequence: maps [`Mod::applied`] over every
    /// element, preserving order and length. The result is a fresh vector,
    /// so old and new elements never alias.
    pub fn each(self) -> Mod<Vec<T>>
    where
        T: Clone,
    {
        Mod::new(move |items: &mut Vec<T>| {
            *items = items.iter().map(|item| self.applied(item)).collect();
        })
    }

    /// [`Mod::each`] pulled back through a lens addressing a `Vec<T>` inside
    /// `Root`.
    pub fn for_each<Root, L>(self, lens: L) -> Mod<Root>
    where
        T: Clone,
        Root: 'static,
        L: Lens<Root, Vec<T>> + 'static,
    {
        self.each().pullback(lens)
    }
}
