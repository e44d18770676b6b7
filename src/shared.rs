use std::cell::RefCell;

use generational_box::GenerationalBox;

use crate::Mod;

impl<T: 'static> Mod<T> {
    /// Mutates the item held in a shared slot, in place. Every holder of the
    /// slot observes the change; no copy is produced. Panics if the slot's
    /// owner has been dropped.
    pub fn apply_shared(&self, slot: GenerationalBox<T>) {
        let mut item = slot.write();
        self.apply(&mut item);
    }

    /// Mutates the item behind a shared cell, in place. Every alias of the
    /// cell (e.g. through `Rc<RefCell<T>>`) observes the change. Panics if
    /// the cell is currently borrowed.
    pub fn apply_cell(&self, cell: &RefCell<T>) {
        self.apply(&mut cell.borrow_mut());
    }
}
