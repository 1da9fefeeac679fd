//! SlotArray: the fixed-length optional-cell substrate shared by all
//! collision strategies.
//!
//! Capacity is chosen once at construction and never changes; there is no
//! resize or rehash path in this crate. A cell holds either nothing or
//! exactly one occupant (a full entry for the direct strategies, a bucket
//! head for chaining). Indexing is always bounds-checked by construction:
//! every index handed to this type comes from a modulo-capacity reduction.

/// A key/value pair owned by exactly one slot. Never aliased across two
/// slots; destroyed with the slot that holds it.
#[derive(Debug)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

/// Fixed-length array of optional cells.
#[derive(Debug)]
pub(crate) struct SlotArray<C> {
    cells: Box<[Option<C>]>,
}

impl<C> SlotArray<C> {
    /// Allocate `capacity` empty cells. Capacity zero admits no valid slot
    /// index and is rejected.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "slot array capacity must be non-zero");
        let mut cells = Vec::with_capacity(capacity);
        cells.resize_with(capacity, || None);
        Self {
            cells: cells.into_boxed_slice(),
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn peek(&self, index: usize) -> Option<&C> {
        self.cells[index].as_ref()
    }

    pub(crate) fn is_vacant(&self, index: usize) -> bool {
        self.cells[index].is_none()
    }

    /// Place an occupant, returning whatever it displaced.
    pub(crate) fn occupy(&mut self, index: usize, occupant: C) -> Option<C> {
        self.cells[index].replace(occupant)
    }

    /// Empty the cell, returning its previous occupant.
    pub(crate) fn vacate(&mut self, index: usize) -> Option<C> {
        self.cells[index].take()
    }

    /// Visit every occupied cell in index order.
    pub(crate) fn occupants(&self) -> Occupants<'_, C> {
        Occupants {
            it: self.cells.iter(),
        }
    }
}

/// Iterator over occupied cells in index order.
pub(crate) struct Occupants<'a, C> {
    it: core::slice::Iter<'a, Option<C>>,
}

impl<'a, C> Iterator for Occupants<'a, C> {
    type Item = &'a C;

    fn next(&mut self) -> Option<Self::Item> {
        self.it.by_ref().find_map(|c| c.as_ref())
    }
}
