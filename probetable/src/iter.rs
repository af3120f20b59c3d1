use std::iter::FusedIterator;

use crate::slot::Slot;

/// Iterator over the occupied slots of a `ProbeTable`, in slot order.
///
/// Yields `(slot_index, &record)`.
pub struct Iter<'a, R> {
    slots: &'a [Slot<R>],
    current_index: usize,
    remaining: usize,
}

impl<'a, R> Iter<'a, R> {
    pub(crate) fn new(slots: &'a [Slot<R>], len: usize) -> Self {
        Self {
            slots,
            current_index: 0,
            remaining: len,
        }
    }
}

impl<'a, R> Iterator for Iter<'a, R> {
    type Item = (usize, &'a R);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // Find next occupied slot
        while self.current_index < self.slots.len() {
            let index = self.current_index;
            self.current_index += 1;

            if let Slot::Occupied(record) = &self.slots[index] {
                self.remaining -= 1;
                return Some((index, record));
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R> ExactSizeIterator for Iter<'_, R> {}

impl<R> FusedIterator for Iter<'_, R> {}
