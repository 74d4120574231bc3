//! Append-only storage for repetition results.
//!
//! Capacity starts at zero and doubles (0, 1, 2, 4, ...) whenever a push
//! finds the buffer full. [`Growable::finish`] trims the storage to the exact
//! length, so the vector handed to the caller carries no spare capacity.

use tracing::trace;

#[derive(Debug)]
pub struct Growable<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Growable<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Reserved slots, following the doubling schedule.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn push(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(item);
    }

    /// Consumes the buffer and returns its elements with `capacity() == len()`.
    pub fn finish(self) -> Vec<T> {
        trace!(len = self.items.len(), capacity = self.capacity, "trim");
        self.items.into_boxed_slice().into_vec()
    }

    fn grow(&mut self) {
        let new_capacity = (self.capacity * 2).max(1);
        self.items.reserve_exact(new_capacity - self.items.len());
        trace!(from = self.capacity, to = new_capacity, "grow");
        self.capacity = new_capacity;
    }
}

impl<T> Default for Growable<T> {
    fn default() -> Self {
        Self::new()
    }
}
