//! A FIFO scratch container. The tree's level-order walk keeps the nodes of the frontier it hasn't
//! visited yet in one of these.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::queue::Queue;
//! use unbalanced_bst::ScratchError;
//!
//! let mut queue = Queue::growable();
//! queue.enqueue(1)?;
//! queue.enqueue(2)?;
//!
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert!(queue.is_empty());
//! # Ok::<(), ScratchError>(())
//! ```

use std::collections::VecDeque;

use crate::scratch::{Capacity, ScratchError};

/// A queue with either a fixed or an unlimited capacity.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
    capacity: Capacity,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::growable()
    }
}

impl<T> Queue<T> {
    /// Builds an empty queue with the given capacity.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity.reserve()),
            capacity,
        }
    }

    /// Builds an empty queue holding at most `capacity` items.
    pub fn bounded(capacity: usize) -> Self {
        Self::new(Capacity::Bounded(capacity))
    }

    /// Builds an empty queue without a limit.
    pub fn growable() -> Self {
        Self::new(Capacity::Growable)
    }

    /// Adds `item` at the back. Fails if the queue is bounded and already full.
    pub fn enqueue(&mut self, item: T) -> Result<(), ScratchError> {
        match self.capacity {
            Capacity::Bounded(capacity) if !self.capacity.admits(self.items.len()) => {
                Err(ScratchError::Overflow { capacity })
            }
            _ => {
                self.items.push_back(item);
                Ok(())
            }
        }
    }

    /// Removes the item at the front, i.e. the oldest one. Fails if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, ScratchError> {
        self.items.pop_front().ok_or(ScratchError::Underflow)
    }

    /// Whether there is nothing left to dequeue.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items are waiting in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
