//! A LIFO scratch container. The tree's iterative in-order walk keeps the ancestors it still has to
//! return to in one of these.
//!
//! # Examples
//!
//! ```
//! use unbalanced_bst::stack::Stack;
//! use unbalanced_bst::ScratchError;
//!
//! let mut stack = Stack::bounded(2);
//! stack.push('a')?;
//! stack.push('b')?;
//!
//! // Full.
//! assert_eq!(stack.push('c'), Err(ScratchError::Overflow { capacity: 2 }));
//!
//! assert_eq!(stack.pop(), Ok('b'));
//! assert_eq!(stack.pop(), Ok('a'));
//! assert_eq!(stack.pop(), Err(ScratchError::Underflow));
//! # Ok::<(), ScratchError>(())
//! ```

use crate::scratch::{Capacity, ScratchError};

/// A stack with either a fixed or an unlimited capacity.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
    capacity: Capacity,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::growable()
    }
}

impl<T> Stack<T> {
    /// Builds an empty stack with the given capacity.
    pub fn new(capacity: Capacity) -> Self {
        Self {
            items: Vec::with_capacity(capacity.reserve()),
            capacity,
        }
    }

    /// Builds an empty stack holding at most `capacity` items.
    pub fn bounded(capacity: usize) -> Self {
        Self::new(Capacity::Bounded(capacity))
    }

    /// Builds an empty stack without a limit.
    pub fn growable() -> Self {
        Self::new(Capacity::Growable)
    }

    /// Puts `item` on top of the stack. Fails if the stack is bounded and already full.
    pub fn push(&mut self, item: T) -> Result<(), ScratchError> {
        match self.capacity {
            Capacity::Bounded(capacity) if !self.capacity.admits(self.items.len()) => {
                Err(ScratchError::Overflow { capacity })
            }
            _ => {
                self.items.push(item);
                Ok(())
            }
        }
    }

    /// Takes the most recently pushed item off the stack. Fails if the stack is empty.
    pub fn pop(&mut self) -> Result<T, ScratchError> {
        self.items.pop().ok_or(ScratchError::Underflow)
    }

    /// Whether there is nothing left to pop.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// How many items are on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
