//! Pieces shared by the scratch containers ([`Stack`][crate::stack::Stack] and
//! [`Queue`][crate::queue::Queue]) that the tree uses as working memory while walking.

use thiserror::Error;

/// How many items a scratch container may hold at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capacity {
    /// At most this many items. Space for all of them is reserved up front so the container never
    /// reallocates while in use.
    Bounded(usize),
    /// No limit. The container grows as needed.
    Growable,
}

impl Capacity {
    /// How much space to reserve when building a container with this capacity.
    pub(crate) fn reserve(self) -> usize {
        match self {
            Self::Bounded(capacity) => capacity,
            Self::Growable => 0,
        }
    }

    /// Whether a container already holding `len` items can take one more.
    pub(crate) fn admits(self, len: usize) -> bool {
        match self {
            Self::Bounded(capacity) => len < capacity,
            Self::Growable => true,
        }
    }
}

/// Misuse of a scratch container.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScratchError {
    /// An item was requested from an empty container.
    #[error("scratch container is empty")]
    Underflow,
    /// A bounded container was already full.
    #[error("scratch container is full (capacity {capacity})")]
    Overflow {
        /// The bound the container was built with.
        capacity: usize,
    },
}
