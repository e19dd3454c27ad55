//! An array-backed minimum queue whose ordering is supplied from the outside.
//!
//! The queue has no notion of a "natural" priority: every comparison goes through a
//! [`Comparator`](comparator::Comparator) captured when the queue is created. This is what allows
//! the Huffman tree builder to impose its own tie-breaking rules over nodes with equal frequency.

use thiserror::Error;

pub mod comparator;
pub mod priority_queue;

pub use comparator::{Comparator, NaturalOrder, Reversed};
pub use priority_queue::PriorityQueue;

/// Errors raised by the [`PriorityQueue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// `pop` or `peek` have been called on a queue with no elements.
    #[error("the queue is empty")]
    EmptyQueue,
}
