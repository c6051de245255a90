//! Error types for Huffman code construction.

use thiserror::Error;

use crate::heap::ItemHandle;

/// Error variants for Huffman code construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The frequency mapping handed to the tree builder has no symbols.
    #[error("cannot build a code for an empty alphabet")]
    EmptyAlphabet,

    /// The combined frequency of two subtrees does not fit in a `u64`.
    #[error("frequency sum {0} + {1} overflows u64")]
    FrequencyOverflow(u64, u64),

    /// `extract_min` was called on a priority queue holding no items.
    #[error("priority queue is empty")]
    EmptyStructure,

    /// The handle refers to an item that has already left the queue.
    #[error("no queued item for handle {0:?}")]
    UnknownItem(ItemHandle),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
