//! The n-ary Huffman coder: [frequency counting](frequency), [tree building](tree),
//! [code tables](code_table) and the [codec](codec) gluing them together.

use thiserror::Error;

use crate::{Symbol, CODE_ALPHABET};

pub mod code_table;
pub mod codec;
pub mod frequency;
pub mod node;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::HuffmanCodec;
pub use frequency::FrequencyTable;
pub use node::{HuffmanNode, Leaf, NodeId};
pub use tree::HuffmanTree;

/// Errors raised while encoding or decoding with a Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuffmanError {
    /// The text to encode contains a symbol that is not in the code table.
    #[error("symbol {symbol:?} at position {position} has no code")]
    UnknownSymbol { symbol: Symbol, position: usize },

    /// The code to decode is not a concatenation of complete root-to-leaf paths.
    #[error("malformed code at position {position}: {cause}")]
    MalformedCode { position: usize, cause: MalformedCode },

    /// The tree has been built from an empty list of symbols, or not built at all.
    #[error("the tree has not been built from any symbol")]
    EmptyTree,
}

/// The reason why a code could not be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedCode {
    #[error("{0:?} is not a code character")]
    InvalidCharacter(char),

    #[error("child {index} does not exist in a node with {children} children")]
    ChildOutOfRange { index: usize, children: usize },

    #[error("the code ends in the middle of a path")]
    Truncated,
}

/// Returns the character selecting the child at `index`.
///
/// # Panics
/// If `index` is not smaller than [`MAX_ORDER`](crate::MAX_ORDER).
#[inline(always)]
pub fn child_selector(index: usize) -> char {
    CODE_ALPHABET[index]
}

/// Maps a code character back to the index of the child it selects. Upper case letters are
/// accepted as well.
#[inline(always)]
pub fn child_index(selector: char) -> Option<usize> {
    selector.to_digit(16).map(|digit| digit as usize)
}
