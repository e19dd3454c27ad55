//! # nary_huffman
//!
//! N-ary Huffman coding where every code is a string over the sixteen characters `0-9a-f`: one
//! character selects one child of the tree, so a tree of order `ORDER` uses the first `ORDER`
//! characters of [`CODE_ALPHABET`].
//!
//! ```
//! use nary_huffman::huffman::codec::HuffmanCodec;
//!
//! let codec = HuffmanCodec::<3>::from_text("abracadabra");
//! let code = codec.encode("abracadabra")?;
//!
//! assert_eq!(codec.decode(&code), "abracadabra");
//! # Ok::<(), nary_huffman::huffman::HuffmanError>(())
//! ```
pub mod heap;
pub mod huffman;
pub mod inventory;
pub mod utils;

/// The type representing the symbols of the input alphabet.
pub type Symbol = char;

/// The type representing the number of occurrences of a symbol.
pub type Freq = usize;

/// The characters used to select the children of an internal node: the character at index `i`
/// selects the `i`-th child.
pub const CODE_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f',
];

/// The biggest order a tree can have, bounded by the size of [`CODE_ALPHABET`].
pub const MAX_ORDER: usize = CODE_ALPHABET.len();

/// The order used when none is given, i.e. a binary tree.
pub const DEFAULT_ORDER: usize = 2;
