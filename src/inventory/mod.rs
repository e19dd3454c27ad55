//! Inventory records and their compression.
//!
//! Each product of an [inventory](store::Inventory) is flattened into a single line of text (see
//! [`product_to_string`](record::product_to_string)), and the characters of all the flattened
//! products are used to build the Huffman code of an [`InventoryCompressor`](compressor::InventoryCompressor).

use std::num::ParseFloatError;

use thiserror::Error;

use crate::huffman::HuffmanError;

pub mod compressor;
pub mod record;
pub mod store;

pub use compressor::InventoryCompressor;
pub use record::{parse_product, product_to_string, DecodedProduct, InventoryAttribute};
pub use store::{Inventory, Product, SymbolSource};

#[derive(Debug, Error)]
pub enum InventoryError {
    /// A product has been accessed with an index outside `[0, len)`.
    #[error("index {index} is out of bounds for an inventory of {len} products")]
    InvalidIndex { index: usize, len: usize },

    /// An attribute group of a flattened product has a value that is not a number.
    #[error("invalid value in attribute ({group})")]
    InvalidAttribute {
        group: String,
        #[source]
        source: ParseFloatError,
    },

    /// A line of an inventory file has no `:` separating the name of the product.
    #[error("line {line} is not a product record")]
    MissingName { line: usize },

    #[error(transparent)]
    Huffman(#[from] HuffmanError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
