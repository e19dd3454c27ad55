use std::fmt::{self, Display};

use log::info;

use crate::huffman::{CodeTable, FrequencyTable, HuffmanCodec};
use crate::inventory::record::{parse_product, product_to_string, DecodedProduct, InventoryAttribute};
use crate::inventory::store::SymbolSource;
use crate::inventory::InventoryError;
use crate::DEFAULT_ORDER;

/// Compresses the products of an inventory with an n-ary Huffman code of order `ORDER`.
///
/// The code is built by [`build_huffman`](Self::build_huffman) from the characters of all the
/// flattened products of a [`SymbolSource`], so every product of that source can be encoded.
#[derive(Clone, Debug, Default)]
pub struct InventoryCompressor<const ORDER: usize = DEFAULT_ORDER> {
    codec: HuffmanCodec<ORDER>,
}

impl<const ORDER: usize> InventoryCompressor<ORDER> {
    pub fn new() -> Self {
        Self {
            codec: HuffmanCodec::new(),
        }
    }

    /// Builds the Huffman code from the character frequencies of every product in `source`,
    /// replacing the previous one.
    pub fn build_huffman<S: SymbolSource + ?Sized>(&mut self, source: &S) -> Result<(), InventoryError> {
        let mut frequencies = FrequencyTable::new();

        for index in 0..source.len() {
            let flattened = product_to_string(source.attributes_of(index)?, source.name_of(index)?);
            frequencies.add_text(&flattened);
        }

        info!(
            "Counted {} characters ({} distinct) over {} products",
            frequencies.total(),
            frequencies.len(),
            source.len()
        );

        self.codec.rebuild(frequencies.as_slice());
        Ok(())
    }

    /// See [`product_to_string`].
    pub fn product_to_string(attributes: &[InventoryAttribute], name: &str) -> String {
        product_to_string(attributes, name)
    }

    /// Encodes the flattened text of a product.
    pub fn encode_product(&self, attributes: &[InventoryAttribute], name: &str) -> Result<String, InventoryError> {
        Ok(self.codec.encode(&product_to_string(attributes, name))?)
    }

    /// Encodes the product at `index` in `source`.
    pub fn encode_record<S: SymbolSource + ?Sized>(&self, source: &S, index: usize) -> Result<String, InventoryError> {
        self.encode_product(source.attributes_of(index)?, source.name_of(index)?)
    }

    /// Decodes a product. A malformed code gives an empty [`DecodedProduct`], so that the products
    /// following a corrupted one can still be decoded.
    pub fn decode_product(&self, code: &str) -> Result<DecodedProduct, InventoryError> {
        let decoded = self.codec.decode(code);
        if decoded.is_empty() {
            return Ok(DecodedProduct::default());
        }
        parse_product(&decoded)
    }

    pub fn codec(&self) -> &HuffmanCodec<ORDER> {
        &self.codec
    }

    pub fn table(&self) -> &CodeTable {
        self.codec.table()
    }
}

/// Dumps the code table, one `'<symbol>' : <code>` line per symbol.
impl<const ORDER: usize> Display for InventoryCompressor<ORDER> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.codec.table())
    }
}
