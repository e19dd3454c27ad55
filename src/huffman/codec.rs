use log::{info, warn};

use crate::huffman::code_table::CodeTable;
use crate::huffman::frequency::FrequencyTable;
use crate::huffman::tree::HuffmanTree;
use crate::huffman::HuffmanError;
use crate::utils::{average_code_length, entropy};
use crate::{Freq, Symbol, DEFAULT_ORDER};

/// # N-ary Huffman codec
///
/// Owns a [`HuffmanTree`] together with the [`CodeTable`] generated from it, and keeps the two in
/// sync: every rebuild of the tree regenerates the table.
///
/// Texts are encoded by concatenating the code of each of their characters, and codes are decoded
/// by walking the tree.
#[derive(Clone, Debug)]
pub struct HuffmanCodec<const ORDER: usize = DEFAULT_ORDER> {
    tree: HuffmanTree<ORDER>,
    table: CodeTable,
}

impl<const ORDER: usize> Default for HuffmanCodec<ORDER> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ORDER: usize> HuffmanCodec<ORDER> {
    /// Creates a codec without symbols: it can only encode the empty text until it is rebuilt.
    pub fn new() -> Self {
        let tree = HuffmanTree::new();
        let mut table = CodeTable::new();
        tree.generate_codes(&mut table);
        Self { tree, table }
    }

    /// Creates a codec from the given pairs (symbol, frequency).
    pub fn from_frequencies(symbols_freqs: &[(Symbol, Freq)]) -> Self {
        let mut codec = Self::new();
        codec.rebuild(symbols_freqs);
        codec
    }

    /// Creates a codec for the characters of `text`, weighted by their number of occurrences.
    pub fn from_text(text: &str) -> Self {
        Self::from_frequencies(FrequencyTable::from_text(text).as_slice())
    }

    /// Rebuilds the tree from the given pairs (symbol, frequency) and regenerates the code table.
    pub fn rebuild(&mut self, symbols_freqs: &[(Symbol, Freq)]) {
        self.tree.build(symbols_freqs);
        self.tree.generate_codes(&mut self.table);

        if !symbols_freqs.is_empty() {
            let freqs = symbols_freqs.iter().map(|(_, freq)| *freq).collect::<Vec<_>>();
            info!(
                "Order {} tree: {} symbols, {} padding leaves, depth {}, {:.3} characters per symbol (entropy {:.3})",
                ORDER,
                self.table.len(),
                self.tree.padding_count(),
                self.tree.depth(),
                average_code_length(&self.table, symbols_freqs),
                entropy(&freqs, ORDER),
            );
        }
    }

    /// Encodes `text` as the concatenation of the codes of its characters.
    ///
    /// # Errors
    /// [`HuffmanError::UnknownSymbol`] if a character has no code, [`HuffmanError::EmptyTree`] if
    /// the codec has no symbols at all and `text` is not empty.
    pub fn encode(&self, text: &str) -> Result<String, HuffmanError> {
        if self.tree.is_empty() && !text.is_empty() {
            return Err(HuffmanError::EmptyTree);
        }

        let mut encoded = String::with_capacity(text.len());
        for (position, symbol) in text.chars().enumerate() {
            let code = self
                .table
                .get(symbol)
                .ok_or(HuffmanError::UnknownSymbol { symbol, position })?;
            encoded.push_str(code);
        }
        Ok(encoded)
    }

    /// Decodes `code`, returning an empty string if it is malformed so that a batch of codes can
    /// be decoded past a corrupted one.
    pub fn decode(&self, code: &str) -> String {
        self.try_decode(code).unwrap_or_else(|error| {
            warn!("Discarding malformed code: {}", error);
            String::new()
        })
    }

    /// Decodes `code`, reporting why it is malformed.
    pub fn try_decode(&self, code: &str) -> Result<String, HuffmanError> {
        self.tree.try_decode(code)
    }

    pub fn tree(&self) -> &HuffmanTree<ORDER> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}
