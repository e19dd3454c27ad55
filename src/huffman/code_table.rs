use std::collections::BTreeMap;
use std::fmt::{self, Display};

use crate::huffman::tree::HuffmanTree;
use crate::Symbol;

/// Maps every symbol of a [`HuffmanTree`] to its code, i.e. the path from the root to the leaf of
/// the symbol.
///
/// The table is filled by [`HuffmanTree::generate_codes`] and is valid until that tree is built
/// again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,

    /// The generation of the tree the codes have been generated from.
    generation: Option<u64>,
}

impl CodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self, generation: u64) {
        self.codes.clear();
        self.generation = Some(generation);
    }

    pub(crate) fn insert(&mut self, symbol: Symbol, code: String) {
        self.codes.insert(symbol, code);
    }

    /// Returns the code of `symbol`, if it has one.
    #[inline(always)]
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.codes.contains_key(&symbol)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over the pairs (symbol, code), sorted by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code.as_str()))
    }

    /// The generation of the tree this table has been generated from, if any.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }

    /// Returns true if the table has been generated from the current build of `tree`.
    pub fn is_current_for<const ORDER: usize>(&self, tree: &HuffmanTree<ORDER>) -> bool {
        self.generation == Some(tree.generation())
    }
}

/// One line per symbol, formatted as `'<symbol>' : <code>`.
impl Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.iter() {
            writeln!(f, "'{}' : {}", symbol, code)?;
        }
        Ok(())
    }
}
