use std::collections::HashMap;

use crate::{Freq, Symbol};

/// Counts the occurrences of every symbol, remembering the order in which the symbols have been
/// seen for the first time.
///
/// The discovery order matters: it is the order in which the tree builder tags the leaves, hence
/// the order used to break ties between symbols with the same frequency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// The position of each symbol in `counts`.
    positions: HashMap<Symbol, usize>,

    /// The pairs (symbol, frequency), in discovery order.
    counts: Vec<(Symbol, Freq)>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.add_text(text);
        table
    }

    /// Counts every character of `text`.
    pub fn add_text(&mut self, text: &str) {
        text.chars().for_each(|symbol| self.add_symbol(symbol));
    }

    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.add_count(symbol, 1);
    }

    /// Adds `count` occurrences of `symbol`. A zero count still registers the symbol.
    pub fn add_count(&mut self, symbol: Symbol, count: Freq) {
        match self.positions.get(&symbol) {
            Some(&position) => self.counts[position].1 += count,
            None => {
                self.positions.insert(symbol, self.counts.len());
                self.counts.push((symbol, count));
            }
        }
    }

    /// Returns the frequency of `symbol`, zero if it has never been seen.
    pub fn get(&self, symbol: Symbol) -> Freq {
        self.positions
            .get(&symbol)
            .map_or(0, |&position| self.counts[position].1)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.positions.contains_key(&symbol)
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The sum of all frequencies.
    pub fn total(&self) -> Freq {
        self.counts.iter().map(|(_, freq)| freq).sum()
    }

    /// The pairs (symbol, frequency) in discovery order, ready to be given to the tree builder.
    pub fn as_slice(&self) -> &[(Symbol, Freq)] {
        &self.counts
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, Freq)> + '_ {
        self.counts.iter().copied()
    }
}

impl Extend<Symbol> for FrequencyTable {
    fn extend<I: IntoIterator<Item = Symbol>>(&mut self, symbols: I) {
        symbols.into_iter().for_each(|symbol| self.add_symbol(symbol));
    }
}

impl FromIterator<Symbol> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        let mut table = Self::new();
        table.extend(symbols);
        table
    }
}
