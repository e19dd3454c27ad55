use std::ops::Neg;

use crate::huffman::CodeTable;
use crate::{Freq, Symbol};

/// Calculates the entropy of the distribution in `freqs`, measured in digits of the given base:
/// with base equal to the order of a tree, this is the lower bound of the average code length.
///
/// ```text
/// entropy = - ∑ p(x) * log_base(p(x))
/// ```
pub fn entropy(freqs: &[Freq], base: usize) -> f64 {
    let total = freqs.iter().sum::<Freq>() as f64;
    let mut entropy = 0.0;

    for freq in freqs {
        if *freq == 0 {
            continue;
        }
        let pr = *freq as f64 / total;
        entropy += pr * pr.log(base as f64);
    }
    entropy.neg()
}

/// Calculates the number of code characters spent, on average, for each symbol when encoding a
/// text with the given frequencies. Symbols without a code are ignored.
pub fn average_code_length(table: &CodeTable, symbols_freqs: &[(Symbol, Freq)]) -> f64 {
    let (mut characters, mut symbols) = (0usize, 0usize);

    for (symbol, freq) in symbols_freqs {
        if let Some(code) = table.get(*symbol) {
            characters += code.len() * freq;
            symbols += freq;
        }
    }

    match symbols {
        0 => 0.0,
        _ => characters as f64 / symbols as f64,
    }
}
