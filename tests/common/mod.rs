/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

/// The symbols the random texts are made of, most frequent first.
pub const ALPHABET: &str = "etaoinshrdlucmfwypvbgkjqxz ETAOINSHRDLU0123456789.,:;()-_'";

/// Length of the texts used to test.
#[allow(dead_code)]
pub const TEXT_LENGTH: usize = 20_000;

/// Creates a text of `length` characters sampled from the first `symbols` characters of
/// [`ALPHABET`], following a Zipfian distribution with the given exponent.
#[allow(dead_code)]
pub fn get_zipfian_text(seed: u64, length: usize, symbols: usize, exponent: f64) -> String {
    let alphabet = ALPHABET.chars().take(symbols).collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(seed);
    let distribution = Zipf::new(alphabet.len() as u64, exponent).unwrap();

    (0..length)
        .map(|_| alphabet[distribution.sample(&mut rng) as usize - 1])
        .collect()
}

/// Returns, for every order supported by the trees, the result of `check` instantiated with that
/// order.
#[allow(unused_macros)]
macro_rules! for_each_order {
    ($check:ident $(, $arg:expr)*) => {
        [
            $check::<2>($($arg),*),
            $check::<3>($($arg),*),
            $check::<4>($($arg),*),
            $check::<5>($($arg),*),
            $check::<6>($($arg),*),
            $check::<7>($($arg),*),
            $check::<8>($($arg),*),
            $check::<9>($($arg),*),
            $check::<10>($($arg),*),
            $check::<11>($($arg),*),
            $check::<12>($($arg),*),
            $check::<13>($($arg),*),
            $check::<14>($($arg),*),
            $check::<15>($($arg),*),
            $check::<16>($($arg),*),
        ]
    };
}
