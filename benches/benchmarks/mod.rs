use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod decoder;
pub mod encoder;
pub mod tree_building;

/// Length of the text used to bench.
const TEXT_LENGTH: usize = 1_000_000;

/// The symbols the text is made of, most frequent first.
const ALPHABET: &str = "etaoinshrdlucmfwypvbgkjqxz ETAOINSHRDLUCMFWYPVBGKJQXZ0123456789.,:;()-_'!?";

/// Creates a text whose characters follow a Zipfian distribution over [`ALPHABET`].
fn get_text() -> String {
    let alphabet = ALPHABET.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Zipf::new(alphabet.len() as u64, 1.0).unwrap();

    (0..TEXT_LENGTH)
        .map(|_| alphabet[distribution.sample(&mut rng) as usize - 1])
        .collect()
}
