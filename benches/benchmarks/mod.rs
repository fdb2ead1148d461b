use rand::prelude::{Distribution, StdRng};
use rand::SeedableRng;
use rand_distr::Zipf;

pub mod decoder;
pub mod encoder;
pub mod tables;

/// Number of symbols of the texts used to bench.
const TEXT_LENGTH: usize = 1_000_000;

/// The symbols of the bench texts, from the most to the least likely.
const ALPHABET: &str = "etaoinshrdlcumwfgypbvkjxqz0123456789";

fn zipfian_text() -> String {
    let alphabet = ALPHABET.chars().collect::<Vec<_>>();
    let mut rng = StdRng::seed_from_u64(0);
    let distribution = Zipf::new(alphabet.len() as u64, 1.0).unwrap();

    (0..TEXT_LENGTH)
        .map(|_| alphabet[distribution.sample(&mut rng) as usize - 1])
        .collect()
}
