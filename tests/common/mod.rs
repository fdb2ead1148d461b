/*
 * Utility functions and consts used by the tests.
 *
 */

use rand::prelude::{Distribution, SmallRng};
use rand::SeedableRng;
use rand_distr::Zipf;
use thermo_codec::{Codeword, CodewordGenerator};

#[allow(dead_code)]
/// Size of the texts used to test.
pub const TEXT_LENGTH: usize = 100_000;

#[allow(dead_code)]
/// The symbols of the random texts, from the most to the least likely.
const ALPHABET: &str = "etaoinshrdlcumwfgypbvkjxqz0123456789àèéìòùäöüßçñ";

#[allow(dead_code)]
/// Creates a text of [`TEXT_LENGTH`] symbols sampled from a Zipfian distribution over [`ALPHABET`].
pub fn get_zipfian_text(seed: u64, exponent: f64) -> String {
    let alphabet = ALPHABET.chars().collect::<Vec<_>>();
    let mut rng = SmallRng::seed_from_u64(seed);
    let distribution = Zipf::new(alphabet.len() as u64, exponent).unwrap();

    (0..TEXT_LENGTH)
        .map(|_| alphabet[distribution.sample(&mut rng) as usize - 1])
        .collect()
}

#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A generator yielding a fixed list of codewords, used to plug codewords that may contain the
/// delimiter into the tables.
#[allow(dead_code)]
pub struct FixedGenerator(std::vec::IntoIter<Codeword>);

#[allow(dead_code)]
impl FixedGenerator {
    pub fn new(codewords: &[&str]) -> Self {
        Self(
            codewords
                .iter()
                .map(|codeword| codeword.parse().unwrap())
                .collect::<Vec<Codeword>>()
                .into_iter(),
        )
    }
}

impl Iterator for FixedGenerator {
    type Item = Codeword;

    fn next(&mut self) -> Option<Codeword> {
        self.0.next()
    }
}

impl CodewordGenerator for FixedGenerator {}
