use crate::codes::Codeword;
use crate::traits::generator::CodewordGenerator;

/// The canonical codeword generator.
///
/// Codewords are produced width after width. For every width `L` (starting from 1) the generator
/// emits the `L + 1` thermometer patterns of `L` bits, that is `k` ones followed by `L - k` zeros,
/// for `k` going from 0 to `L`:
///
/// ```text
/// 0, 1, 00, 10, 11, 000, 100, 110, 111, 0000, ...
/// ```
///
/// Since every one precedes every zero, no codeword ever contains the [`DELIMITER`](crate::DELIMITER).
/// Within a width codewords differ by the position of the last one, across widths they differ by
/// length, so the sequence never repeats.
///
/// The generator is a plain owned value: it's meant to be consumed by a single table build and
/// then dropped.
#[derive(Clone, Debug)]
pub struct ThermometerGenerator {
    /// The width of the next codeword.
    width: usize,

    /// The number of leading ones of the next codeword.
    run: usize,
}

impl Default for ThermometerGenerator {
    fn default() -> Self {
        Self { width: 1, run: 0 }
    }
}

impl ThermometerGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the codeword having the given rank without walking the sequence.
    ///
    /// Width `L` starts at rank `(L - 1)(L + 2) / 2`, that is after the `2 + 3 + ... + L` codewords
    /// of the narrower widths.
    pub fn codeword_at(rank: usize) -> Codeword {
        let mut width = 1;
        let mut first_rank = 0;

        while rank >= first_rank + width + 1 {
            first_rank += width + 1;
            width += 1;
        }
        Codeword::thermometer(width, rank - first_rank)
    }
}

impl Iterator for ThermometerGenerator {
    type Item = Codeword;

    fn next(&mut self) -> Option<Self::Item> {
        let codeword = Codeword::thermometer(self.width, self.run);

        if self.run < self.width {
            self.run += 1;
        } else {
            self.width += 1;
            self.run = 0;
        }
        Some(codeword)
    }
}

impl CodewordGenerator for ThermometerGenerator {}
