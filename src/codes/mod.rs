pub mod thermometer;

use std::fmt;
use std::str::FromStr;

use bitvec::prelude::*;

use crate::error::CodecError;
use crate::DELIMITER;

/// The bit slice type shared by codewords and bitstreams: bits are stored most significant first,
/// so that the raw bytes read left to right in the same order as the textual representation.
pub type Bits = BitSlice<u8, Msb0>;

/// A variable-length sequence of bits assigned to exactly one symbol.
///
/// Two codewords are the same codeword if and only if they have the very same bits.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Codeword(BitVec<u8, Msb0>);

impl Codeword {
    /// Returns the thermometer codeword of the given `width` made of `run` leading ones followed
    /// by `width - run` zeros.
    pub fn thermometer(width: usize, run: usize) -> Self {
        assert!(run <= width, "a run of {} ones does not fit {} bits", run, width);

        let mut bits = BitVec::with_capacity(width);
        bits.resize(run, true);
        bits.resize(width, false);
        Self(bits)
    }

    pub fn from_bits(bits: &Bits) -> Self {
        Self(BitVec::from_bitslice(bits))
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn as_bitslice(&self) -> &Bits {
        self.0.as_bitslice()
    }

    /// Returns true if this codeword is a (possibly improper) prefix of `bits`.
    #[inline(always)]
    pub fn is_prefix_of(&self, bits: &Bits) -> bool {
        bits.len() >= self.len() && bits[..self.len()] == *self.as_bitslice()
    }

    /// Returns true if the [`DELIMITER`] occurs somewhere inside this codeword, in which case the
    /// framing of a bitstream containing it can't be trusted.
    pub fn contains_delimiter(&self) -> bool {
        find_delimiter(self.as_bitslice(), 0).is_some()
    }
}

impl FromStr for Codeword {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_bits(s)?))
    }
}

impl fmt::Display for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, self.as_bitslice())
    }
}

impl fmt::Debug for Codeword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Codeword(\"{}\")", self)
    }
}

/// The concatenation of (delimiter, codeword) records produced by the encoder.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Bitstream(BitVec<u8, Msb0>);

impl Bitstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self(BitVec::with_capacity(bits))
    }

    pub fn from_bits(bits: &Bits) -> Self {
        Self(BitVec::from_bitslice(bits))
    }

    /// Appends the [`DELIMITER`] followed by `codeword`, returning the number of bits written.
    pub fn push_record(&mut self, codeword: &Codeword) -> usize {
        self.0.extend(DELIMITER);
        self.0.extend_from_bitslice(codeword.as_bitslice());
        DELIMITER.len() + codeword.len()
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline(always)]
    pub fn as_bitslice(&self) -> &Bits {
        self.0.as_bitslice()
    }
}

impl FromStr for Bitstream {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_bits(s)?))
    }
}

impl fmt::Display for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bits(f, self.as_bitslice())
    }
}

impl fmt::Debug for Bitstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitstream(\"{}\")", self)
    }
}

/// Returns the index of the first occurrence of the [`DELIMITER`] in `bits` starting at or after
/// `from`.
pub(crate) fn find_delimiter(bits: &Bits, from: usize) -> Option<usize> {
    (from..bits.len().saturating_sub(1)).find(|&i| bits[i] == DELIMITER[0] && bits[i + 1] == DELIMITER[1])
}

fn parse_bits(s: &str) -> Result<BitVec<u8, Msb0>, CodecError> {
    s.chars()
        .enumerate()
        .map(|(index, c)| match c {
            '0' => Ok(false),
            '1' => Ok(true),
            found => Err(CodecError::InvalidBit { found, index }),
        })
        .collect()
}

pub(crate) fn write_bits(f: &mut fmt::Formatter<'_>, bits: &Bits) -> fmt::Result {
    for bit in bits.iter().by_vals() {
        f.write_str(if bit { "1" } else { "0" })?;
    }
    Ok(())
}
