use thiserror::Error;

use crate::Symbol;

/// Errors raised while building, encoding or decoding.
///
/// None of these conditions is worth retrying: every operation is a pure function of its input,
/// so a second attempt with the same input fails in the same way.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The encoding table has no codeword for a symbol of the text being encoded.
    #[error("symbol {symbol:?} at position {position} has no entry in the encoding table")]
    UnknownSymbol { symbol: Symbol, position: usize },

    /// A fragment of the bitstream matches no codeword, not even as a prefix.
    #[error("fragment \"{fragment}\" at bit {position} matches no codeword")]
    FramingAmbiguity { fragment: String, position: usize },

    /// A textual bit sequence contains something other than `0` and `1`.
    #[error("invalid bit {found:?} at index {index}")]
    InvalidBit { found: char, index: usize },

    /// A persisted table contains a value that is not a valid `char`.
    #[error("invalid code point {0:#x} in persisted table")]
    InvalidCodePoint(u32),

    /// A persisted table is inconsistent: frequencies missing or symbols repeated.
    #[error("malformed tables: {0}")]
    MalformedTables(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used by the core of the codec.
pub type Result<T> = std::result::Result<T, CodecError>;
