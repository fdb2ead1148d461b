pub mod codec;
pub mod codes;
pub mod error;
pub mod normalizer;
pub mod tables;
pub mod traits;
pub mod utils;

pub use crate::codec::decoder::{DecodeReport, Decoder, DegradedFragment};
pub use crate::codec::encoder::{encode_text, EncodeOutput, Encoder};
pub use crate::codes::thermometer::ThermometerGenerator;
pub use crate::codes::{Bitstream, Codeword};
pub use crate::error::CodecError;
pub use crate::normalizer::{Normalizer, NormalizerConfig};
pub use crate::tables::builder::{FrequencyTable, SymbolTableBuilder};
pub use crate::tables::{DecodingTable, EncodingTable, SymbolTables};
pub use crate::traits::generator::CodewordGenerator;

/// The type representing a symbol of the normalized text.
pub type Symbol = char;

/// The position of a codeword in the canonical generation order.
pub type Rank = usize;

/// The type representing the number of occurrences of a symbol in the input text.
pub type Freq = usize;

/// The separator written in front of every codeword in the bitstream, that is the bits `01`.
///
/// # Note
/// The framing is only guaranteed to be correct when no codeword contains this pattern. The
/// codewords produced by [`ThermometerGenerator`] never do.
pub const DELIMITER: [bool; 2] = [false, true];
