use log::warn;

use crate::codes::{find_delimiter, Bits, Bitstream, Codeword};
use crate::error::{CodecError, Result};
use crate::tables::DecodingTable;
use crate::{Symbol, DELIMITER};

/// A fragment of the bitstream that had no exact match and has been decoded through the longest
/// codeword that is a prefix of it.
///
/// The decoded symbol is only a guess: when codewords may contain the delimiter, the fragment
/// boundaries themselves may be wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DegradedFragment {
    /// The bit offset of the fragment inside the stream.
    pub position: usize,

    /// The bits of the fragment.
    pub fragment: String,

    /// The codeword used to decode the fragment.
    pub codeword: Codeword,

    pub symbol: Symbol,
}

/// The outcome of decoding a bitstream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecodeReport {
    /// The decoded symbols, in stream order.
    pub symbols: String,

    /// The fragments decoded by the longest-prefix fallback, in stream order.
    pub degraded: Vec<DegradedFragment>,
}

impl DecodeReport {
    /// Returns true if every fragment has been decoded by an exact lookup.
    pub fn is_exact(&self) -> bool {
        self.degraded.is_empty()
    }
}

/// Maps a bitstream produced by the [`Encoder`](crate::Encoder) back to its symbols.
///
/// The stream is split at every occurrence of the [`DELIMITER`], scanning left to right. Each
/// fragment is then looked up in the table:
/// - an exact match always decodes to the right symbol;
/// - otherwise the longest codeword which is a prefix of the fragment is used, and the fragment is
///   reported as [degraded](DegradedFragment);
/// - if not even a prefix matches, decoding fails with [`CodecError::FramingAmbiguity`].
///
/// The decoder keeps no state between streams.
#[derive(Clone, Copy, Debug)]
pub struct Decoder<'a> {
    table: &'a DecodingTable,
}

impl<'a> Decoder<'a> {
    pub fn new(table: &'a DecodingTable) -> Self {
        Self { table }
    }

    pub fn decode(&self, stream: &Bitstream) -> Result<DecodeReport> {
        let bits = stream.as_bitslice();
        let mut report = DecodeReport::default();

        if bits.is_empty() {
            return Ok(report);
        }

        // the stream has to start with a delimiter, not with data
        match find_delimiter(bits, 0) {
            Some(0) => {}
            Some(end) => return Err(Self::ambiguity(&bits[..end], 0)),
            None => return Err(Self::ambiguity(bits, 0)),
        }

        let mut start = DELIMITER.len();
        loop {
            let end = find_delimiter(bits, start).unwrap_or(bits.len());
            let symbol = self.decode_fragment(&bits[start..end], start, &mut report.degraded)?;
            report.symbols.push(symbol);

            if end == bits.len() {
                break;
            }
            start = end + DELIMITER.len();
        }

        if !report.is_exact() {
            warn!(
                "{} of {} fragments have been decoded by prefix matching",
                report.degraded.len(),
                report.symbols.chars().count()
            );
        }

        Ok(report)
    }

    fn decode_fragment(
        &self,
        fragment: &Bits,
        position: usize,
        degraded: &mut Vec<DegradedFragment>,
    ) -> Result<Symbol> {
        if let Some(symbol) = self.table.get_bits(fragment) {
            return Ok(symbol);
        }

        let (codeword, symbol) = self
            .table
            .longest_prefix(fragment)
            .ok_or_else(|| Self::ambiguity(fragment, position))?;

        let fragment = Codeword::from_bits(fragment).to_string();
        warn!(
            "Fragment {} at bit {} has no exact match: decoded as {:?} through its prefix {}",
            fragment, position, symbol, codeword
        );

        degraded.push(DegradedFragment {
            position,
            fragment,
            codeword: codeword.clone(),
            symbol,
        });
        Ok(symbol)
    }

    fn ambiguity(fragment: &Bits, position: usize) -> CodecError {
        CodecError::FramingAmbiguity {
            fragment: Codeword::from_bits(fragment).to_string(),
            position,
        }
    }
}
