use crate::codes::Bitstream;
use crate::error::{CodecError, Result};
use crate::tables::{EncodingTable, SymbolTables};
use crate::utils::efficiency::efficiency;
use crate::Symbol;

/// Maps a sequence of symbols to a bitstream made of one (delimiter, codeword) record per symbol.
#[derive(Clone, Debug)]
pub struct Encoder<'a> {
    /// The table providing the codeword of every symbol.
    table: &'a EncodingTable,

    /// The records written so far.
    stream: Bitstream,

    /// How many symbols have been encoded so far.
    encoded: usize,
}

impl<'a> Encoder<'a> {
    pub fn new(table: &'a EncodingTable) -> Self {
        Self {
            table,
            stream: Bitstream::new(),
            encoded: 0,
        }
    }

    /// Encodes a single symbol, returning the number of bits written.
    ///
    /// Fails with [`CodecError::UnknownSymbol`] if the table has no codeword for `symbol`: tables
    /// must be built from the same alphabet as the text being encoded.
    pub fn encode(&mut self, symbol: Symbol) -> Result<usize> {
        let codeword = self.table.get(symbol).ok_or(CodecError::UnknownSymbol {
            symbol,
            position: self.encoded,
        })?;

        self.encoded += 1;
        Ok(self.stream.push_record(codeword))
    }

    /// Encodes every symbol of the sequence, in order, returning the number of bits written.
    pub fn encode_all(&mut self, symbols: impl IntoIterator<Item = Symbol>) -> Result<usize> {
        let mut written = 0;
        for symbol in symbols {
            written += self.encode(symbol)?;
        }
        Ok(written)
    }

    /// The number of symbols encoded so far.
    pub fn encoded(&self) -> usize {
        self.encoded
    }

    pub fn into_bitstream(self) -> Bitstream {
        self.stream
    }
}

/// The result of [`encode_text`].
#[derive(Clone, Debug)]
pub struct EncodeOutput {
    pub bitstream: Bitstream,

    /// The bits the text takes in UTF-8 divided by the bits of the stream, `None` for an empty
    /// stream. Purely informational.
    pub efficiency: Option<f64>,
}

/// Encodes an already normalized text with the given tables.
pub fn encode_text(tables: &SymbolTables, text: &str) -> Result<EncodeOutput> {
    let mut encoder = Encoder::new(tables.encoding());
    encoder.encode_all(text.chars())?;
    let bitstream = encoder.into_bitstream();
    let efficiency = efficiency(text, bitstream.len());

    Ok(EncodeOutput { bitstream, efficiency })
}
