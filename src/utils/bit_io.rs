use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use bitvec::prelude::*;
use dsi_bitstream::codes::{GammaReadParam, GammaWrite};
use dsi_bitstream::impls::{BufBitReader, BufBitWriter, WordAdapter};
use dsi_bitstream::traits::{BitRead, BitWrite, BE};
use log::info;

use crate::codes::Bitstream;
use crate::error::{self, CodecError};

/// How many payload bits are moved at once between a [`Bitstream`] and the underlying coder.
const CHUNK_BITS: usize = 8;

/// Writes `stream` to `sink`, returning the number of bits written (padding excluded).
///
/// The layout is the γ code of the payload length in bits, followed by the payload; the last byte
/// is padded with zeros. The explicit length is needed because a trailing zero would otherwise be
/// indistinguishable from the end of a codeword.
pub fn write_bitstream<W: Write>(stream: &Bitstream, sink: W) -> error::Result<usize> {
    let mut writer: BufBitWriter<BE, _> = BufBitWriter::new(WordAdapter::<u8, _>::new(sink));

    let mut written = writer.write_gamma(stream.len() as u64)?;
    for chunk in stream.as_bitslice().chunks(CHUNK_BITS) {
        let value = chunk
            .iter()
            .by_vals()
            .fold(0_u64, |value, bit| (value << 1) | bit as u64);
        written += writer.write_bits(value, chunk.len())?;
    }
    writer.flush()?;

    Ok(written)
}

/// Reads a [`Bitstream`] previously written by [`write_bitstream`], ignoring the padding.
///
/// The whole source is read first, so that a length header claiming more bits than the source
/// holds is rejected with [`io::ErrorKind::UnexpectedEof`] before anything is allocated.
pub fn read_bitstream<R: Read>(mut source: R) -> error::Result<Bitstream> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    let available = bytes.len() * 8;

    // a γ code starting with z zeros is 2z + 1 bits long
    let zeros = bytes
        .view_bits::<Msb0>()
        .first_one()
        .ok_or_else(|| truncated("the length header is missing"))?;
    if zeros >= u64::BITS as usize {
        return Err(CodecError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            "the length header does not fit 64 bits",
        )));
    }
    let header = 2 * zeros + 1;
    if header > available {
        return Err(truncated("the length header is cut short"));
    }

    let mut reader: BufBitReader<BE, _> = BufBitReader::new(WordAdapter::<u8, _>::new(bytes.as_slice()));
    let len = reader.read_gamma_param::<false>()?;
    let len = usize::try_from(len)
        .ok()
        .filter(|&len| len <= available - header)
        .ok_or_else(|| truncated("the payload is shorter than its declared length"))?;

    let mut stream = Bitstream::with_capacity(len);
    let mut remaining = len;

    while remaining > 0 {
        let n = remaining.min(CHUNK_BITS);
        let value = reader.read_bits(n)?;
        for shift in (0..n).rev() {
            stream.push((value >> shift) & 1 == 1);
        }
        remaining -= n;
    }

    Ok(stream)
}

fn truncated(reason: &str) -> CodecError {
    CodecError::Io(io::Error::new(io::ErrorKind::UnexpectedEof, reason.to_string()))
}

/// Stores `stream` in the file at `path`.
pub fn store_bitstream(stream: &Bitstream, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = BufWriter::new(
        File::create(path).with_context(|| format!("Could not create {}", path.display()))?,
    );

    let written = write_bitstream(stream, &mut file)
        .with_context(|| format!("Could not write the bitstream to {}", path.display()))?;
    file.flush()
        .with_context(|| format!("Could not flush {}", path.display()))?;

    info!("Wrote {} bits to {}", written, path.display());
    Ok(())
}

/// Loads the bitstream stored in the file at `path`.
pub fn load_bitstream(path: impl AsRef<Path>) -> Result<Bitstream> {
    let path = path.as_ref();
    let file = BufReader::new(
        File::open(path).with_context(|| format!("Could not open {}", path.display()))?,
    );

    let stream = read_bitstream(file)
        .with_context(|| format!("Could not read a bitstream from {}", path.display()))?;

    info!("Read {} bits from {}", stream.len(), path.display());
    Ok(stream)
}
