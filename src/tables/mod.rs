pub mod builder;

use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use epserde::prelude::*;
use itertools::Itertools;
use log::info;
use mem_dbg::{MemDbg, MemSize, SizeFlags};

use crate::codes::thermometer::ThermometerGenerator;
use crate::codes::{Bits, Codeword};
use crate::error::CodecError;
use crate::{Freq, Rank, Symbol};

/// The symbol → codeword side of the tables.
#[derive(Clone, Debug, Default)]
pub struct EncodingTable {
    /// The (symbol, codeword) pairs in rank order.
    entries: Vec<(Symbol, Codeword)>,

    /// The rank of each symbol, i.e. its index in `entries`.
    ranks: HashMap<Symbol, Rank>,
}

impl EncodingTable {
    fn new(entries: Vec<(Symbol, Codeword)>) -> Self {
        let ranks = entries
            .iter()
            .enumerate()
            .map(|(rank, (symbol, _))| (*symbol, rank))
            .collect();

        Self { entries, ranks }
    }

    #[inline(always)]
    pub fn get(&self, symbol: Symbol) -> Option<&Codeword> {
        self.ranks.get(&symbol).map(|&rank| &self.entries[rank].1)
    }

    pub fn rank(&self, symbol: Symbol) -> Option<Rank> {
        self.ranks.get(&symbol).copied()
    }

    /// Iterates over the (symbol, codeword) pairs in rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Codeword)> {
        self.entries.iter().map(|(symbol, codeword)| (*symbol, codeword))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The codeword → symbol side of the tables.
///
/// Besides the exact map, the table keeps every (codeword, symbol) pair sorted by descending
/// codeword length (ties by ascending rank): this is the list scanned by the longest-prefix
/// fallback of the [`Decoder`](crate::Decoder). Both structures are filled at construction time
/// and never change afterwards.
#[derive(Clone, Debug, Default)]
pub struct DecodingTable {
    exact: HashMap<Codeword, Symbol>,
    by_length: Vec<(Codeword, Symbol)>,
}

impl DecodingTable {
    fn new(encoding: &EncodingTable) -> Self {
        let exact = encoding
            .iter()
            .map(|(symbol, codeword)| (codeword.clone(), symbol))
            .collect::<HashMap<_, _>>();

        debug_assert_eq!(exact.len(), encoding.len(), "Codewords must be pairwise distinct");

        let by_length = encoding
            .iter()
            .map(|(symbol, codeword)| (codeword.clone(), symbol))
            .sorted_by_key(|(codeword, _)| Reverse(codeword.len()))
            .collect();

        Self { exact, by_length }
    }

    #[inline(always)]
    pub fn get(&self, codeword: &Codeword) -> Option<Symbol> {
        self.exact.get(codeword).copied()
    }

    /// Looks up the codeword made of exactly the given bits.
    #[inline(always)]
    pub fn get_bits(&self, bits: &Bits) -> Option<Symbol> {
        self.get(&Codeword::from_bits(bits))
    }

    /// Returns the longest codeword which is a prefix of `bits`, together with its symbol.
    pub fn longest_prefix(&self, bits: &Bits) -> Option<(&Codeword, Symbol)> {
        self.by_length
            .iter()
            .find(|(codeword, _)| codeword.is_prefix_of(bits))
            .map(|(codeword, symbol)| (codeword, *symbol))
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

/// The on-disk representation of a [`SymbolTables`].
///
/// Only the symbol order is stored (as code points) along with the frequencies: codewords are
/// regenerated on load by the canonical generator, which yields the very same assignments.
#[derive(Clone, Debug, Epserde, MemDbg, MemSize)]
pub struct TablePrelude {
    /// The code points of the symbols, in rank order.
    pub symbols: Vec<u32>,

    /// The frequency of each symbol, parallel to `symbols`.
    pub frequencies: Vec<usize>,
}

/// The tables built from a text: the symbol order, the frequencies, and the two directions of the
/// symbol ↔ codeword bijection.
#[derive(Clone, Debug, Default)]
pub struct SymbolTables {
    order: Vec<Symbol>,
    frequencies: Vec<Freq>,
    encoding: EncodingTable,
    decoding: DecodingTable,
    delimiter_safe: bool,
}

impl SymbolTables {
    /// Binds `order[i]` to `codewords[i]`.
    pub(crate) fn from_parts(order: Vec<Symbol>, frequencies: Vec<Freq>, codewords: Vec<Codeword>) -> Self {
        let delimiter_safe = codewords.iter().all(|codeword| !codeword.contains_delimiter());
        let encoding = EncodingTable::new(order.iter().copied().zip(codewords).collect());
        let decoding = DecodingTable::new(&encoding);

        Self {
            order,
            frequencies,
            encoding,
            decoding,
            delimiter_safe,
        }
    }

    /// The distinct symbols sorted by descending frequency.
    pub fn order(&self) -> &[Symbol] {
        &self.order
    }

    pub fn frequency(&self, symbol: Symbol) -> Option<Freq> {
        self.encoding.rank(symbol).map(|rank| self.frequencies[rank])
    }

    pub fn rank(&self, symbol: Symbol) -> Option<Rank> {
        self.encoding.rank(symbol)
    }

    pub fn encoding(&self) -> &EncodingTable {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingTable {
        &self.decoding
    }

    /// Returns true if no assigned codeword contains the [`DELIMITER`](crate::DELIMITER), that is
    /// if every bitstream encoded with these tables can be decoded exactly.
    pub fn is_delimiter_safe(&self) -> bool {
        self.delimiter_safe
    }

    /// Returns true if every codeword is the one the canonical generator assigns to its rank.
    pub fn is_canonical(&self) -> bool {
        self.encoding
            .iter()
            .enumerate()
            .all(|(rank, (_, codeword))| *codeword == ThermometerGenerator::codeword_at(rank))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn to_prelude(&self) -> TablePrelude {
        TablePrelude {
            symbols: self.order.iter().map(|&symbol| symbol as u32).collect(),
            frequencies: self.frequencies.clone(),
        }
    }

    /// Rebuilds the tables from a prelude, assigning codewords with the canonical generator.
    ///
    /// Fails with [`CodecError::MalformedTables`] if the prelude has not one frequency per symbol
    /// or lists a symbol twice.
    pub fn from_prelude(prelude: &TablePrelude) -> Result<Self, CodecError> {
        if prelude.symbols.len() != prelude.frequencies.len() {
            return Err(CodecError::MalformedTables(format!(
                "{} symbols but {} frequencies",
                prelude.symbols.len(),
                prelude.frequencies.len()
            )));
        }
        if let Some(duplicate) = prelude.symbols.iter().duplicates().next() {
            return Err(CodecError::MalformedTables(format!(
                "code point {:#x} is listed more than once",
                duplicate
            )));
        }

        let order = prelude
            .symbols
            .iter()
            .map(|&code_point| char::from_u32(code_point).ok_or(CodecError::InvalidCodePoint(code_point)))
            .collect::<Result<Vec<_>, _>>()?;
        let codewords = ThermometerGenerator::new().take(order.len()).collect();

        Ok(Self::from_parts(order, prelude.frequencies.clone(), codewords))
    }

    /// Stores the tables in the file at `path`.
    pub fn store(&self, path: impl AsRef<Path>) -> Result<()> {
        if !self.is_canonical() {
            bail!("Only tables built with the canonical generator can be stored");
        }

        let path = path.as_ref();
        let prelude = self.to_prelude();
        info!(
            "Storing {} symbols ({} bytes in memory) to {}",
            prelude.symbols.len(),
            prelude.mem_size(SizeFlags::default()),
            path.display()
        );
        prelude
            .store(path)
            .with_context(|| format!("Could not store the tables to {}", path.display()))?;
        Ok(())
    }

    /// Loads the tables previously [stored](Self::store) in the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let prelude = TablePrelude::load_full(path)
            .with_context(|| format!("Could not load the tables from {}", path.display()))?;

        Self::from_prelude(&prelude)
            .with_context(|| format!("Could not rebuild the tables stored in {}", path.display()))
    }
}
