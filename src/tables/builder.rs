use std::collections::HashMap;

use itertools::Itertools;
use log::{debug, info, warn};

use crate::codes::thermometer::ThermometerGenerator;
use crate::tables::SymbolTables;
use crate::traits::generator::CodewordGenerator;
use crate::{Freq, Symbol};

/// The number of occurrences of every distinct symbol of a text, together with the order in which
/// the symbols have been seen for the first time.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<Symbol, Freq>,

    /// The distinct symbols, in order of first occurrence.
    first_seen: Vec<Symbol>,

    /// The sum of all the frequencies.
    total: usize,
}

impl FrequencyTable {
    pub fn push(&mut self, symbol: Symbol) {
        let count = self.counts.entry(symbol).or_insert(0);
        if *count == 0 {
            self.first_seen.push(symbol);
        }
        *count += 1;
        self.total += 1;
    }

    pub fn get(&self, symbol: Symbol) -> Option<Freq> {
        self.counts.get(&symbol).copied()
    }

    /// The number of distinct symbols.
    pub fn len(&self) -> usize {
        self.first_seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.first_seen.is_empty()
    }

    /// The number of pushed occurrences.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Returns the distinct symbols sorted by descending frequency.
    ///
    /// Symbols with the same frequency keep the order of their first occurrence in the text, so
    /// that the result never depends on the iteration order of the underlying map.
    pub fn symbol_order(&self) -> Vec<Symbol> {
        self.first_seen
            .iter()
            .copied()
            .sorted_by(|first, second| self.counts[second].cmp(&self.counts[first]))
            .collect()
    }
}

/// Builds the [`SymbolTables`] of a text.
///
/// Symbols are pushed one at a time (first traversal of the text); [`build`](Self::build) then
/// binds the most frequent symbols to the shortest codewords.
#[derive(Clone, Debug, Default)]
pub struct SymbolTableBuilder {
    frequencies: FrequencyTable,
}

impl SymbolTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that has already seen every char of the given (normalized) text.
    pub fn from_text(text: &str) -> Self {
        let mut builder = Self::new();
        builder.push_symbols(text.chars());
        builder
    }

    pub fn push_symbol(&mut self, symbol: Symbol) {
        self.frequencies.push(symbol);
    }

    pub fn push_symbols(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        for symbol in symbols {
            self.push_symbol(symbol);
        }
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Builds the tables with the canonical [`ThermometerGenerator`].
    pub fn build(self) -> SymbolTables {
        self.build_with(ThermometerGenerator::new())
    }

    /// Builds the tables with codewords taken, in rank order, from the given generator.
    ///
    /// The generator is consumed: its cursor belongs to this build only.
    ///
    /// # Panics
    /// If the generator yields fewer codewords than there are distinct symbols.
    pub fn build_with<G: CodewordGenerator>(self, mut generator: G) -> SymbolTables {
        let order = self.frequencies.symbol_order();
        let codewords = generator.take_codewords(order.len());

        assert_eq!(
            order.len(),
            codewords.len(),
            "The generator ran out of codewords after {} of the {} needed",
            codewords.len(),
            order.len()
        );

        let frequencies = order
            .iter()
            .map(|symbol| self.frequencies.counts[symbol])
            .collect::<Vec<_>>();

        for ((symbol, freq), codeword) in order.iter().zip(&frequencies).zip(&codewords) {
            debug!("{:?} (frequency {}) -> {}", symbol, freq, codeword);
        }

        let tables = SymbolTables::from_parts(order, frequencies, codewords);

        info!(
            "Built symbol tables for {} distinct symbols out of {} occurrences",
            tables.len(),
            self.frequencies.total()
        );

        if !tables.is_delimiter_safe() {
            warn!("Some codewords contain the delimiter: decoding will fall back to best-effort prefix matching");
        }

        tables
    }
}
