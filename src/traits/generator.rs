use crate::codes::Codeword;

/// A source of codewords in rank order.
///
/// Implementors must yield pairwise-distinct codewords of non-decreasing length, and enough of
/// them for every symbol of the texts they are used with (the canonical generator never ends): the symbol
/// tables bind the `i`-th codeword to the `i`-th most frequent symbol, so the order in which
/// codewords are produced is what makes frequent symbols cheap.
///
/// # Note
/// Nothing in this trait forces an implementation to avoid the [`DELIMITER`](crate::DELIMITER)
/// inside its codewords. Tables built from a generator that doesn't avoid it can only be decoded
/// on a best-effort basis, see [`Decoder`](crate::Decoder).
pub trait CodewordGenerator: Iterator<Item = Codeword> {
    /// Returns the next `n` codewords, exactly as `n` calls to [`Iterator::next`] would.
    ///
    /// The result is shorter than `n` only if the generator runs dry.
    fn take_codewords(&mut self, n: usize) -> Vec<Codeword>
    where
        Self: Sized,
    {
        self.by_ref().take(n).collect()
    }
}
