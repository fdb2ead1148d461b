/// Returns how many bits `text` takes in UTF-8 for every bit of its encoded form, that is
/// `8 * text.len() / encoded_bits`, or `None` if nothing has been encoded.
///
/// This is a diagnostic: a value above 1 means the bitstream is smaller than the raw text.
pub fn efficiency(text: &str, encoded_bits: usize) -> Option<f64> {
    if encoded_bits == 0 {
        return None;
    }
    Some((text.len() * 8) as f64 / encoded_bits as f64)
}
