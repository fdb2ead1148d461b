/// The characters removed by default: space, the common punctuation marks `, . ! : ;`, the en
/// dash and line breaks.
///
/// A plain hyphen is deliberately not part of the set, so that hyphenated words keep it as a
/// symbol of their own.
pub const DEFAULT_SEPARATORS: &[char] = &[' ', ',', '.', '!', ':', ';', '–', '\n', '\r'];

/// How raw text is turned into the symbol sequence fed to the codec.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// The characters dropped from the text.
    pub separators: Vec<char>,

    /// Whether the remaining characters are lower-cased.
    pub lowercase: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_vec(),
            lowercase: true,
        }
    }
}

/// Removes the configured separators from a text and, optionally, lower-cases what is left.
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn normalize(&self, text: &str) -> String {
        let kept = text.chars().filter(|c| !self.config.separators.contains(c));

        if self.config.lowercase {
            kept.flat_map(char::to_lowercase).collect()
        } else {
            kept.collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_strips_separators_and_folds_case() {
        let normalizer = Normalizer::default();
        assert_eq!("helloworldisit-me?", normalizer.normalize("Hello, World!\r\nIs it - me?"));
        assert_eq!("abcd", normalizer.normalize("A.b;C:–d"));
    }

    #[test]
    fn custom_separators_and_case_are_honoured() {
        let normalizer = Normalizer::new(NormalizerConfig {
            separators: vec!['-'],
            lowercase: false,
        });
        assert_eq!("A B", normalizer.normalize("A-- B"));
    }

    #[test]
    fn lowercasing_may_expand_characters() {
        assert_eq!("i\u{307}", Normalizer::default().normalize("\u{130}"));
    }
}
