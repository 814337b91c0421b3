pub mod filter;
pub mod stopwords;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::error::{Error, Result};

pub use filter::{Filter, DEFAULT_MIN_LEN};
pub use stopwords::Stopwords;

/// Ordered, normalized tokens of one document.
pub type TokenSequence = Vec<String>;

/// Which stopword table the default pipeline removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StopwordLanguage {
    /// built-in English table
    #[default]
    Builtin,
    English,
    French,
    German,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    /// keep every word
    None,
}

impl StopwordLanguage {
    pub fn stopwords(self) -> Stopwords {
        match self {
            StopwordLanguage::Builtin => Stopwords::english(),
            StopwordLanguage::English => Stopwords::for_language(LANGUAGE::English),
            StopwordLanguage::French => Stopwords::for_language(LANGUAGE::French),
            StopwordLanguage::German => Stopwords::for_language(LANGUAGE::German),
            StopwordLanguage::Spanish => Stopwords::for_language(LANGUAGE::Spanish),
            StopwordLanguage::Italian => Stopwords::for_language(LANGUAGE::Italian),
            StopwordLanguage::Portuguese => Stopwords::for_language(LANGUAGE::Portuguese),
            StopwordLanguage::Dutch => Stopwords::for_language(LANGUAGE::Dutch),
            StopwordLanguage::Russian => Stopwords::for_language(LANGUAGE::Russian),
            StopwordLanguage::None => Stopwords::none(),
        }
    }
}

impl FromStr for StopwordLanguage {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lang = match s.to_ascii_lowercase().as_str() {
            "builtin" => StopwordLanguage::Builtin,
            "en" | "english" => StopwordLanguage::English,
            "fr" | "french" => StopwordLanguage::French,
            "de" | "german" => StopwordLanguage::German,
            "es" | "spanish" => StopwordLanguage::Spanish,
            "it" | "italian" => StopwordLanguage::Italian,
            "pt" | "portuguese" => StopwordLanguage::Portuguese,
            "nl" | "dutch" => StopwordLanguage::Dutch,
            "ru" | "russian" => StopwordLanguage::Russian,
            "none" => StopwordLanguage::None,
            other => {
                return Err(Error::InvalidConfig(format!(
                    "unknown stopword language `{other}`"
                )))
            }
        };
        Ok(lang)
    }
}

/// Settings for the default preprocessing pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// tokens shorter than this many chars are dropped
    pub min_len: usize,
    pub language: StopwordLanguage,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            min_len: DEFAULT_MIN_LEN,
            language: StopwordLanguage::Builtin,
        }
    }
}

/// Text normalizer.
///
/// Holds an ordered list of [`Filter`]s and the stopword table they use.
/// Both are fixed at construction; a `Preprocessor` is immutable and can be
/// reused for any number of documents.
///
/// # Examples
/// ```
/// use bow_corpus::Preprocessor;
/// let pre = Preprocessor::new();
/// assert_eq!(pre.tokenize("The cat sat on the mat."), vec!["cat", "sat", "mat"]);
/// ```
#[derive(Debug, Clone)]
pub struct Preprocessor {
    filters: Vec<Filter>,
    stopwords: Stopwords,
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl Preprocessor {
    /// Default pipeline with the built-in English stopwords.
    pub fn new() -> Self {
        Self::from_config(&PreprocessConfig::default())
    }

    pub fn from_config(config: &PreprocessConfig) -> Self {
        Self {
            filters: Filter::defaults(config.min_len),
            stopwords: config.language.stopwords(),
        }
    }

    /// Custom pipeline.
    pub fn with_filters(filters: Vec<Filter>, stopwords: Stopwords) -> Self {
        Self { filters, stopwords }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Run every filter in order, then split on whitespace.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let normalized = self
            .filters
            .iter()
            .fold(text.to_owned(), |acc, filter| filter.apply(&acc, &self.stopwords));
        normalized.split_whitespace().map(str::to_owned).collect()
    }

    /// Decode `bytes` as UTF-8 and tokenize.
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> Result<TokenSequence> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.tokenize(text))
    }

    /// Tokenize each text independently, preserving order.
    pub fn clean<T>(&self, abstracts: &[T]) -> Vec<TokenSequence>
    where
        T: AsRef<str>,
    {
        abstracts.iter().map(|text| self.tokenize(text.as_ref())).collect()
    }
}

/// [`Preprocessor::tokenize`] with the default pipeline.
pub fn tokenize(text: &str) -> TokenSequence {
    Preprocessor::new().tokenize(text)
}

/// [`Preprocessor::clean`] with the default pipeline.
pub fn clean<T>(abstracts: &[T]) -> Vec<TokenSequence>
where
    T: AsRef<str>,
{
    Preprocessor::new().clean(abstracts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pipeline_drops_stopwords_and_short_tokens() {
        assert_eq!(tokenize("The dog sat on the rug."), vec!["dog", "sat", "rug"]);
        assert_eq!(tokenize("A mat is for a cat."), vec!["mat", "cat"]);
        assert_eq!(
            tokenize("Cats and dogs are great pets and friends."),
            vec!["cats", "dogs", "great", "pets", "friends"]
        );
    }

    #[test]
    fn markup_numbers_and_punctuation_are_removed() {
        let tokens = tokenize("<p>In 2020, Deep-Learning models (v2) improved 45%!</p>");
        assert_eq!(tokens, vec!["deep", "learning", "models", "improved"]);
    }

    #[test]
    fn no_stemming_is_applied() {
        assert_eq!(tokenize("running studies"), vec!["running", "studies"]);
    }

    #[test]
    fn empty_and_blank_inputs() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("the a is").is_empty());
    }

    #[test]
    fn clean_preserves_order_and_length() {
        let texts = ["alpha beta", "", "gamma delta"];
        let cleaned = clean(&texts);
        assert_eq!(cleaned.len(), 3);
        assert_eq!(cleaned[0], vec!["alpha", "beta"]);
        assert!(cleaned[1].is_empty());
        assert_eq!(cleaned[2], vec!["gamma", "delta"]);
    }

    #[test]
    fn clean_empty_input() {
        let texts: [&str; 0] = [];
        assert!(clean(&texts).is_empty());
    }

    #[test]
    fn clean_is_deterministic() {
        let texts = vec!["Topic models, LDA & friends".to_string(); 3];
        assert_eq!(clean(&texts), clean(&texts));
    }

    #[test]
    fn stage_order_matters() {
        // short-token removal before punctuation stripping keeps "a.b.c" whole
        let reordered = Preprocessor::with_filters(
            vec![Filter::StripShort { min_len: 3 }, Filter::StripPunctuation],
            Stopwords::none(),
        );
        assert_eq!(reordered.tokenize("a.b.c"), vec!["a", "b", "c"]);
        assert!(Preprocessor::new().tokenize("a.b.c").is_empty());
    }

    #[test]
    fn config_min_len_and_language() {
        let pre = Preprocessor::from_config(&PreprocessConfig {
            min_len: 1,
            language: StopwordLanguage::None,
        });
        assert_eq!(pre.tokenize("The cat"), vec!["the", "cat"]);
    }

    #[test]
    fn tokenize_bytes_rejects_invalid_utf8() {
        let pre = Preprocessor::new();
        assert_eq!(pre.tokenize_bytes("hello world".as_bytes()).unwrap(), vec!["hello", "world"]);
        let err = pre.tokenize_bytes(&[0x66, 0x6f, 0xff]).unwrap_err();
        assert!(matches!(err, Error::InvalidUtf8 { .. }));
    }

    #[test]
    fn language_parsing() {
        assert_eq!("EN".parse::<StopwordLanguage>().unwrap(), StopwordLanguage::English);
        assert_eq!("none".parse::<StopwordLanguage>().unwrap(), StopwordLanguage::None);
        assert!("klingon".parse::<StopwordLanguage>().is_err());
    }
}
