//! This crate turns a collection of text abstracts into a bag-of-words corpus
//! for topic modeling.

pub mod error;
pub mod pipeline;
pub mod preprocess;
pub mod vocabulary;

/// Text Preprocessor
/// Normalizes raw text into an ordered list of tokens.
///
/// The default pipeline runs, in this order:
/// - lowercase
/// - strip `<...>` markup
/// - strip ASCII punctuation
/// - collapse whitespace
/// - drop standalone numbers
/// - remove stopwords
/// - drop tokens shorter than 3 chars
///
/// No stemming or lemmatization is applied.
/// The filter list and stopword table are fixed when the `Preprocessor` is built.
pub use preprocess::{Filter, PreprocessConfig, Preprocessor, StopwordLanguage, Stopwords, TokenSequence};

/// Tokenize one text / a batch of texts with the default pipeline.
/// `clean` keeps input order and treats every text independently.
pub use preprocess::{clean, tokenize};

/// Vocabulary
/// A bijective token <-> id mapping with per-token document frequency.
///
/// Built once from all tokenized documents:
/// - document frequency = number of documents containing the token
/// - tokens below `no_below` are dropped
/// - at most `keep_n` of the most frequent tokens are kept
/// - survivors get dense ids `0..len`
///
/// Immutable once built.
pub use vocabulary::{build_vocabulary, TokenId, TokenStats, Vocabulary, VocabularyBuilder, VocabularyConfig};

/// Corpus
/// Bag-of-words rows, one per document, in input order.
/// Each `CorpusRow` holds `(token id, count)` pairs for the tokens found in
/// the vocabulary; other tokens are omitted.
pub use vocabulary::{encode_corpus, Corpus, CorpusRow};

/// Combined (`dict_corpus`) and split (`make_dictionary` + `make_corpus`) pipeline calls.
pub use pipeline::{dict_corpus, make_corpus, make_dictionary};

pub use error::{Error, Result};
