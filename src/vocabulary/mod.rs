pub mod bow;
pub mod builder;

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use bow::{encode_corpus, Corpus, CorpusRow};
pub use builder::VocabularyBuilder;

/// Dense integer id of a vocabulary token.
pub type TokenId = u32;

pub const DEFAULT_NO_BELOW: u64 = 5;
pub const DEFAULT_KEEP_N: usize = 50_000;

/// Pruning thresholds for [`Vocabulary::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// minimum document frequency a token needs to be kept
    pub no_below: u64,
    /// when set, drop tokens found in more than this fraction of documents
    pub no_above: Option<f64>,
    /// maximum vocabulary size
    pub keep_n: usize,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            no_below: DEFAULT_NO_BELOW,
            no_above: None,
            keep_n: DEFAULT_KEEP_N,
        }
    }
}

impl VocabularyConfig {
    pub fn new(no_below: u64, keep_n: usize) -> Self {
        Self {
            no_below,
            no_above: None,
            keep_n,
        }
    }

    /// `no_above` must lie in `(0, 1]`.
    pub fn with_no_above(mut self, no_above: f64) -> Result<Self> {
        self.no_above = Some(no_above);
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(fraction) = self.no_above {
            if !(fraction > 0.0 && fraction <= 1.0) {
                return Err(Error::InvalidConfig(format!(
                    "no_above must be in (0, 1], got {fraction}"
                )));
            }
        }
        Ok(())
    }
}

/// Per-token counts measured while scanning documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenStats {
    /// documents containing the token at least once
    pub doc_freq: u64,
    /// total occurrences over all documents
    pub collection_freq: u64,
}

/// Pruned token <-> id mapping.
///
/// The id of a token is its position in the map, so ids are always dense
/// (`0..len`). A `Vocabulary` is only produced by
/// [`VocabularyBuilder::finish`] and is never mutated afterwards.
///
/// `num_docs`, `num_pos` and `num_nnz` describe the scanned input before pruning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub(crate) tokens: IndexMap<Box<str>, TokenStats>,
    pub(crate) num_docs: u64,
    pub(crate) num_pos: u64,
    pub(crate) num_nnz: u64,
}

impl Vocabulary {
    /// Scan `token_sequences` and prune with `config`.
    pub fn build<S, T>(token_sequences: &[S], config: &VocabularyConfig) -> Self
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        let mut builder = VocabularyBuilder::new();
        builder.add_documents::<S, T>(token_sequences);
        builder.finish(config)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.tokens.get_index_of(token).map(|i| i as TokenId)
    }

    #[inline]
    pub fn token(&self, id: TokenId) -> Option<&str> {
        self.tokens.get_index(id as usize).map(|(t, _)| t.as_ref())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    pub fn stats(&self, id: TokenId) -> Option<&TokenStats> {
        self.tokens.get_index(id as usize).map(|(_, s)| s)
    }

    pub fn doc_freq(&self, id: TokenId) -> Option<u64> {
        self.stats(id).map(|s| s.doc_freq)
    }

    pub fn collection_freq(&self, id: TokenId) -> Option<u64> {
        self.stats(id).map(|s| s.collection_freq)
    }

    /// Documents scanned.
    #[inline]
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    /// Token positions scanned.
    #[inline]
    pub fn num_pos(&self) -> u64 {
        self.num_pos
    }

    /// Distinct (document, token) pairs scanned.
    #[inline]
    pub fn num_nnz(&self) -> u64 {
        self.num_nnz
    }

    /// `(id, token, stats)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, &str, &TokenStats)> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .map(|(i, (t, s))| (i as TokenId, t.as_ref(), s))
    }

    /// The `n` tokens with highest document frequency, ties by id.
    pub fn most_common(&self, n: usize) -> Vec<(TokenId, &str, u64)> {
        let mut ranked: Vec<(TokenId, &str, u64)> =
            self.iter().map(|(id, t, s)| (id, t, s.doc_freq)).collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2));
        ranked.truncate(n);
        ranked
    }

    /// Bag-of-words row of `tokens`; unknown tokens are ignored.
    pub fn doc2bow<T>(&self, tokens: &[T]) -> CorpusRow
    where
        T: AsRef<str>,
    {
        CorpusRow::from_ids(
            tokens
                .iter()
                .filter_map(|t| self.id_of(t.as_ref()))
                .collect(),
        )
    }

    /// Like [`doc2bow`](Self::doc2bow), also returning occurrence counts of
    /// the tokens that are not in the vocabulary.
    pub fn doc2bow_with_missing<T>(&self, tokens: &[T]) -> (CorpusRow, BTreeMap<String, u32>)
    where
        T: AsRef<str>,
    {
        let mut ids = Vec::with_capacity(tokens.len());
        let mut missing: BTreeMap<String, u32> = BTreeMap::new();
        for token in tokens {
            let token = token.as_ref();
            match self.id_of(token) {
                Some(id) => ids.push(id),
                None => *missing.entry(token.to_owned()).or_insert(0) += 1,
            }
        }
        (CorpusRow::from_ids(ids), missing)
    }

    /// Id of each token in order, `None` for unknown tokens.
    pub fn doc2idx<T>(&self, tokens: &[T]) -> Vec<Option<TokenId>>
    where
        T: AsRef<str>,
    {
        tokens.iter().map(|t| self.id_of(t.as_ref())).collect()
    }
}

/// Build a vocabulary with the given thresholds.
///
/// Empty input yields an empty vocabulary.
pub fn build_vocabulary<S, T>(token_sequences: &[S], no_below: u64, keep_n: usize) -> Vocabulary
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    Vocabulary::build::<S, T>(token_sequences, &VocabularyConfig::new(no_below, keep_n))
}
