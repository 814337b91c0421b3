use serde::{Deserialize, Serialize};

use super::{TokenId, Vocabulary};

/// One document as sparse `(token id, count)` pairs, sorted by id.
///
/// Only ids of the [`Vocabulary`] the row was encoded against appear;
/// out-of-vocabulary tokens are dropped, not approximated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusRow {
    entries: Vec<(TokenId, u32)>,
}

impl CorpusRow {
    /// Group raw ids into counted entries.
    pub(crate) fn from_ids(mut ids: Vec<TokenId>) -> Self {
        ids.sort_unstable();
        let mut entries: Vec<(TokenId, u32)> = Vec::new();
        for id in ids {
            match entries.last_mut() {
                Some((last, count)) if *last == id => *count += 1,
                _ => entries.push((id, 1)),
            }
        }
        Self { entries }
    }

    /// Number of distinct ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (TokenId, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[(TokenId, u32)] {
        &self.entries
    }

    /// Occurrences of `id`, 0 if absent.
    pub fn count(&self, id: TokenId) -> u32 {
        self.entries
            .binary_search_by_key(&id, |&(i, _)| i)
            .map_or(0, |pos| self.entries[pos].1)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, c)| c as u64).sum()
    }
}

/// Bag-of-words rows in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    rows: Vec<CorpusRow>,
}

impl Corpus {
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CorpusRow> {
        self.rows.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CorpusRow> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[CorpusRow] {
        &self.rows
    }

    /// Total number of non-zero entries over all rows.
    pub fn num_nnz(&self) -> usize {
        self.rows.iter().map(CorpusRow::len).sum()
    }

    /// One past the largest id referenced, 0 for an empty corpus.
    pub fn num_terms(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.entries.last().map(|&(id, _)| id as usize + 1))
            .max()
            .unwrap_or(0)
    }

    pub fn into_rows(self) -> Vec<CorpusRow> {
        self.rows
    }
}

impl FromIterator<CorpusRow> for Corpus {
    fn from_iter<I: IntoIterator<Item = CorpusRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a CorpusRow;
    type IntoIter = std::slice::Iter<'a, CorpusRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Encode every sequence against `vocabulary`, preserving order.
pub fn encode_corpus<S, T>(vocabulary: &Vocabulary, token_sequences: &[S]) -> Corpus
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    token_sequences
        .iter()
        .map(|tokens| vocabulary.doc2bow::<T>(tokens.as_ref()))
        .collect()
}
