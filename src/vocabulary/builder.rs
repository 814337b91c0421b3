use indexmap::IndexMap;
use tracing::{debug, info};

use super::{TokenStats, Vocabulary, VocabularyConfig};

/// Accumulates document statistics before pruning.
///
/// Tokens are recorded in first-seen order; that order is the candidate id
/// order and survives pruning. Nothing is pruned until [`finish`](Self::finish),
/// since the thresholds need the whole collection.
#[derive(Debug, Default, Clone)]
pub struct VocabularyBuilder {
    stats: IndexMap<Box<str>, TokenStats>,
    num_docs: u64,
    num_pos: u64,
    num_nnz: u64,
}

impl VocabularyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document.
    ///
    /// A token occurring several times in `tokens` raises its document
    /// frequency by one and its collection frequency by its occurrence count.
    pub fn add_document<T>(&mut self, tokens: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        let mut doc_counts: IndexMap<&str, u64> = IndexMap::new();
        for token in tokens {
            *doc_counts.entry(token.as_ref()).or_insert(0) += 1;
        }

        self.num_docs += 1;
        self.num_pos += tokens.len() as u64;
        self.num_nnz += doc_counts.len() as u64;

        for (token, count) in doc_counts {
            if let Some(entry) = self.stats.get_mut(token) {
                entry.doc_freq += 1;
                entry.collection_freq += count;
                continue;
            }
            self.stats.insert(
                token.into(),
                TokenStats {
                    doc_freq: 1,
                    collection_freq: count,
                },
            );
        }
        self
    }

    /// Record each document in order.
    pub fn add_documents<S, T>(&mut self, documents: &[S]) -> &mut Self
    where
        S: AsRef<[T]>,
        T: AsRef<str>,
    {
        for doc in documents {
            self.add_document::<T>(doc.as_ref());
        }
        self
    }

    /// Number of distinct tokens seen so far.
    #[inline]
    pub fn distinct_tokens(&self) -> usize {
        self.stats.len()
    }

    #[inline]
    pub fn num_docs(&self) -> u64 {
        self.num_docs
    }

    /// Prune and re-number into a finished [`Vocabulary`].
    pub fn finish(self, config: &VocabularyConfig) -> Vocabulary {
        let seen = self.stats.len();
        let no_above_abs = config
            .no_above
            .map(|fraction| (fraction * self.num_docs as f64) as u64);

        // (candidate id, doc freq); candidate ids are positions in `stats`
        let mut survivors: Vec<(usize, u64)> = self
            .stats
            .values()
            .enumerate()
            .filter(|(_, s)| s.doc_freq >= config.no_below)
            .filter(|(_, s)| no_above_abs.map_or(true, |max| s.doc_freq <= max))
            .map(|(id, s)| (id, s.doc_freq))
            .collect();
        debug!(
            seen,
            kept = survivors.len(),
            no_below = config.no_below,
            no_above = ?config.no_above,
            "Applied document frequency bounds"
        );

        if survivors.len() > config.keep_n {
            // stable: equal frequencies stay in first-seen order
            survivors.sort_by(|a, b| b.1.cmp(&a.1));
            survivors.truncate(config.keep_n);
            survivors.sort_unstable_by_key(|&(id, _)| id);
            debug!(keep_n = config.keep_n, "Capped vocabulary size");
        }

        let mut keep = vec![false; seen];
        for &(id, _) in &survivors {
            keep[id] = true;
        }
        let tokens: IndexMap<Box<str>, TokenStats> = self
            .stats
            .into_iter()
            .enumerate()
            .filter(|(id, _)| keep[*id])
            .map(|(_, entry)| entry)
            .collect();

        info!(
            documents = self.num_docs,
            seen,
            vocabulary = tokens.len(),
            "Built vocabulary"
        );

        Vocabulary {
            tokens,
            num_docs: self.num_docs,
            num_pos: self.num_pos,
            num_nnz: self.num_nnz,
        }
    }
}
