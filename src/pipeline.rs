//! One-call and two-call shapes of the vocabulary + corpus step.
//!
//! Both shapes take already tokenized documents (see [`crate::clean`]) and
//! produce identical results for identical input.

use crate::vocabulary::{encode_corpus, Corpus, Vocabulary, VocabularyConfig};

/// Build the vocabulary, then encode every document against it.
pub fn dict_corpus<S, T>(texts: &[S], config: &VocabularyConfig) -> (Vocabulary, Corpus)
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    let vocabulary = make_dictionary::<S, T>(texts, config);
    let corpus = make_corpus::<S, T>(&vocabulary, texts);
    (vocabulary, corpus)
}

pub fn make_dictionary<S, T>(texts: &[S], config: &VocabularyConfig) -> Vocabulary
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    Vocabulary::build::<S, T>(texts, config)
}

pub fn make_corpus<S, T>(vocabulary: &Vocabulary, texts: &[S]) -> Corpus
where
    S: AsRef<[T]>,
    T: AsRef<str>,
{
    encode_corpus::<S, T>(vocabulary, texts)
}
