use bow_corpus::{clean, make_corpus, make_dictionary, VocabularyConfig};

fn main() {
    let abstracts = [
        "The cat sat on the mat.",
        "The dog sat on the rug.",
        "Cats and dogs are great pets and friends.",
        "A mat is for a cat.",
        "The rug is for a dog.",
    ];

    // tokenize
    let texts = clean(&abstracts);
    for (text, tokens) in abstracts.iter().zip(&texts) {
        println!("{text:<45} -> {tokens:?}");
    }

    // build the vocabulary, keeping tokens seen in at least 2 documents
    let vocabulary = make_dictionary(&texts, &VocabularyConfig::new(2, 50_000));
    for (id, token, stats) in vocabulary.iter() {
        println!("{id}\t{token}\tdf={}", stats.doc_freq);
    }

    // encode
    let corpus = make_corpus(&vocabulary, &texts);
    for (i, row) in corpus.iter().enumerate() {
        println!("doc{i}: {:?}", row.as_slice());
    }
}
