use bow_corpus::{clean, dict_corpus, VocabularyConfig};
use criterion::{criterion_group, criterion_main, Criterion};

const WORDS: &[&str] = &[
    "latent", "topic", "model", "inference", "corpus", "document", "variational", "gibbs",
    "sampling", "dirichlet", "allocation", "semantic", "embedding", "neural", "network",
    "protein", "structure", "genome", "sequence", "climate", "ocean", "temperature", "galaxy",
    "cluster", "quantum", "lattice", "graph", "spectral", "matrix", "factorization",
];

/// Deterministic synthetic abstracts (xorshift32 word picks).
fn synthetic_abstracts(n: usize, words_per_doc: usize) -> Vec<String> {
    let mut state = 0x1234_5678u32;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state
    };
    (0..n)
        .map(|i| {
            let mut doc = format!("<p>In {} the", 1990 + i % 30);
            for _ in 0..words_per_doc {
                doc.push(' ');
                doc.push_str(WORDS[next() as usize % WORDS.len()]);
                if next() % 7 == 0 {
                    doc.push_str(", and");
                }
            }
            doc.push_str(".</p>");
            doc
        })
        .collect()
}

fn preprocess_and_build_benchmark(c: &mut Criterion) {
    let abstracts = synthetic_abstracts(2_000, 120);

    c.bench_function("clean", |b| {
        b.iter(|| clean(&abstracts));
    });

    let texts = clean(&abstracts);
    let config = VocabularyConfig::default();
    c.bench_function("dict_corpus", |b| {
        b.iter(|| dict_corpus(&texts, &config));
    });
}

criterion_group!(benches, preprocess_and_build_benchmark);
criterion_main!(benches);
