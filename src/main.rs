use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use bow_corpus::{
    dict_corpus, PreprocessConfig, Preprocessor, StopwordLanguage, VocabularyConfig,
};
use clap::Parser;
use tracing::{info, warn};

/// Tokenize abstracts and build a pruned bag-of-words corpus.
///
/// Reads one abstract per line from INPUT (or stdin) and prints the
/// vocabulary summary and, optionally, every encoded row.
#[derive(Parser)]
#[command(name = "bow-corpus", version, about)]
struct Cli {
    /// Input file, one abstract per line ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Minimum number of documents a token must appear in
    #[arg(long, env = "BOW_NO_BELOW", default_value = "5")]
    no_below: u64,

    /// Maximum vocabulary size
    #[arg(long, env = "BOW_KEEP_N", default_value = "50000")]
    keep_n: usize,

    /// Drop tokens found in more than this fraction of documents
    #[arg(long, env = "BOW_NO_ABOVE")]
    no_above: Option<f64>,

    /// Drop tokens shorter than this many characters
    #[arg(long, default_value = "3")]
    min_len: usize,

    /// Stopword table: builtin, en, fr, de, es, it, pt, nl, ru or none
    #[arg(long, default_value = "builtin")]
    language: StopwordLanguage,

    /// How many of the most frequent tokens to list
    #[arg(long, default_value = "20")]
    top: usize,

    /// Print every encoded document
    #[arg(long)]
    rows: bool,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("bow_corpus=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut vocab_config = VocabularyConfig::new(cli.no_below, cli.keep_n);
    if let Some(no_above) = cli.no_above {
        vocab_config = vocab_config.with_no_above(no_above)?;
    }
    let preprocessor = Preprocessor::from_config(&PreprocessConfig {
        min_len: cli.min_len,
        language: cli.language,
    });

    let raw = read_input(cli.input.as_ref())?;
    let abstracts: Vec<&str> = raw.lines().filter(|l| !l.trim().is_empty()).collect();
    if abstracts.is_empty() {
        warn!("No abstracts in input");
    }

    let start = Instant::now();
    let texts = preprocessor.clean(&abstracts);
    let cleaned = Instant::now();
    let (vocabulary, corpus) = dict_corpus(&texts, &vocab_config);
    let built = Instant::now();
    info!(
        documents = abstracts.len(),
        clean_ms = cleaned.duration_since(start).as_secs_f64() * 1000.0,
        build_ms = built.duration_since(cleaned).as_secs_f64() * 1000.0,
        "Pipeline finished"
    );

    println!("documents\t{}", vocabulary.num_docs());
    println!("positions\t{}", vocabulary.num_pos());
    println!("vocabulary\t{}", vocabulary.len());
    println!("nonzeros\t{}", corpus.num_nnz());
    for (id, token, doc_freq) in vocabulary.most_common(cli.top) {
        println!("{id}\t{token}\t{doc_freq}");
    }

    if cli.rows {
        for (i, row) in corpus.iter().enumerate() {
            let pairs: Vec<String> = row.iter().map(|(id, count)| format!("({id},{count})")).collect();
            println!("doc{i}\t{}", pairs.join(" "));
        }
    }
    Ok(())
}
