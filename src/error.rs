use thiserror::Error;

/// Errors raised at the boundaries of the crate.
///
/// The preprocessing and bag-of-words operations themselves are total;
/// only input decoding and configuration validation can fail.
#[derive(Error, Debug)]
pub enum Error {
    #[error("input is not valid UTF-8: {source}")]
    InvalidUtf8 {
        #[from]
        source: std::str::Utf8Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;
