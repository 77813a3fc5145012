//! Error types for splice-blocks

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] splice_fs::Error),

    #[error("{what} must not be empty")]
    EmptyMarker { what: &'static str },

    #[error("Invalid boundary pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Edit #{index} is invalid: {message}")]
    InvalidEdit { index: usize, message: String },
}
