//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and image-decoding errors, and provides semantic
//! variants for shape validation and argument checking.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open or decode resource {path:?}: {source}")]
    Resource {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Input dimensions must match, got {got:?} and {expected:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn resource(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Error::Resource {
            path: path.into(),
            source,
        }
    }
}
