use thiserror::Error;

use std::io;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input bytes could not be converted between the configured encodings.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A dynamic key that cannot address a position.
    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("cannot read an undeclared {what} \"{key}\"")]
    OutOfRange { what: &'static str, key: usize },

    #[error("cannot read an undeclared column \"{0}\"")]
    NotFound(String),

    #[error("{0} is not supported")]
    UnsupportedOperation(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
