//! Error types for corpus access and queries.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PidexError {
    /// Opening or mapping one of the corpus files failed.
    #[error("{}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A digit or index position outside the corpus was requested.
    #[error("position {pos} out of range for {limit} entries")]
    OutOfRange { pos: usize, limit: usize },

    /// A query contained something other than an ASCII decimal digit.
    #[error("query byte {byte:#04x} is not a decimal digit")]
    InvalidQuery { byte: u8 },

    /// The suffix index does not hold one entry per corpus digit.
    #[error("suffix index is {actual} bytes, want {expected} (4 per digit)")]
    IndexMismatch { expected: u64, actual: u64 },
}

pub type Result<T> = std::result::Result<T, PidexError>;
