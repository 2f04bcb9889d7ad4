//! Core error type shared across the crate.

use thiserror::Error;

/// Errors surfaced by clustering operations.
///
/// Domain-violation failures (out-of-range nucleotide access, a corrupt
/// pointer matrix) are contract bugs rather than user errors and panic
/// instead of returning a variant.
#[derive(Debug, Error)]
pub enum EstError {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// GA parameter file contained an unusable entry
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Operation requires a fully aligned result
    #[error("Alignment has not been performed")]
    NotAligned,
}
