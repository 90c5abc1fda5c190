//! Error types for s3-manifest.
//!
//! This crate provides:
//! - [`SmError`] - Top-level error enum shared by the library and the CLI
//! - [`Result`] - Result alias using [`SmError`]
//!
//! Only [`SmError::OutOfRange`] originates in the manifest selection logic.
//! The other variants wrap failures from the surrounding shell (listing,
//! configuration, output) and are propagated unchanged.

use thiserror::Error;

/// Top-level error type for s3-manifest.
#[derive(Error, Debug)]
pub enum SmError {
    /// A requested rank falls outside `1..=count` of the manifest list.
    ///
    /// Raised for every ranked query against an empty list.
    #[error("Out of range ({count} items)")]
    OutOfRange { count: usize },

    /// Configuration errors (invalid pattern, unusable paths)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Bucket listing failed
    #[error("Listing error: {0}")]
    Listing(String),

    /// Writing results failed
    #[error("Output error: {0}")]
    Output(String),

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SmError {
    /// Returns `true` if this is an [`SmError::OutOfRange`] error.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Number of available items carried by an out-of-range error.
    pub fn available_items(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { count } => Some(*count),
            _ => None,
        }
    }
}

/// Result type alias using SmError.
pub type Result<T> = std::result::Result<T, SmError>;
