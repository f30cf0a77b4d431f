//! Error types for the alignment and reconciliation core.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the aligner, the reconciler, and canonical menu loading.
///
/// All of these are fatal for a run: nothing here is transient, so callers
/// report them rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Observed and canonical sequences have different lengths.
    #[error(
        "cardinality mismatch: {canonical} canonical entries but {observed} observed labels"
    )]
    CardinalityMismatch {
        /// Number of canonical entries.
        canonical: usize,
        /// Number of observed labels.
        observed: usize,
    },

    /// An aligned identifier has no canonical rank.
    #[error("unknown identifier {0:?}: no canonical rank")]
    UnknownIdentifier(String),

    /// The same identifier appears twice in the canonical sequence.
    #[error("duplicate canonical identifier {0:?}")]
    DuplicateIdentifier(String),
}
