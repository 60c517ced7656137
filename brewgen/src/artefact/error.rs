//! Error types for artefact digest values.
//!
//! Each variant names the algorithm whose value was rejected and the
//! constraint that was violated.

use thiserror::Error;

/// Errors arising from invalid artefact-related values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArtefactError {
    /// A digest is not a well-formed lowercase hex string of the right length.
    #[error("invalid {algorithm} digest: {reason}")]
    InvalidDigest {
        /// The hash algorithm the value claimed to come from.
        algorithm: &'static str,
        /// Description of the validation failure.
        reason: String,
    },
}

/// Result type alias using [`ArtefactError`].
pub type Result<T> = std::result::Result<T, ArtefactError>;
