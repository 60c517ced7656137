//! Error types for the formula generator.
//!
//! Every variant is fatal: the run stops at the first one and exits with a
//! non-zero status. Failure to delete the temporary artefact has no
//! variant; it is logged as a warning instead.

use crate::artefact::digest::DigestError;
use crate::artefact::download::DownloadError;
use crate::formula_name::FormulaNameError;
use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur while generating a formula.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The project name cannot be turned into a formula class.
    #[error("invalid formula name: {0}")]
    Validation(#[from] FormulaNameError),

    /// The artefact could not be downloaded.
    #[error(transparent)]
    Fetch(#[from] DownloadError),

    /// The downloaded artefact could not be hashed.
    #[error(transparent)]
    Digest(#[from] DigestError),

    /// The output directory could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        /// The directory that could not be created.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The formula file could not be written.
    #[error("failed to write formula to {path}: {source}")]
    WriteFailed {
        /// The formula path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A path could not be represented as UTF-8.
    #[error("path is not valid UTF-8: {reason}")]
    NonUtf8Path {
        /// Description of the offending path.
        reason: String,
    },

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Test stub was configured to fail.
    #[cfg(any(test, feature = "test-support"))]
    #[error("stub failure: {message}")]
    StubFailure {
        /// Description of the injected failure.
        message: String,
    },
}

/// Result type alias using [`GeneratorError`].
pub type Result<T> = std::result::Result<T, GeneratorError>;
