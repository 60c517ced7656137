//! brewgen library.
//!
//! This crate generates a Homebrew formula for a single prebuilt binary: it
//! normalises the project name, downloads the artefact, hashes it, and
//! renders the Ruby formula that pins the download by SHA-256. It is used by
//! the `brewgen` CLI binary and can be consumed programmatically for testing
//! or custom publishing workflows.
//!
//! # Modules
//!
//! - [`artefact`] - Artefact download, temporary storage and hashing
//! - [`cli`] - Command-line argument definitions
//! - [`error`] - Semantic error types
//! - [`formula`] - Formula rendering from typed sections
//! - [`formula_name`] - Kebab-case and class-name normalisation
//! - [`logging`] - Logger initialisation
//! - [`output`] - Output paths and report lines
//! - [`pipeline`] - End-to-end generation with injected collaborators
//! - [`request`] - The immutable formula request
//! - [`writer`] - Formula persistence

pub mod artefact;
pub mod cli;
pub mod error;
pub mod formula;
pub mod formula_name;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod request;
pub mod writer;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
