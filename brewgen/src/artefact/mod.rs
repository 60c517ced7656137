//! Artefact retrieval and content hashing.
//!
//! The formula pins its download by content hash, so the artefact has to be
//! fetched and digested locally before anything is rendered.
//!
//! # Sub-modules
//!
//! - [`digest`] - Single-pass SHA-256 and MD5 computation (`DigestPair`).
//! - [`download`] - Fetcher trait and blocking HTTP implementation.
//! - [`error`] - Validation errors for digest values.
//! - [`hex_digest`] - Validated hex digest newtypes (`Sha256Digest`, `Md5Digest`).
//! - [`temp_artefact`] - Scoped ownership of the downloaded temporary file.

pub mod digest;
pub mod download;
pub mod error;
pub mod hex_digest;
pub mod temp_artefact;
