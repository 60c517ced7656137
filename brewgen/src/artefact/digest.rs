//! Single-pass content hashing for downloaded artefacts.
//!
//! The artefact is read once in fixed-size chunks and every chunk feeds both
//! the SHA-256 accumulator (embedded in the formula) and the MD5 accumulator
//! (reported to the maintainer).

use super::hex_digest::{Md5Digest, Sha256Digest};
use md5::Md5;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Size of each read while hashing.
const CHUNK_SIZE: usize = 8192;

/// Errors arising while digesting an artefact.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// The artefact could not be opened or read.
    #[error("failed to read artefact for hashing: {0}")]
    Io(#[from] std::io::Error),
}

/// The SHA-256 and MD5 digests of one byte stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestPair {
    sha256: Sha256Digest,
    md5: Md5Digest,
}

impl DigestPair {
    /// The SHA-256 digest.
    #[must_use]
    pub fn sha256(&self) -> &Sha256Digest {
        &self.sha256
    }

    /// The MD5 digest.
    #[must_use]
    pub fn md5(&self) -> &Md5Digest {
        &self.md5
    }
}

/// Rolling accumulator updating both hashes from the same chunks.
#[derive(Default)]
struct DualHasher {
    sha256: Sha256,
    md5: Md5,
}

impl DualHasher {
    fn update(&mut self, chunk: &[u8]) {
        self.sha256.update(chunk);
        self.md5.update(chunk);
    }

    fn finish(self) -> DigestPair {
        let sha256 = format!("{:x}", self.sha256.finalize());
        let md5 = format!("{:x}", self.md5.finalize());
        // sha2 and md-5 always produce lowercase hex of the right length.
        DigestPair {
            sha256: Sha256Digest::try_from(sha256).expect("sha2 produces valid hex"),
            md5: Md5Digest::try_from(md5).expect("md-5 produces valid hex"),
        }
    }
}

/// Compute the SHA-256 and MD5 digests of the file at `path`.
///
/// The file is consumed in 8 KiB chunks; each chunk updates both hashes, so
/// the artefact is only read once.
///
/// # Errors
///
/// Returns [`DigestError::Io`] if the file cannot be opened or a read fails.
pub fn compute_digests(path: &Path) -> Result<DigestPair, DigestError> {
    let mut file = fs::File::open(path)?;
    let mut hasher = DualHasher::default();
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }
    Ok(hasher.finish())
}

/// Compute the SHA-256 and MD5 digests of an in-memory byte slice.
///
/// # Examples
///
/// ```
/// use brewgen::artefact::digest::digest_bytes;
///
/// let pair = digest_bytes(b"");
/// assert_eq!(pair.md5().as_str(), "d41d8cd98f00b204e9800998ecf8427e");
/// ```
#[must_use]
pub fn digest_bytes(bytes: &[u8]) -> DigestPair {
    let mut hasher = DualHasher::default();
    for chunk in bytes.chunks(CHUNK_SIZE) {
        hasher.update(chunk);
    }
    hasher.finish()
}
