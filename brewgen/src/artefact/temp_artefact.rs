//! Scoped ownership of a downloaded artefact.
//!
//! The fetcher materialises the response body into a private, uniquely named
//! temporary file and hands ownership to the caller as a [`TempArtefact`].
//! The file is removed when the guard is released or dropped, whichever comes
//! first. Removal is best effort: a failure is logged as a warning and never
//! reported as an error.

use log::{trace, warn};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::TempPath;

/// File name prefix for downloaded artefacts.
pub const TEMP_PREFIX: &str = "formula-asset-";

/// A temporary artefact file that is deleted when released or dropped.
#[derive(Debug)]
pub struct TempArtefact {
    path: Option<TempPath>,
}

impl TempArtefact {
    /// Create an empty temporary artefact and return it with a writable
    /// handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created.
    pub fn create() -> io::Result<(Self, File)> {
        let named = tempfile::Builder::new().prefix(TEMP_PREFIX).tempfile()?;
        let (file, path) = named.into_parts();
        trace!("created temporary artefact {}", path.display());
        Ok((Self { path: Some(path) }, file))
    }

    /// Create a temporary artefact holding `bytes`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    ///
    /// # Examples
    ///
    /// ```
    /// use brewgen::artefact::temp_artefact::TempArtefact;
    ///
    /// let artefact = TempArtefact::from_bytes(b"\x00\x01").unwrap();
    /// let path = artefact.path().to_path_buf();
    /// assert!(path.exists());
    /// artefact.release();
    /// assert!(!path.exists());
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> io::Result<Self> {
        let (artefact, mut file) = Self::create()?;
        file.write_all(bytes)?;
        file.flush()?;
        Ok(artefact)
    }

    /// Path of the temporary file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.path.as_deref().unwrap_or_else(|| Path::new(""))
    }

    /// Delete the temporary file now.
    ///
    /// Failure to delete is logged and otherwise ignored.
    pub fn release(mut self) {
        self.remove();
    }

    fn remove(&mut self) {
        let Some(path) = self.path.take() else {
            return;
        };
        let display: PathBuf = path.to_path_buf();
        match path.close() {
            Ok(()) => trace!("removed temporary artefact {}", display.display()),
            Err(e) => warn!(
                "failed to remove temporary artefact {}: {e}",
                display.display()
            ),
        }
    }
}

impl Drop for TempArtefact {
    fn drop(&mut self) {
        self.remove();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_uses_prefixed_private_file() {
        let (artefact, _file) = TempArtefact::create().expect("temp file");
        let name = artefact
            .path()
            .file_name()
            .and_then(|n| n.to_str())
            .expect("file name");
        assert!(name.starts_with(TEMP_PREFIX), "name: {name}");
        assert!(artefact.path().exists());
    }

    #[test]
    fn from_bytes_writes_content() {
        let artefact = TempArtefact::from_bytes(b"abcd").expect("temp file");
        let content = std::fs::read(artefact.path()).expect("read back");
        assert_eq!(content, b"abcd");
    }

    #[test]
    fn release_deletes_file() {
        let artefact = TempArtefact::from_bytes(b"abcd").expect("temp file");
        let path = artefact.path().to_path_buf();
        artefact.release();
        assert!(!path.exists());
    }

    #[test]
    fn drop_deletes_file() {
        let path = {
            let artefact = TempArtefact::from_bytes(b"abcd").expect("temp file");
            artefact.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn release_tolerates_already_deleted_file() {
        let artefact = TempArtefact::from_bytes(b"abcd").expect("temp file");
        std::fs::remove_file(artefact.path()).expect("remove early");
        artefact.release();
    }

    #[test]
    fn unique_names_per_artefact() {
        let first = TempArtefact::from_bytes(b"a").expect("temp file");
        let second = TempArtefact::from_bytes(b"a").expect("temp file");
        assert_ne!(first.path(), second.path());
    }
}
