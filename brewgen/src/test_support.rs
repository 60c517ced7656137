//! Stub collaborators for exercising the pipeline without side effects.
//!
//! Available under `cfg(test)` and the `test-support` feature.

use crate::artefact::download::{ArtefactFetcher, DownloadError};
use crate::artefact::temp_artefact::TempArtefact;
use crate::error::{GeneratorError, Result};
use crate::formula::FormulaText;
use crate::writer::FormulaWriter;
use camino::{Utf8Path, Utf8PathBuf};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// How a [`StubFetcher`] answers.
#[derive(Debug, Clone)]
pub enum FetchBehaviour {
    /// Materialise these bytes into a temporary artefact.
    Bytes(Vec<u8>),
    /// Fail as if the server answered 404.
    NotFound,
    /// Fail with a transport error carrying this reason.
    HttpError(String),
}

/// An [`ArtefactFetcher`] that serves canned content.
#[derive(Debug)]
pub struct StubFetcher {
    behaviour: FetchBehaviour,
    calls: Cell<usize>,
    last_path: RefCell<Option<PathBuf>>,
}

impl StubFetcher {
    /// Create a fetcher with the given behaviour.
    #[must_use]
    pub fn new(behaviour: FetchBehaviour) -> Self {
        Self {
            behaviour,
            calls: Cell::new(0),
            last_path: RefCell::new(None),
        }
    }

    /// Create a fetcher that serves `bytes`.
    #[must_use]
    pub fn serving(bytes: &[u8]) -> Self {
        Self::new(FetchBehaviour::Bytes(bytes.to_vec()))
    }

    /// Number of times [`ArtefactFetcher::fetch`] was called.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    /// Path of the most recently materialised artefact, if any.
    #[must_use]
    pub fn last_artefact_path(&self) -> Option<PathBuf> {
        self.last_path.borrow().clone()
    }
}

impl ArtefactFetcher for StubFetcher {
    fn fetch(&self, url: &str) -> std::result::Result<TempArtefact, DownloadError> {
        self.calls.set(self.calls.get() + 1);
        match &self.behaviour {
            FetchBehaviour::Bytes(bytes) => {
                let artefact = TempArtefact::from_bytes(bytes)?;
                *self.last_path.borrow_mut() = Some(artefact.path().to_path_buf());
                Ok(artefact)
            }
            FetchBehaviour::NotFound => Err(DownloadError::NotFound {
                url: url.to_owned(),
            }),
            FetchBehaviour::HttpError(reason) => Err(DownloadError::HttpError {
                url: url.to_owned(),
                reason: reason.clone(),
            }),
        }
    }
}

/// A [`FormulaWriter`] that records formulae in memory.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    fail_writes: bool,
    prepared: RefCell<Vec<Utf8PathBuf>>,
    written: RefCell<Vec<(Utf8PathBuf, String)>>,
}

impl MemoryWriter {
    /// Create a writer that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer whose writes fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Directories passed to [`FormulaWriter::prepare_dir`].
    #[must_use]
    pub fn prepared_dirs(&self) -> Vec<Utf8PathBuf> {
        self.prepared.borrow().clone()
    }

    /// Formulae written so far, as `(path, text)` pairs.
    #[must_use]
    pub fn written(&self) -> Vec<(Utf8PathBuf, String)> {
        self.written.borrow().clone()
    }
}

impl FormulaWriter for MemoryWriter {
    fn prepare_dir(&self, dir: &Utf8Path) -> Result<()> {
        self.prepared.borrow_mut().push(dir.to_owned());
        Ok(())
    }

    fn write_formula(&self, path: &Utf8Path, text: &FormulaText) -> Result<()> {
        if self.fail_writes {
            return Err(GeneratorError::StubFailure {
                message: format!("write to {path} refused"),
            });
        }
        self.written
            .borrow_mut()
            .push((path.to_owned(), text.as_str().to_owned()));
        Ok(())
    }
}
