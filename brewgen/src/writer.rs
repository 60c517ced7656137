//! Formula persistence.
//!
//! The pipeline talks to the filesystem through [`FormulaWriter`] so tests
//! can capture output in memory. The production [`FsFormulaWriter`] writes
//! in place; a crash mid-write can leave a truncated file.

use crate::error::{GeneratorError, Result};
use crate::formula::FormulaText;
use camino::Utf8Path;
use log::debug;
use std::fs;

/// Destination for rendered formulae.
#[cfg_attr(test, mockall::automock)]
pub trait FormulaWriter {
    /// Ensure `dir` exists, creating parents as needed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::OutputDir`] if the directory cannot be
    /// created.
    fn prepare_dir(&self, dir: &Utf8Path) -> Result<()>;

    /// Write `text` to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::WriteFailed`] if the file cannot be written.
    fn write_formula(&self, path: &Utf8Path, text: &FormulaText) -> Result<()>;
}

/// Writes formulae to the local filesystem.
pub struct FsFormulaWriter;

impl FormulaWriter for FsFormulaWriter {
    fn prepare_dir(&self, dir: &Utf8Path) -> Result<()> {
        fs::create_dir_all(dir).map_err(|source| GeneratorError::OutputDir {
            path: dir.to_owned(),
            source,
        })?;
        debug!("output directory ready at {dir}");
        Ok(())
    }

    fn write_formula(&self, path: &Utf8Path, text: &FormulaText) -> Result<()> {
        fs::write(path, text.as_str()).map_err(|source| GeneratorError::WriteFailed {
            path: path.to_owned(),
            source,
        })
    }
}
