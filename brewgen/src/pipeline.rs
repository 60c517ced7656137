//! Formula generation pipeline.
//!
//! Runs the whole flow for one [`FormulaRequest`]: normalise the name,
//! prepare the output directory, fetch the artefact, digest it, render the
//! formula and write it out. The fetcher and writer are injected so tests
//! can run the pipeline without network or filesystem side effects.

use crate::artefact::digest::{DigestError, DigestPair, compute_digests};
use crate::artefact::download::{ArtefactFetcher, HttpFetcher};
use crate::error::Result;
use crate::formula::{FormulaSpec, FormulaText, render};
use crate::formula_name::FormulaName;
use crate::output::{
    digest_lines, download_message, formula_path, write_stdout_line, written_message,
};
use crate::request::FormulaRequest;
use crate::writer::{FormulaWriter, FsFormulaWriter};
use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use std::io::Write;
use std::path::Path;

/// Settings for one pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig<'a> {
    /// Directory that receives the formula file, already resolved.
    pub output_dir: &'a Utf8Path,
    /// Suppress the download progress line.
    pub quiet: bool,
    /// Print the formula instead of writing it.
    pub dry_run: bool,
}

/// The outcome of a successful run.
#[derive(Debug, Clone)]
pub struct GeneratedFormula {
    /// Normalised identifiers for the formula.
    pub name: FormulaName,
    /// Digests of the downloaded artefact.
    pub digests: DigestPair,
    /// The rendered formula.
    pub text: FormulaText,
    /// Where the formula was written; `None` on a dry run.
    pub path: Option<Utf8PathBuf>,
}

/// Generate a formula using the production HTTP fetcher and filesystem
/// writer.
///
/// # Errors
///
/// Returns an error if the name is invalid, the download fails, the
/// artefact cannot be hashed, or the formula cannot be written.
pub fn generate_formula(
    request: &FormulaRequest,
    config: &PipelineConfig<'_>,
    stdout: &mut dyn Write,
) -> Result<GeneratedFormula> {
    generate_formula_with(request, config, &HttpFetcher, &FsFormulaWriter, stdout)
}

/// Testable inner function with injected collaborators.
///
/// The production entry point [`generate_formula`] delegates here with real
/// implementations; tests inject stubs or mocks.
///
/// # Errors
///
/// See [`generate_formula`].
pub fn generate_formula_with(
    request: &FormulaRequest,
    config: &PipelineConfig<'_>,
    fetcher: &dyn ArtefactFetcher,
    writer: &dyn FormulaWriter,
    stdout: &mut dyn Write,
) -> Result<GeneratedFormula> {
    // Validation happens before any network activity.
    let name = FormulaName::parse(request.name())?;
    debug!("normalised {:?} to {name}", request.name());

    let path = formula_path(config.output_dir, &name);
    if !config.dry_run {
        writer.prepare_dir(config.output_dir)?;
    }

    if !config.quiet {
        write_stdout_line(stdout, download_message(request.url()));
    }
    let digests = fetch_and_digest(fetcher, request.url())?;

    let spec = FormulaSpec::from_request(request, &name, digests.sha256());
    let text = render(&spec);

    let written = if config.dry_run {
        stdout.write_all(text.as_str().as_bytes())?;
        None
    } else {
        writer.write_formula(&path, &text)?;
        write_stdout_line(stdout, written_message(&path));
        Some(path)
    };

    for line in digest_lines(&digests) {
        write_stdout_line(stdout, line);
    }

    Ok(GeneratedFormula {
        name,
        digests,
        text,
        path: written,
    })
}

/// Fetch `url` and digest it, releasing the temporary file whether or not
/// hashing succeeds.
fn fetch_and_digest(fetcher: &dyn ArtefactFetcher, url: &str) -> Result<DigestPair> {
    fetch_and_digest_using(fetcher, url, compute_digests)
}

fn fetch_and_digest_using<F>(
    fetcher: &dyn ArtefactFetcher,
    url: &str,
    digest: F,
) -> Result<DigestPair>
where
    F: FnOnce(&Path) -> std::result::Result<DigestPair, DigestError>,
{
    let artefact = fetcher.fetch(url)?;
    let digests = digest(artefact.path());
    artefact.release();
    Ok(digests?)
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
