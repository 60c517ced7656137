//! Artefact download logic.
//!
//! Provides a trait-based abstraction for retrieving the binary a formula
//! points at, enabling dependency injection for testing. The production
//! implementation streams the response body into a [`TempArtefact`].

use super::temp_artefact::TempArtefact;
use log::debug;
use std::io::{Read, Write};
use std::sync::OnceLock;

/// Size of each chunk copied from the response body.
const CHUNK_SIZE: usize = 8192;

/// Trait for fetching an artefact into transient local storage.
///
/// Abstractions allow tests to stand in for HTTP without network access.
///
/// # Examples
///
/// ```
/// use brewgen::artefact::download::HttpFetcher;
///
/// let fetcher = HttpFetcher;
/// // Use fetcher.fetch("https://example.com/tool") in production
/// ```
#[cfg_attr(test, mockall::automock)]
pub trait ArtefactFetcher {
    /// Retrieve `url` into a private temporary file.
    ///
    /// Ownership of the file passes to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the temporary file cannot be written.
    fn fetch(&self, url: &str) -> Result<TempArtefact, DownloadError>;
}

/// Errors arising from artefact download operations.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// HTTP request failed or the body could not be read.
    #[error("download failed for {url}: {reason}")]
    HttpError {
        /// The URL that was requested.
        url: String,
        /// A human-readable description of the failure.
        reason: String,
    },

    /// The requested artefact was not found (HTTP 404).
    #[error("artefact not found: {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// I/O error writing the downloaded file.
    #[error("I/O error writing download: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP-based fetcher using a blocking `ureq` agent.
///
/// No timeout or retry is configured; a failed download aborts the run.
pub struct HttpFetcher;

impl ArtefactFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<TempArtefact, DownloadError> {
        let response = http_agent()
            .get(url)
            .call()
            .map_err(|e| map_ureq_error(url, &e))?;
        debug!("GET {url} answered {}", response.status());

        let mut reader = response.into_body().into_reader();
        let (artefact, mut file) = TempArtefact::create()?;
        let written = copy_in_chunks(&mut reader, &mut file).map_err(|e| match e {
            CopyError::Read(err) => DownloadError::HttpError {
                url: url.to_owned(),
                reason: err.to_string(),
            },
            CopyError::Write(err) => DownloadError::Io(err),
        })?;
        file.flush()?;
        debug!(
            "downloaded {written} bytes to {}",
            artefact.path().display()
        );
        Ok(artefact)
    }
}

/// Which side of a chunked copy failed.
#[derive(Debug)]
enum CopyError {
    Read(std::io::Error),
    Write(std::io::Error),
}

/// Copy `reader` into `writer` in fixed-size chunks, returning the byte
/// count.
fn copy_in_chunks(reader: &mut dyn Read, writer: &mut dyn Write) -> Result<u64, CopyError> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CopyError::Read(e)),
        };
        writer
            .write_all(&buffer[..bytes_read])
            .map_err(CopyError::Write)?;
        total += bytes_read as u64;
    }
    Ok(total)
}

/// Shared `ureq` agent.
fn http_agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        let config = ureq::Agent::config_builder().build();
        ureq::Agent::new_with_config(config)
    })
}

/// Map a ureq error to a [`DownloadError`].
fn map_ureq_error(url: &str, err: &ureq::Error) -> DownloadError {
    match err {
        ureq::Error::StatusCode(404) => DownloadError::NotFound {
            url: url.to_owned(),
        },
        other => DownloadError::HttpError {
            url: url.to_owned(),
            reason: other.to_string(),
        },
    }
}
