//! Output locations and user-facing report lines.
//!
//! Relative output directories are resolved against the directory that holds
//! the running executable, not the current working directory, so the tool
//! writes into the same tap checkout wherever it is invoked from.

use crate::artefact::digest::DigestPair;
use crate::error::{GeneratorError, Result};
use crate::formula_name::FormulaName;
use camino::{Utf8Path, Utf8PathBuf};
use std::io::Write;

/// Output directory used when none is given.
pub const DEFAULT_OUTPUT_DIR: &str = "Formula";

/// Resolve `dir` against the executable's directory when it is relative.
///
/// # Errors
///
/// Returns an error if `dir` is relative and the executable location cannot
/// be determined or is not valid UTF-8.
pub fn resolve_output_dir(dir: &Utf8Path) -> Result<Utf8PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_owned());
    }
    let base = executable_dir()?;
    Ok(resolve_output_dir_from(dir, &base))
}

/// Resolve `dir` against `base` when it is relative.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use brewgen::output::resolve_output_dir_from;
///
/// let base = Utf8Path::new("/opt/tap");
/// assert_eq!(resolve_output_dir_from(Utf8Path::new("Formula"), base), "/opt/tap/Formula");
/// assert_eq!(resolve_output_dir_from(Utf8Path::new("/srv/out"), base), "/srv/out");
/// ```
#[must_use]
pub fn resolve_output_dir_from(dir: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    if dir.is_absolute() {
        dir.to_owned()
    } else {
        base.join(dir)
    }
}

/// The formula file path for `name` inside `output_dir`.
#[must_use]
pub fn formula_path(output_dir: &Utf8Path, name: &FormulaName) -> Utf8PathBuf {
    output_dir.join(name.file_name())
}

/// Directory containing the running executable, with symlinks resolved.
fn executable_dir() -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe()?.canonicalize()?;
    let exe = Utf8PathBuf::try_from(exe).map_err(|e| GeneratorError::NonUtf8Path {
        reason: format!("executable path: {e}"),
    })?;
    Ok(exe.parent().map_or_else(|| exe.clone(), Utf8Path::to_owned))
}

/// Progress line announcing the download.
#[must_use]
pub fn download_message(url: &str) -> String {
    format!("Downloading artefact from {url}...")
}

/// Line reporting where the formula was written.
#[must_use]
pub fn written_message(path: &Utf8Path) -> String {
    format!("Wrote formula to {path}")
}

/// Lines reporting both digests.
#[must_use]
pub fn digest_lines(digests: &DigestPair) -> [String; 2] {
    [
        format!("SHA256: {}", digests.sha256()),
        format!("MD5:    {}", digests.md5()),
    ]
}

/// Write a line to `out`, ignoring failures.
pub fn write_stdout_line(out: &mut dyn Write, message: impl std::fmt::Display) {
    if writeln!(out, "{message}").is_err() {
        // Best-effort reporting; ignore write failures.
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artefact::digest::digest_bytes;

    #[test]
    fn relative_dir_joins_base() {
        let resolved =
            resolve_output_dir_from(Utf8Path::new("Formula"), Utf8Path::new("/opt/tap"));
        assert_eq!(resolved, Utf8PathBuf::from("/opt/tap/Formula"));
    }

    #[test]
    fn absolute_dir_is_kept() {
        let resolved = resolve_output_dir(Utf8Path::new("/srv/formulae")).expect("resolve");
        assert_eq!(resolved, Utf8PathBuf::from("/srv/formulae"));
    }

    #[test]
    fn relative_dir_resolves_next_to_executable() {
        let resolved = resolve_output_dir(Utf8Path::new(DEFAULT_OUTPUT_DIR)).expect("resolve");
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with(DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn formula_path_uses_kebab_name() {
        let name = FormulaName::parse("Cruma Tunnel").expect("valid name");
        let path = formula_path(Utf8Path::new("/out"), &name);
        assert_eq!(path, Utf8PathBuf::from("/out/cruma-tunnel.rb"));
    }

    #[test]
    fn digest_lines_align_labels() {
        let [sha, md5] = digest_lines(&digest_bytes(b"abc"));
        assert!(sha.starts_with("SHA256: ba7816bf"));
        assert!(md5.starts_with("MD5:    9001509"));
    }

    #[test]
    fn messages_include_their_subject() {
        assert_eq!(
            download_message("https://files.test/tool"),
            "Downloading artefact from https://files.test/tool..."
        );
        assert_eq!(
            written_message(Utf8Path::new("/out/tool.rb")),
            "Wrote formula to /out/tool.rb"
        );
    }

    #[test]
    fn write_stdout_line_appends_newline() {
        let mut out = Vec::new();
        write_stdout_line(&mut out, "hello");
        assert_eq!(out, b"hello\n");
    }
}
