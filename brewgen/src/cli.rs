//! CLI argument definitions for brewgen.
//!
//! This module defines the command-line interface using clap. It is separated
//! from the main entrypoint to keep the binary small and focused on
//! orchestration.

use crate::output::DEFAULT_OUTPUT_DIR;
use crate::request::{DEFAULT_HOMEPAGE, FormulaRequest};
use camino::Utf8PathBuf;
use clap::Parser;

/// Generate a Homebrew formula for a single binary artefact.
#[derive(Parser, Debug, Clone)]
#[command(name = "brewgen")]
#[command(about, disable_version_flag = true)]
#[command(long_about = concat!(
    "Generate a Homebrew formula for a single downloadable binary.\n\n",
    "The artefact is downloaded once, hashed with SHA-256 (embedded in the ",
    "formula) and MD5 (reported), and the formula is written to ",
    "<output-dir>/<name>.rb. Relative output directories are resolved next to ",
    "the brewgen executable.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Generate a formula for a raw binary:\n",
    "    $ brewgen --name cruma-tunnel --version 0.3.0-alpha.10 \\\n",
    "        --url https://files.cruma.io/path/to/binary \\\n",
    "        --desc \"Cruma tunnel agent\" --homepage https://cruma.io \\\n",
    "        --binary-name cruma --nounzip\n\n",
    "  Preview without writing:\n",
    "    $ brewgen --name tool --version 1.0.0 --url https://example.com/tool --dry-run\n",
))]
pub struct Cli {
    /// Formula name (e.g. cruma).
    #[arg(long, value_name = "NAME")]
    pub name: String,

    /// Semantic version or git tag, embedded verbatim.
    #[arg(long, value_name = "VERSION")]
    pub version: String,

    /// Download URL of the binary artefact.
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// One-line description for the formula [default: "NAME CLI"].
    #[arg(long, value_name = "TEXT")]
    pub desc: Option<String>,

    /// Project homepage URL.
    #[arg(long, value_name = "URL", default_value = DEFAULT_HOMEPAGE)]
    pub homepage: String,

    /// Name of the binary inside the download [default: the formula name].
    #[arg(long, value_name = "NAME")]
    pub binary_name: Option<String>,

    /// Directory where the formula file is written.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: Utf8PathBuf,

    /// Include `using: :nounzip` so Homebrew installs the raw binary.
    #[arg(long, visible_alias = "skip-extraction")]
    pub nounzip: bool,

    /// Add a post_install hook that clears quarantine and ad-hoc signs the
    /// binary (default).
    #[arg(long = "ad-hoc-sign", overrides_with = "no_ad_hoc_sign")]
    pub ad_hoc_sign: bool,

    /// Skip the post_install signing hook.
    #[arg(long = "no-ad-hoc-sign", overrides_with = "ad_hoc_sign")]
    pub no_ad_hoc_sign: bool,

    /// Download and render, then print the formula instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(
        short,
        long = "verbose",
        action = clap::ArgAction::Count,
        conflicts_with = "quiet"
    )]
    pub verbosity: u8,

    /// Suppress progress output (results and errors still shown).
    #[arg(short, long, conflicts_with = "verbosity")]
    pub quiet: bool,
}

impl Cli {
    /// Whether the post-install signing hook is requested.
    ///
    /// Signing is on unless `--no-ad-hoc-sign` was the last of the two
    /// toggles given.
    #[must_use]
    pub fn signing_enabled(&self) -> bool {
        !self.no_ad_hoc_sign
    }

    /// Build the immutable [`FormulaRequest`] described by these arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use brewgen::cli::Cli;
    /// use clap::Parser;
    ///
    /// let cli = Cli::parse_from([
    ///     "brewgen", "--name", "cruma", "--version", "1.0.0",
    ///     "--url", "https://example.com/cruma", "--no-ad-hoc-sign",
    /// ]);
    /// let request = cli.request();
    /// assert_eq!(request.binary_name(), "cruma");
    /// assert!(!request.ad_hoc_sign());
    /// ```
    #[must_use]
    pub fn request(&self) -> FormulaRequest {
        let mut request = FormulaRequest::new(&self.name, &self.version, &self.url)
            .with_homepage(&self.homepage)
            .with_skip_extraction(self.nounzip)
            .with_ad_hoc_sign(self.signing_enabled());
        if let Some(desc) = &self.desc {
            request = request.with_description(desc);
        }
        if let Some(binary_name) = &self.binary_name {
            request = request.with_binary_name(binary_name);
        }
        request
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
