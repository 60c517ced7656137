//! Homebrew formula rendering.
//!
//! A formula is assembled from an ordered list of [`Section`]s chosen from
//! the [`FormulaSpec`] flags, then passed once through a whitespace
//! normalisation step: trailing whitespace is stripped from every line and
//! the text ends with exactly one newline.
//!
//! # Example
//!
//! ```
//! use brewgen::formula::{FormulaSpec, render};
//!
//! let spec = FormulaSpec {
//!     class_name: "Cruma".to_owned(),
//!     description: "Cruma tunnel agent".to_owned(),
//!     homepage: "https://cruma.io".to_owned(),
//!     version: "0.3.0".to_owned(),
//!     url: "https://files.cruma.io/cruma".to_owned(),
//!     sha256: "0".repeat(64),
//!     binary_name: "cruma".to_owned(),
//!     skip_extraction: true,
//!     ad_hoc_sign: false,
//! };
//!
//! let text = render(&spec);
//! assert!(text.as_str().starts_with("class Cruma < Formula\n"));
//! assert!(text.as_str().contains("using: :nounzip"));
//! ```

mod section;

pub use section::Section;

use crate::artefact::hex_digest::Sha256Digest;
use crate::formula_name::FormulaName;
use crate::request::FormulaRequest;
use std::fmt;

/// Typed inputs to the formula template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaSpec {
    /// Ruby class identifier.
    pub class_name: String,
    /// One-line description.
    pub description: String,
    /// Project homepage.
    pub homepage: String,
    /// Version string, embedded verbatim.
    pub version: String,
    /// Artefact download URL.
    pub url: String,
    /// Hex SHA-256 of the artefact.
    pub sha256: String,
    /// Name of the installed binary.
    pub binary_name: String,
    /// Emit `using: :nounzip` on the URL declaration.
    pub skip_extraction: bool,
    /// Emit the `post_install` signing hook.
    pub ad_hoc_sign: bool,
}

impl FormulaSpec {
    /// Assemble template inputs from a request, its normalised name and the
    /// artefact digest.
    #[must_use]
    pub fn from_request(
        request: &FormulaRequest,
        name: &FormulaName,
        sha256: &Sha256Digest,
    ) -> Self {
        Self {
            class_name: name.class().to_owned(),
            description: request.description(),
            homepage: request.homepage().to_owned(),
            version: request.version().to_owned(),
            url: request.url().to_owned(),
            sha256: sha256.as_str().to_owned(),
            binary_name: request.binary_name().to_owned(),
            skip_extraction: request.skip_extraction(),
            ad_hoc_sign: request.ad_hoc_sign(),
        }
    }

    /// The ordered sections this spec renders.
    #[must_use]
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![
            Section::Header,
            Section::Blank,
            Section::Url,
            Section::Digest,
            Section::Blank,
            Section::Install,
        ];
        if self.ad_hoc_sign {
            sections.extend([Section::PostInstall, Section::Blank]);
        }
        sections.extend([Section::Test, Section::Footer]);
        sections
    }
}

/// Rendered formula text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaText(String);

impl FormulaText {
    /// Return the formula as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for FormulaText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FormulaText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render the formula for `spec`.
#[must_use]
pub fn render(spec: &FormulaSpec) -> FormulaText {
    let raw = spec
        .sections()
        .into_iter()
        .flat_map(|section| section.lines(spec))
        .collect::<Vec<_>>()
        .join("\n");
    FormulaText(normalise_whitespace(&raw))
}

/// Strip trailing whitespace from every line, drop leading and trailing
/// newlines, and terminate with exactly one newline.
fn normalise_whitespace(text: &str) -> String {
    let mut out = text
        .trim_matches('\n')
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}
