//! Formula name normalisation.
//!
//! A formula is known by two identifiers derived from the project name the
//! maintainer supplies: a kebab-case identifier used for the `.rb` file name
//! and a capitalised class identifier used as the Ruby class. This module
//! provides both transforms and the [`FormulaName`] pair built from them.

use std::fmt;
use thiserror::Error;

/// Errors arising from formula name normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormulaNameError {
    /// The raw name has no alphanumeric content to build a class from.
    #[error("formula name \"{raw}\" must contain at least one alphanumeric character")]
    NoAlphanumeric {
        /// The rejected raw name.
        raw: String,
    },
}

/// Convert an arbitrary project name into a filesystem-friendly kebab-case
/// identifier.
///
/// The name is trimmed and lowercased, split on runs of whitespace and
/// underscores, and rejoined with hyphens. Existing hyphens are kept, so the
/// transform is idempotent. A name made only of separators yields an empty
/// string.
///
/// # Examples
///
/// ```
/// use brewgen::formula_name::kebab_case;
///
/// assert_eq!(kebab_case("Cruma Tunnel"), "cruma-tunnel");
/// assert_eq!(kebab_case("cruma-tunnel"), "cruma-tunnel");
/// assert_eq!(kebab_case("my_cool  tool"), "my-cool-tool");
/// ```
#[must_use]
pub fn kebab_case(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_')
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a project name into a Homebrew formula class identifier.
///
/// The name is split on runs of hyphens, underscores and whitespace; each
/// token has its first character uppercased with the remainder left as is,
/// and the tokens are concatenated.
///
/// # Errors
///
/// Returns [`FormulaNameError::NoAlphanumeric`] when the name contains no
/// alphanumeric character.
///
/// # Examples
///
/// ```
/// use brewgen::formula_name::class_name;
///
/// assert_eq!(class_name("cruma-tunnel").unwrap(), "CrumaTunnel");
/// assert_eq!(class_name("my_CLI").unwrap(), "MyCLI");
/// assert!(class_name("---").is_err());
/// ```
pub fn class_name(raw: &str) -> Result<String, FormulaNameError> {
    let class: String = raw
        .trim()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|token| !token.is_empty())
        .map(capitalise_first)
        .collect();

    if class.is_empty() || !raw.chars().any(char::is_alphanumeric) {
        return Err(FormulaNameError::NoAlphanumeric {
            raw: raw.to_owned(),
        });
    }
    Ok(class)
}

fn capitalise_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The normalised identifiers for a formula.
///
/// Both identifiers are derived once from the raw project name and never
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormulaName {
    kebab: String,
    class: String,
}

impl FormulaName {
    /// Normalise a raw project name.
    ///
    /// # Errors
    ///
    /// Returns [`FormulaNameError::NoAlphanumeric`] when no class identifier
    /// can be derived from `raw`.
    pub fn parse(raw: &str) -> Result<Self, FormulaNameError> {
        let class = class_name(raw)?;
        Ok(Self {
            kebab: kebab_case(raw),
            class,
        })
    }

    /// The kebab-case identifier used for the formula file name.
    #[must_use]
    pub fn kebab(&self) -> &str {
        &self.kebab
    }

    /// The Ruby class identifier declared by the formula.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// The formula file name, `<kebab>.rb`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.rb", self.kebab)
    }
}

impl fmt::Display for FormulaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.class, self.kebab)
    }
}
