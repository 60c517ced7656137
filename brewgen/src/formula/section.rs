//! Formula sections.
//!
//! Each section is a pure function of typed [`FormulaSpec`] fields that
//! yields the Ruby lines it contributes. The Ruby syntax here is the Homebrew
//! formula DSL and must not drift: taps parse it as-is.

use super::FormulaSpec;

/// Indentation of a formula body line.
const INDENT: &str = "  ";

/// One ordered part of a rendered formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// `class ... < Formula` with `desc`, `homepage` and `version`.
    Header,
    /// The `url` declaration, with the no-unzip directive when requested.
    Url,
    /// The `sha256` declaration.
    Digest,
    /// The `def install` block.
    Install,
    /// The `def post_install` hook clearing quarantine and signing.
    PostInstall,
    /// The `test do` smoke test.
    Test,
    /// The closing `end` of the class.
    Footer,
    /// A separating blank line.
    Blank,
}

impl Section {
    /// Render this section's lines.
    #[must_use]
    pub fn lines(self, spec: &FormulaSpec) -> Vec<String> {
        match self {
            Self::Header => vec![
                format!("class {} < Formula", spec.class_name),
                format!("{INDENT}desc \"{}\"", spec.description),
                format!("{INDENT}homepage \"{}\"", spec.homepage),
                format!("{INDENT}version \"{}\"", spec.version),
            ],
            Self::Url => url_lines(spec),
            Self::Digest => vec![format!("{INDENT}sha256 \"{}\"", spec.sha256)],
            Self::Install => vec![
                format!("{INDENT}def install"),
                format!("{INDENT}{INDENT}bin.install \"{}\"", spec.binary_name),
                format!("{INDENT}end"),
            ],
            Self::PostInstall => post_install_lines(&spec.binary_name),
            Self::Test => vec![
                format!("{INDENT}test do"),
                format!(
                    "{INDENT}{INDENT}assert_match \"{}\", shell_output(\"#{{bin}}/{} --version\")",
                    smoke_test_token(&spec.binary_name),
                    spec.binary_name
                ),
                format!("{INDENT}end"),
            ],
            Self::Footer => vec!["end".to_owned()],
            Self::Blank => vec![String::new()],
        }
    }
}

fn url_lines(spec: &FormulaSpec) -> Vec<String> {
    if spec.skip_extraction {
        vec![
            format!("{INDENT}url \"{}\",", spec.url),
            "      using: :nounzip".to_owned(),
        ]
    } else {
        vec![format!("{INDENT}url \"{}\"", spec.url)]
    }
}

fn post_install_lines(binary_name: &str) -> Vec<String> {
    let target = format!("bin/\"{binary_name}\"");
    vec![
        format!("{INDENT}def post_install"),
        format!("{INDENT}{INDENT}system \"/bin/chmod\", \"755\", {target}"),
        format!(
            "{INDENT}{INDENT}system \"/usr/bin/xattr\", \"-drs\", \"com.apple.quarantine\", {target}"
        ),
        format!(
            "{INDENT}{INDENT}system \"/usr/bin/codesign\", \"--force\", \"--deep\", \"-s\", \"-\", {target}"
        ),
        format!("{INDENT}end"),
    ]
}

/// The text the smoke test expects in `--version` output: the first
/// whitespace-delimited token of the binary name.
fn smoke_test_token(binary_name: &str) -> &str {
    binary_name.split_whitespace().next().unwrap_or(binary_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::plain("cruma", "cruma")]
    #[case::with_argument("cruma tunnel", "cruma")]
    #[case::blank("   ", "   ")]
    fn smoke_test_token_takes_first_word(#[case] binary: &str, #[case] expected: &str) {
        assert_eq!(smoke_test_token(binary), expected);
    }

    #[test]
    fn post_install_orders_permission_quarantine_signature() {
        let lines = post_install_lines("cruma");
        assert_eq!(lines.len(), 5);
        assert!(lines[1].contains("/bin/chmod"));
        assert!(lines[2].contains("com.apple.quarantine"));
        assert!(lines[3].contains("/usr/bin/codesign"));
        assert!(lines.iter().skip(1).take(3).all(|l| l.ends_with("bin/\"cruma\"")));
    }
}
