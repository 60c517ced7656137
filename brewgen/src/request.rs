//! The caller-supplied description of a formula to generate.
//!
//! A [`FormulaRequest`] is built once from command-line input and never
//! mutated. Optional fields are resolved to their defaults on access.

/// Homepage used when the caller does not supply one.
pub const DEFAULT_HOMEPAGE: &str = "https://example.com";

/// Immutable input bundle for one formula.
///
/// # Examples
///
/// ```
/// use brewgen::request::FormulaRequest;
///
/// let request = FormulaRequest::new("cruma-tunnel", "0.3.0", "https://example.com/cruma")
///     .with_binary_name("cruma")
///     .with_skip_extraction(true);
///
/// assert_eq!(request.description(), "cruma-tunnel CLI");
/// assert_eq!(request.binary_name(), "cruma");
/// assert!(request.ad_hoc_sign());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaRequest {
    name: String,
    version: String,
    url: String,
    description: Option<String>,
    homepage: String,
    binary_name: Option<String>,
    skip_extraction: bool,
    ad_hoc_sign: bool,
}

impl FormulaRequest {
    /// Create a request with the required fields and default options.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            url: url.into(),
            description: None,
            homepage: DEFAULT_HOMEPAGE.to_owned(),
            binary_name: None,
            skip_extraction: false,
            ad_hoc_sign: true,
        }
    }

    /// Set the one-line description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the project homepage.
    #[must_use]
    pub fn with_homepage(mut self, homepage: impl Into<String>) -> Self {
        self.homepage = homepage.into();
        self
    }

    /// Set the name of the binary inside the download.
    #[must_use]
    pub fn with_binary_name(mut self, binary_name: impl Into<String>) -> Self {
        self.binary_name = Some(binary_name.into());
        self
    }

    /// Mark the artefact as a raw binary that must not be extracted.
    #[must_use]
    pub fn with_skip_extraction(mut self, skip_extraction: bool) -> Self {
        self.skip_extraction = skip_extraction;
        self
    }

    /// Toggle the post-install hook that ad-hoc signs the binary.
    #[must_use]
    pub fn with_ad_hoc_sign(mut self, ad_hoc_sign: bool) -> Self {
        self.ad_hoc_sign = ad_hoc_sign;
        self
    }

    /// The raw project name as supplied.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version string, embedded verbatim.
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// The artefact download URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The description, defaulting to `"<name> CLI"` when absent or empty.
    #[must_use]
    pub fn description(&self) -> String {
        match self.description.as_deref() {
            Some(desc) if !desc.is_empty() => desc.to_owned(),
            _ => format!("{} CLI", self.name),
        }
    }

    /// The project homepage.
    #[must_use]
    pub fn homepage(&self) -> &str {
        &self.homepage
    }

    /// The binary name, defaulting to the raw name when absent or empty.
    #[must_use]
    pub fn binary_name(&self) -> &str {
        match self.binary_name.as_deref() {
            Some(binary) if !binary.is_empty() => binary,
            _ => &self.name,
        }
    }

    /// Whether the no-unzip directive is emitted.
    #[must_use]
    pub fn skip_extraction(&self) -> bool {
        self.skip_extraction
    }

    /// Whether the post-install signing hook is emitted.
    #[must_use]
    pub fn ad_hoc_sign(&self) -> bool {
        self.ad_hoc_sign
    }
}
