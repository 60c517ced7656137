//! Hex-encoded digest newtypes.
//!
//! Validates that a value is a lowercase hexadecimal string of the length
//! its algorithm produces: 64 characters for SHA-256, 32 for MD5.

use super::error::{ArtefactError, Result};
use std::fmt;

macro_rules! hex_digest {
    ($(#[$meta:meta])* $name:ident, $algorithm:literal, $len:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Length of the hex encoding in characters.
            pub const HEX_LEN: usize = $len;

            /// Return the digest as a hex string slice.
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

        impl TryFrom<&str> for $name {
            type Error = ArtefactError;

            fn try_from(value: &str) -> Result<Self> {
                validate_hex($algorithm, value, Self::HEX_LEN)?;
                Ok(Self(value.to_owned()))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ArtefactError;

            fn try_from(value: String) -> Result<Self> {
                validate_hex($algorithm, &value, Self::HEX_LEN)?;
                Ok(Self(value))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

hex_digest!(
    /// A validated hex-encoded SHA-256 digest, as embedded in the formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use brewgen::artefact::hex_digest::Sha256Digest;
    ///
    /// let hex = "a".repeat(64);
    /// let digest: Sha256Digest = hex.as_str().try_into().unwrap();
    /// assert_eq!(digest.as_str().len(), 64);
    /// ```
    Sha256Digest,
    "SHA-256",
    64
);

hex_digest!(
    /// A validated hex-encoded MD5 digest, reported alongside the SHA-256.
    Md5Digest,
    "MD5",
    32
);

/// Validate that `value` is a well-formed lowercase hex digest of `len`
/// characters.
fn validate_hex(algorithm: &'static str, value: &str, len: usize) -> Result<()> {
    if value.len() != len {
        return Err(ArtefactError::InvalidDigest {
            algorithm,
            reason: format!("expected {len} hex characters, got {}", value.len()),
        });
    }
    if let Some(bad) = value.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ArtefactError::InvalidDigest {
            algorithm,
            reason: format!("non-hex character '{bad}'"),
        });
    }
    if value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ArtefactError::InvalidDigest {
            algorithm,
            reason: "digest must be lowercase".to_owned(),
        });
    }
    Ok(())
}
