//! Validated namespace prefix

use std::fmt;

use super::RewriteError;

/// A namespace segment prepended to import paths.
///
/// Never empty and never contains a double quote or a line break, so the
/// rewritten declaration is always a single well-formed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix(String);

impl Prefix {
    /// Validate and wrap a prefix
    ///
    /// # Errors
    /// Returns `RewriteError::InvalidPrefix` if the value is empty or
    /// contains `"`, `\n` or `\r`.
    pub fn new(value: impl Into<String>) -> Result<Self, RewriteError> {
        let value = value.into();
        let reason = if value.is_empty() {
            Some("prefix must not be empty")
        } else if value.contains('"') {
            Some("prefix must not contain a double quote")
        } else if value.contains(['\n', '\r']) {
            Some("prefix must not contain a line break")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(RewriteError::InvalidPrefix {
                prefix: value,
                reason,
            }),
            None => Ok(Self(value)),
        }
    }

    /// Get the prefix as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Prefix {
    type Err = RewriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
