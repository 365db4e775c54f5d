//! Deep link configuration.
//!
//! Widget taps reach the app as `<scheme>://<action>` URLs. The scheme must
//! match the one the app registers, so flavors such as a debug build with
//! its own scheme can be previewed too.

use serde::{Deserialize, Serialize};

use lulu_widget_protocol::DEFAULT_SCHEME;

use crate::error::{ConfigError, Result};

/// Deep link settings.
///
/// # Examples
///
/// ```
/// use lulu_widget_config::DeepLinkConfig;
///
/// let config = DeepLinkConfig::default();
/// assert_eq!(config.scheme, "lulu");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepLinkConfig {
    /// URL scheme the app registers.
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl Default for DeepLinkConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
        }
    }
}

impl DeepLinkConfig {
    /// Creates a config for a custom scheme.
    #[must_use]
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
        }
    }

    /// Checks that the scheme is a valid URL scheme: an ASCII letter
    /// followed by letters, digits, `+`, `-` or `.`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScheme`] otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use lulu_widget_config::DeepLinkConfig;
    ///
    /// assert!(DeepLinkConfig::with_scheme("lulu-dev").validate().is_ok());
    /// assert!(DeepLinkConfig::with_scheme("lulu://").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason| ConfigError::InvalidScheme {
            scheme: self.scheme.clone(),
            reason,
        };

        let mut chars = self.scheme.chars();
        match chars.next() {
            None => return Err(invalid("scheme is empty")),
            Some(first) if !first.is_ascii_alphabetic() => {
                return Err(invalid("scheme must start with a letter"));
            }
            Some(_) => {}
        }

        if chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) {
            Ok(())
        } else {
            Err(invalid("scheme may only contain letters, digits, '+', '-' or '.'"))
        }
    }
}
