use crate::checkers::is_scheme_token;
use crate::compat::{String, ToString, Vec};
use crate::error::ConfigurationError;

/// Schemes allowed when no whitelist is configured
pub const DEFAULT_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Ordered, non-empty whitelist of URL schemes.
///
/// Entries are stored lowercase without duplicates and matched
/// case-insensitively. A value can only be built through validation, so it
/// is never empty and every entry is a valid scheme token.
///
/// # Examples
///
/// ```
/// use strict_url::AllowedSchemes;
///
/// let schemes = AllowedSchemes::new(["HTTPS", "ftp", "https"]).unwrap();
/// assert_eq!(schemes.iter().collect::<Vec<_>>(), ["https", "ftp"]);
/// assert!(schemes.contains("FTP"));
/// assert!(AllowedSchemes::new(Vec::<&str>::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct AllowedSchemes {
    schemes: Vec<String>,
}

impl AllowedSchemes {
    /// Validate entries in order and build a whitelist from them.
    ///
    /// # Errors
    ///
    /// Fails on the first empty or illegal entry, or if there are no entries.
    pub fn new<I, S>(schemes: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut accepted: Vec<String> = Vec::new();
        for (index, scheme) in schemes.into_iter().enumerate() {
            let scheme = scheme.as_ref();
            if scheme.is_empty() {
                tracing::debug!(index, "rejected empty scheme");
                return Err(ConfigurationError::EmptyScheme { index });
            }
            if !is_scheme_token(scheme) {
                tracing::debug!(index, len = scheme.len(), "rejected illegal scheme");
                return Err(ConfigurationError::IllegalScheme {
                    index,
                    scheme: scheme.to_string(),
                });
            }
            let scheme = scheme.to_ascii_lowercase();
            if !accepted.contains(&scheme) {
                accepted.push(scheme);
            }
        }

        if accepted.is_empty() {
            tracing::debug!("rejected empty scheme list");
            return Err(ConfigurationError::EmptyList);
        }
        Ok(Self { schemes: accepted })
    }

    /// Check if `scheme` is whitelisted (ASCII case-insensitive)
    pub fn contains(&self, scheme: &str) -> bool {
        self.schemes.iter().any(|s| s.eq_ignore_ascii_case(scheme))
    }

    /// Iterate over the schemes in configuration order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.schemes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    /// Never true for a whitelist built through validation
    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }
}

impl Default for AllowedSchemes {
    fn default() -> Self {
        Self {
            schemes: DEFAULT_SCHEMES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl TryFrom<&str> for AllowedSchemes {
    type Error = ConfigurationError;

    fn try_from(scheme: &str) -> Result<Self, Self::Error> {
        Self::new([scheme])
    }
}

impl TryFrom<Vec<String>> for AllowedSchemes {
    type Error = ConfigurationError;

    fn try_from(schemes: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(schemes)
    }
}

impl From<AllowedSchemes> for Vec<String> {
    fn from(schemes: AllowedSchemes) -> Self {
        schemes.schemes
    }
}

/// Anything that can configure a scheme whitelist: a single scheme, a
/// collection of schemes, or an already validated [`AllowedSchemes`].
pub trait IntoAllowedSchemes {
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the schemes do not form a valid
    /// whitelist.
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError>;
}

impl IntoAllowedSchemes for AllowedSchemes {
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError> {
        Ok(self)
    }
}

impl IntoAllowedSchemes for &str {
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError> {
        AllowedSchemes::new([self])
    }
}

impl IntoAllowedSchemes for String {
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError> {
        AllowedSchemes::new([self])
    }
}

impl<S: AsRef<str>> IntoAllowedSchemes for Vec<S> {
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError> {
        AllowedSchemes::new(self)
    }
}

impl<S: AsRef<str>> IntoAllowedSchemes for &[S] {
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError> {
        AllowedSchemes::new(self)
    }
}

impl<S: AsRef<str>, const N: usize> IntoAllowedSchemes for [S; N] {
    fn into_allowed_schemes(self) -> Result<AllowedSchemes, ConfigurationError> {
        AllowedSchemes::new(self)
    }
}
