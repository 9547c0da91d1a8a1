use crate::compat::String;

/// Errors raised while configuring the scheme whitelist.
///
/// A failed configuration never replaces the whitelist already in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The whitelist had no entries
    EmptyList,
    /// The entry at `index` is the empty string
    EmptyScheme { index: usize },
    /// The entry at `index` is not a `[a-z][a-z0-9+.-]*` token
    IllegalScheme { index: usize, scheme: String },
}

impl core::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyList => f.write_str("Allowed schemes cannot be empty"),
            Self::EmptyScheme { index } => {
                write!(f, "Allowed scheme at position {index} cannot be empty")
            }
            Self::IllegalScheme { scheme, .. } => {
                write!(f, "Allowed scheme [{scheme}] contains illegal characters")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigurationError {}

/// Errors raised while validating a URL.
///
/// Every variant except [`ValidationError::Empty`] carries the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input was empty
    Empty,
    /// Input bytes are not valid UTF-8 (stored lossily)
    NotRepresentable { input: String },
    /// Input is not in Unicode normalization form C
    NotNormalized { input: String },
    /// Input does not match the URL grammar
    Malformed { input: String },
    /// The bracketed host is not a public IPv6 address
    InvalidIpv6 { input: String, address: String },
}

impl ValidationError {
    /// The rejected input, empty for [`ValidationError::Empty`].
    pub fn input(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::NotRepresentable { input }
            | Self::NotNormalized { input }
            | Self::Malformed { input }
            | Self::InvalidIpv6 { input, .. } => input,
        }
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => f.write_str("URL cannot be empty"),
            Self::NotRepresentable { .. } => f.write_str("URL must be representable as string"),
            Self::NotNormalized { .. } => f.write_str("URL must be in Unicode normalization form NFC"),
            Self::Malformed { input } => write!(f, "URL [{input}] is invalid"),
            Self::InvalidIpv6 { address, .. } => write!(f, "IPv6 address {address} is invalid"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// Either kind of failure, returned by operations that configure and validate
/// in one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Configuration(ConfigurationError),
    Validation(ValidationError),
}

impl From<ConfigurationError> for Error {
    fn from(error: ConfigurationError) -> Self {
        Self::Configuration(error)
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Configuration(error) => error.fmt(f),
            Self::Validation(error) => error.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Configuration(error) => Some(error),
            Self::Validation(error) => Some(error),
        }
    }
}
