#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod domain;
mod error;
mod helpers;
mod ipv4;
mod ipv6;
mod parser;
mod scheme;
mod types;
mod unicode;
mod url_components;
mod url_value;

// Public API
pub use error::{ConfigurationError, Error, ValidationError};
pub use scheme::{AllowedSchemes, DEFAULT_SCHEMES, IntoAllowedSchemes};
pub use types::HostKind;
pub use url_value::Url;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Check whether `input` is a valid URL for the given whitelist without
/// keeping its decomposition.
///
/// # Examples
///
/// ```
/// use strict_url::{AllowedSchemes, is_valid};
///
/// let schemes = AllowedSchemes::default();
/// assert!(is_valid("https://example.com/", &schemes));
/// assert!(!is_valid("http://10.0.0.1/", &schemes));
/// ```
pub fn is_valid(input: &str, schemes: &AllowedSchemes) -> bool {
    let mut url = Url::with_allowed_schemes(schemes.clone());
    url.validate(input).is_ok()
}
