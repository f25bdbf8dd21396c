//! ID configuration types.
//!
//! A [`PartialIdConfiguration`] is what callers hand in; [`normalize`] merges
//! it over the defaults into a fully populated [`IdConfiguration`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::alphabet;
use crate::error::{Result, ShortIdError};

/// Default ID length in characters.
pub const DEFAULT_LENGTH: i64 = 16;

/// Character set family to sample from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Style {
    /// `A-Z a-z 0-9`.
    Alphanumeric,
    /// Alphanumeric plus RFC 3986 unreserved (and optionally sub-delim) symbols.
    #[default]
    Extended,
    /// Hexadecimal digits.
    Hex,
}

impl Style {
    /// Lowercase name used in settings files and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Alphanumeric => "alphanumeric",
            Self::Extended => "extended",
            Self::Hex => "hex",
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = ShortIdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alphanumeric" => Ok(Self::Alphanumeric),
            "extended" => Ok(Self::Extended),
            "hex" => Ok(Self::Hex),
            other => Err(ShortIdError::InvalidStyle(other.to_string())),
        }
    }
}

impl TryFrom<String> for Style {
    type Error = ShortIdError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Fully resolved generation profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdConfiguration {
    /// Profile name; empty for ad-hoc configurations.
    pub name: String,

    /// Number of characters to generate.
    ///
    /// Signed so that a caller-supplied non-positive value reaches
    /// [`IdConfiguration::validate`] instead of being silently replaced.
    pub length: i64,

    /// Drop uppercase letters from the alphabet.
    pub only_lower_case: bool,

    /// Alphabet family.
    pub style: Style,

    /// Restrict `extended` to symbols that need no percent-encoding.
    pub url_safe: bool,
}

impl Default for IdConfiguration {
    fn default() -> Self {
        Self {
            name: String::new(),
            length: DEFAULT_LENGTH,
            only_lower_case: false,
            style: Style::Extended,
            url_safe: true,
        }
    }
}

impl IdConfiguration {
    /// Validate the configuration and return the length as a `usize`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortIdError::InvalidLength`] if `length <= 0`.
    pub fn validate(&self) -> Result<usize> {
        usize::try_from(self.length)
            .ok()
            .filter(|&len| len > 0)
            .ok_or(ShortIdError::InvalidLength(self.length))
    }

    /// The ordered alphabet this configuration samples from.
    #[must_use]
    pub fn alphabet(&self) -> &'static [u8] {
        alphabet::resolve(self.style, self.only_lower_case, self.url_safe)
    }

    /// Whether `id` has the configured length and only alphabet characters.
    #[must_use]
    pub fn matches(&self, id: &str) -> bool {
        let alphabet = self.alphabet();
        usize::try_from(self.length).is_ok_and(|len| len == id.len())
            && id.bytes().all(|b| alphabet.contains(&b))
    }
}

/// Caller-supplied configuration with every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartialIdConfiguration {
    /// Profile name.
    pub name: Option<String>,

    /// Number of characters to generate.
    pub length: Option<i64>,

    /// Drop uppercase letters from the alphabet.
    #[serde(alias = "onlyLowerCase")]
    pub only_lower_case: Option<bool>,

    /// Alphabet family.
    pub style: Option<Style>,

    /// Restrict `extended` to URL-safe symbols.
    #[serde(alias = "urlSafe")]
    pub url_safe: Option<bool>,
}

impl PartialIdConfiguration {
    /// Start a partial configuration carrying only a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the length.
    #[must_use]
    pub const fn length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the lowercase-only flag.
    #[must_use]
    pub const fn only_lower_case(mut self, only_lower_case: bool) -> Self {
        self.only_lower_case = Some(only_lower_case);
        self
    }

    /// Set the style.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    /// Set the URL-safety flag.
    #[must_use]
    pub const fn url_safe(mut self, url_safe: bool) -> Self {
        self.url_safe = Some(url_safe);
        self
    }

    /// The name if present and non-empty.
    #[must_use]
    pub fn required_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Merge `partial` over the default configuration.
///
/// Only absent fields take defaults; an explicit `length` of zero is kept
/// and rejected later by [`IdConfiguration::validate`].
#[must_use]
pub fn normalize(partial: &PartialIdConfiguration) -> IdConfiguration {
    let defaults = IdConfiguration::default();
    IdConfiguration {
        name: partial.name.clone().unwrap_or(defaults.name),
        length: partial.length.unwrap_or(defaults.length),
        only_lower_case: partial.only_lower_case.unwrap_or(defaults.only_lower_case),
        style: partial.style.unwrap_or(defaults.style),
        url_safe: partial.url_safe.unwrap_or(defaults.url_safe),
    }
}
