//! Language enum for the fixed set of supported UI and content languages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A supported language.
///
/// Codes follow the content files on disk (`ua` for Ukrainian, `cn` for Chinese),
/// not ISO 639-1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
    Ua,
    Cn,
    Tr,
}

impl Language {
    /// Every supported language, default first.
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Ru,
        Language::Ua,
        Language::Cn,
        Language::Tr,
    ];

    /// The language used whenever a requested one is unknown.
    pub const DEFAULT: Language = Language::En;

    /// Returns the short code used in URLs, files and stored preferences.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Ua => "ua",
            Language::Cn => "cn",
            Language::Tr => "tr",
        }
    }

    /// Strict parse. Returns `None` for anything outside the supported set.
    pub fn parse(code: &str) -> Option<Language> {
        Language::ALL.into_iter().find(|l| l.code() == code)
    }

    /// Lenient resolve. Unknown or missing codes fall back to [`Language::DEFAULT`].
    pub fn resolve(code: Option<&str>) -> Language {
        code.and_then(Language::parse).unwrap_or(Language::DEFAULT)
    }

    /// Returns true for the fallback language.
    pub fn is_default(&self) -> bool {
        *self == Language::DEFAULT
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::parse(s).ok_or_else(|| {
            ValidationError::invalid_format("language", format!("unsupported code '{}'", s))
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
