//! Language Preference Port - Interface for the persisted language choice.
//!
//! The preference is a single scalar stored under [`LANGUAGE_PREFERENCE_KEY`].
//! Stored values outside the supported set read back as absent.

use async_trait::async_trait;

use crate::domain::foundation::Language;

/// Fixed key under which the current language code is stored.
pub const LANGUAGE_PREFERENCE_KEY: &str = "language";

/// Errors that can occur while reading or writing the preference.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize preference: {0}")]
    Serialization(String),
}

/// Port for persisting the user's language choice.
#[async_trait]
pub trait LanguagePreferenceStore: Send + Sync {
    /// Read the stored language. `Ok(None)` when nothing valid is stored.
    async fn load(&self) -> Result<Option<Language>, PreferenceError>;

    /// Store `language` as the current choice.
    async fn save(&self, language: Language) -> Result<(), PreferenceError>;
}
