//! In-Memory Language Preference Adapter
//!
//! Key-value store mirroring browser local storage. Useful for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::Language;
use crate::ports::{LanguagePreferenceStore, PreferenceError, LANGUAGE_PREFERENCE_KEY};

/// In-memory key-value store holding the language preference.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLanguageStore {
    values: Arc<RwLock<HashMap<String, String>>>,
}

impl InMemoryLanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a raw value under `key`, bypassing validation (for tests).
    pub async fn set_raw(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().await.insert(key.into(), value.into());
    }

    /// Read the raw value under `key`.
    pub async fn get_raw(&self, key: &str) -> Option<String> {
        self.values.read().await.get(key).cloned()
    }
}

#[async_trait]
impl LanguagePreferenceStore for InMemoryLanguageStore {
    async fn load(&self) -> Result<Option<Language>, PreferenceError> {
        let values = self.values.read().await;
        Ok(values
            .get(LANGUAGE_PREFERENCE_KEY)
            .and_then(|code| Language::parse(code)))
    }

    async fn save(&self, language: Language) -> Result<(), PreferenceError> {
        self.values
            .write()
            .await
            .insert(LANGUAGE_PREFERENCE_KEY.to_string(), language.code().to_string());
        Ok(())
    }
}
