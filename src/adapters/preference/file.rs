//! File-based Language Preference Adapter
//!
//! Stores the preference as a small JSON object, `{"language": "ru"}`.

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::foundation::Language;
use crate::ports::{LanguagePreferenceStore, PreferenceError, LANGUAGE_PREFERENCE_KEY};

/// File-backed language preference.
#[derive(Debug, Clone)]
pub struct FileLanguageStore {
    path: PathBuf,
}

impl FileLanguageStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Map<String, Value>, PreferenceError> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(PreferenceError::Io(e.to_string())),
        };

        // A corrupt file is treated like an empty one.
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(map),
            _ => {
                tracing::warn!(path = %self.path.display(), "Ignoring unreadable preference file");
                Ok(Map::new())
            }
        }
    }
}

#[async_trait]
impl LanguagePreferenceStore for FileLanguageStore {
    async fn load(&self) -> Result<Option<Language>, PreferenceError> {
        let document = self.read_document().await?;
        Ok(document
            .get(LANGUAGE_PREFERENCE_KEY)
            .and_then(Value::as_str)
            .and_then(Language::parse))
    }

    async fn save(&self, language: Language) -> Result<(), PreferenceError> {
        let mut document = self.read_document().await?;
        document.insert(
            LANGUAGE_PREFERENCE_KEY.to_string(),
            Value::String(language.code().to_string()),
        );

        let json = serde_json::to_string_pretty(&Value::Object(document))
            .map_err(|e| PreferenceError::Serialization(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferenceError::Io(e.to_string()))?;
        }
        fs::write(&self.path, json)
            .await
            .map_err(|e| PreferenceError::Io(e.to_string()))?;

        tracing::debug!(language = %language, path = %self.path.display(), "Saved language preference");
        Ok(())
    }
}
