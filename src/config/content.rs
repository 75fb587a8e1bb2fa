//! Content configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Location of the question and translation files
#[derive(Debug, Clone, Deserialize)]
pub struct ContentConfig {
    /// Directory containing `quiz/` and `translations/`
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
}

impl ContentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("content.content_dir"));
        }
        Ok(())
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            content_dir: default_content_dir(),
        }
    }
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}
