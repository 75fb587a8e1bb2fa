//! HTTP DTOs for translation endpoints.

pub use crate::application::handlers::TranslationView as TranslationResponse;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::Language;

/// Query parameters for `GET /translations`.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationParams {
    pub language: Option<String>,
    pub key: String,
}

/// Response for `GET /translations/:language`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationsResponse {
    pub language: Language,
    pub translations: Value,
}
