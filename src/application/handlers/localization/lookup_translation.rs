//! Translation query handlers.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::domain::foundation::Language;
use crate::domain::localization::TranslationCatalog;

/// Query for a single dotted translation key.
#[derive(Debug, Clone)]
pub struct LookupTranslationQuery {
    pub language: Option<String>,
    pub key: String,
}

/// A resolved translation. `value` is the key itself when no string is found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslationView {
    pub language: Language,
    pub key: String,
    pub value: String,
}

/// Handler for translation lookups.
pub struct LookupTranslationHandler {
    catalog: Arc<TranslationCatalog>,
}

impl LookupTranslationHandler {
    pub fn new(catalog: Arc<TranslationCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: LookupTranslationQuery) -> TranslationView {
        let language = Language::resolve(query.language.as_deref());
        let value = self.catalog.lookup(language, &query.key);
        TranslationView {
            language,
            key: query.key,
            value,
        }
    }

    /// Full mapping for a language code, falling back to the default mapping.
    pub fn mapping(&self, language: Option<&str>) -> (Language, Value) {
        let language = Language::resolve(language);
        (language, self.catalog.mapping(language).clone())
    }
}
