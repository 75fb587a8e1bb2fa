//! HTTP handlers for translation endpoints.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Json, Path, Query, State};

use crate::application::handlers::{LookupTranslationHandler, LookupTranslationQuery};
use crate::domain::localization::TranslationCatalog;

use super::super::error::ApiError;
use super::dto::{TranslationParams, TranslationResponse, TranslationsResponse};

/// Shared state for translation endpoints.
#[derive(Clone)]
pub struct LocalizationAppState {
    pub catalog: Arc<TranslationCatalog>,
}

impl LocalizationAppState {
    pub fn new(catalog: Arc<TranslationCatalog>) -> Self {
        Self { catalog }
    }

    pub fn lookup_handler(&self) -> LookupTranslationHandler {
        LookupTranslationHandler::new(self.catalog.clone())
    }
}

/// GET /translations?language=&key=
pub async fn lookup_translation(
    State(state): State<LocalizationAppState>,
    params: Result<Query<TranslationParams>, QueryRejection>,
) -> Result<Json<TranslationResponse>, ApiError> {
    let Query(params) = params?;
    let query = LookupTranslationQuery {
        language: params.language,
        key: params.key,
    };
    Ok(Json(state.lookup_handler().handle(query)))
}

/// GET /translations/:language
pub async fn get_translations(
    State(state): State<LocalizationAppState>,
    Path(language): Path<String>,
) -> Json<TranslationsResponse> {
    let (language, translations) = state.lookup_handler().mapping(Some(language.as_str()));
    Json(TranslationsResponse {
        language,
        translations,
    })
}
