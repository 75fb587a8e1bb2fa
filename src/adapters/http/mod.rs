//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] merges them and applies the shared middleware stack.

pub mod error;
pub mod health;
pub mod localization;
pub mod quiz;

use std::sync::Arc;

use axum::Router;
use http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::domain::localization::TranslationCatalog;
use crate::domain::quiz::QuestionCatalog;

pub use error::{ApiError, ErrorResponse, INTERNAL_ERROR_MESSAGE};
pub use health::{health_routes, HealthResponse};
pub use localization::{localization_routes, LocalizationAppState};
pub use quiz::{quiz_routes, QuizAppState};

/// Builds the full API router over the loaded catalogs.
pub fn api_router(
    questions: Arc<QuestionCatalog>,
    translations: Arc<TranslationCatalog>,
    server: &ServerConfig,
) -> Router {
    let languages = questions.languages();

    Router::new()
        .merge(quiz_routes(QuizAppState::new(questions)))
        .merge(localization_routes(LocalizationAppState::new(translations)))
        .merge(health_routes(languages))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Allow the configured origins, or any origin when none are configured.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}
