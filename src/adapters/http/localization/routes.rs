//! HTTP routes for translation endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_translations, lookup_translation, LocalizationAppState};

/// Creates the translation router with all routes.
pub fn localization_routes(state: LocalizationAppState) -> Router {
    Router::new()
        // GET /translations?language=&key=
        .route("/translations", get(lookup_translation))
        // GET /translations/:language
        .route("/translations/:language", get(get_translations))
        .with_state(state)
}
