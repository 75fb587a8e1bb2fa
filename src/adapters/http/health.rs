//! Liveness endpoint.

use axum::extract::{Json, State};
use axum::routing::get;
use axum::Router;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::Language;

/// Response for `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Languages with their own question set.
    pub languages: Vec<Language>,
}

#[derive(Clone)]
struct HealthState {
    languages: Vec<Language>,
}

async fn health(State(state): State<HealthState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        languages: state.languages,
    })
}

/// GET /health
pub fn health_routes(languages: Vec<Language>) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(HealthState { languages })
}
