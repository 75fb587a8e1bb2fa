//! HTTP routes for quiz endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{check_answer, get_questions, QuizAppState};

/// Creates the quiz router with all routes.
pub fn quiz_routes(state: QuizAppState) -> Router {
    Router::new()
        // GET /questions?language=
        .route("/questions", get(get_questions))
        // POST /check-answer
        .route("/check-answer", post(check_answer))
        .with_state(state)
}
