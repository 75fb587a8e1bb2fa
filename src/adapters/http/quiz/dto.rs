//! HTTP DTOs for quiz endpoints.
//!
//! The verdict is already shaped for the wire, so it is re-exported directly.

pub use crate::domain::quiz::AnswerVerdict as CheckAnswerResponse;

use serde::{Deserialize, Serialize};

use crate::domain::quiz::Question;

/// Query parameters for `GET /questions`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionsParams {
    pub language: Option<String>,
}

/// Response for `GET /questions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

/// Request body for `POST /check-answer`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckAnswerRequest {
    pub question_index: i64,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}
