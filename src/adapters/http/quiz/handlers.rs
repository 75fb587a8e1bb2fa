//! HTTP handlers for quiz endpoints.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};

use crate::adapters::content::LocalQuestionRepository;
use crate::application::handlers::{
    CheckAnswerCommand, CheckAnswerHandler, GetQuestionsHandler, GetQuestionsQuery,
};
use crate::domain::quiz::{AnswerChecker, QuestionCatalog};
use crate::ports::QuestionRepository;

use super::super::error::ApiError;
use super::dto::{CheckAnswerRequest, CheckAnswerResponse, QuestionsParams, QuestionsResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for quiz endpoints.
#[derive(Clone)]
pub struct QuizAppState {
    pub question_repository: Arc<dyn QuestionRepository>,
    pub checker: AnswerChecker,
}

impl QuizAppState {
    /// State serving the given catalog.
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self {
            question_repository: Arc::new(LocalQuestionRepository::new(catalog.clone())),
            checker: AnswerChecker::new(catalog),
        }
    }

    pub fn get_questions_handler(&self) -> GetQuestionsHandler {
        GetQuestionsHandler::new(self.question_repository.clone())
    }

    pub fn check_answer_handler(&self) -> CheckAnswerHandler {
        CheckAnswerHandler::new(self.checker.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /questions?language=
pub async fn get_questions(
    State(state): State<QuizAppState>,
    params: Result<Query<QuestionsParams>, QueryRejection>,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let Query(params) = params?;
    let query = GetQuestionsQuery {
        language: params.language,
    };

    let set = state.get_questions_handler().handle(query).await?;

    Ok(Json(QuestionsResponse {
        questions: set.questions().to_vec(),
    }))
}

/// POST /check-answer
pub async fn check_answer(
    State(state): State<QuizAppState>,
    payload: Result<Json<CheckAnswerRequest>, JsonRejection>,
) -> Result<Json<CheckAnswerResponse>, ApiError> {
    let Json(request) = payload?;
    let cmd = CheckAnswerCommand {
        question_index: request.question_index,
        answer: request.answer,
        language: request.language,
    };

    let verdict = state.check_answer_handler().handle(cmd)?;

    Ok(Json(verdict))
}
