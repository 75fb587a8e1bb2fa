//! In-process AnswerService backed by the answer checker.

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::domain::quiz::{AnswerChecker, AnswerVerdict, QuizError};
use crate::ports::{AnswerService, CheckError};

/// Checks answers without a network round trip.
#[derive(Debug, Clone)]
pub struct LocalAnswerService {
    checker: AnswerChecker,
}

impl LocalAnswerService {
    pub fn new(checker: AnswerChecker) -> Self {
        Self { checker }
    }
}

#[async_trait]
impl AnswerService for LocalAnswerService {
    async fn check_answer(
        &self,
        language: Language,
        question_index: i64,
        answer: &str,
    ) -> Result<AnswerVerdict, CheckError> {
        self.checker
            .verdict(language, question_index, answer)
            .map_err(|e| match e {
                QuizError::InvalidQuestionIndex { .. } => CheckError::InvalidQuestionIndex,
                other => CheckError::Transport(other.to_string()),
            })
    }
}
