//! CheckAnswerHandler - Command handler for checking a submitted answer.

use crate::domain::foundation::Language;
use crate::domain::quiz::{AnswerChecker, AnswerVerdict, QuizError};

/// Command to check one answer.
#[derive(Debug, Clone)]
pub struct CheckAnswerCommand {
    pub question_index: i64,
    pub answer: String,
    /// Raw language code; unknown or missing codes fall back to the default.
    pub language: Option<String>,
}

/// Handler for checking answers against the loaded question sets.
pub struct CheckAnswerHandler {
    checker: AnswerChecker,
}

impl CheckAnswerHandler {
    pub fn new(checker: AnswerChecker) -> Self {
        Self { checker }
    }

    /// # Errors
    ///
    /// - `InvalidQuestionIndex` if the index is outside `[0, len)` for the language
    pub fn handle(&self, cmd: CheckAnswerCommand) -> Result<AnswerVerdict, QuizError> {
        let language = Language::resolve(cmd.language.as_deref());
        self.checker.verdict(language, cmd.question_index, &cmd.answer)
    }
}
