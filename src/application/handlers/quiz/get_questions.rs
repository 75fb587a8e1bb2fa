//! GetQuestionsHandler - Query handler for a language's question set.

use std::sync::Arc;

use crate::domain::foundation::Language;
use crate::domain::quiz::QuestionSet;
use crate::ports::{ContentError, QuestionRepository};

/// Query for the question set of a language code.
#[derive(Debug, Clone, Default)]
pub struct GetQuestionsQuery {
    /// Raw language code; unknown or missing codes fall back to the default.
    pub language: Option<String>,
}

/// Handler for retrieving question sets.
pub struct GetQuestionsHandler {
    repository: Arc<dyn QuestionRepository>,
}

impl GetQuestionsHandler {
    pub fn new(repository: Arc<dyn QuestionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetQuestionsQuery) -> Result<Arc<QuestionSet>, ContentError> {
        let language = Language::resolve(query.language.as_deref());
        self.repository.questions(language).await
    }
}
