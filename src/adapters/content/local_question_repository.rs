//! In-process QuestionRepository over a loaded catalog.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::foundation::Language;
use crate::domain::quiz::{QuestionCatalog, QuestionSet};
use crate::ports::{ContentError, QuestionRepository};

/// Serves question sets from a catalog loaded at startup.
#[derive(Debug, Clone)]
pub struct LocalQuestionRepository {
    catalog: Arc<QuestionCatalog>,
}

impl LocalQuestionRepository {
    pub fn new(catalog: Arc<QuestionCatalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl QuestionRepository for LocalQuestionRepository {
    async fn questions(&self, language: Language) -> Result<Arc<QuestionSet>, ContentError> {
        Ok(self.catalog.questions(language))
    }
}
