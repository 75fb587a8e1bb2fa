//! Question and QuestionSet value objects.
//!
//! Both are immutable once loaded. The JSON shape matches the content files
//! and the `/questions` response: `{ "question", "options", "answer" }`.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// A single multiple-choice question.
///
/// # Invariants
///
/// - `answer` is one of `options` (checked by [`Question::validate`], not enforced)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Question text shown to the user.
    pub question: String,

    /// Answer options in display order.
    pub options: Vec<String>,

    /// The correct option, verbatim.
    pub answer: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        options: impl IntoIterator<Item = impl Into<String>>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            options: options.into_iter().map(Into::into).collect(),
            answer: answer.into(),
        }
    }

    /// Exact, case- and whitespace-sensitive comparison against the stored answer.
    pub fn is_correct(&self, submitted: &str) -> bool {
        self.answer == submitted
    }

    /// Checks the data-quality rules for a question record.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the text, options or answer are empty
    /// - `InvalidFormat` if the answer is not among the options
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::empty_field("question"));
        }
        if self.options.is_empty() {
            return Err(ValidationError::empty_field("options"));
        }
        if self.answer.is_empty() {
            return Err(ValidationError::empty_field("answer"));
        }
        if !self.options.iter().any(|o| o == &self.answer) {
            return Err(ValidationError::invalid_format(
                "answer",
                format!("'{}' is not one of the options", self.answer),
            ));
        }
        Ok(())
    }
}

/// Ordered questions for one language.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Looks up a question by a caller-supplied index that may be negative.
    pub fn at(&self, index: i64) -> Option<&Question> {
        usize::try_from(index).ok().and_then(|i| self.questions.get(i))
    }

    /// Index of the final question, if any.
    pub fn last_index(&self) -> Option<usize> {
        self.questions.len().checked_sub(1)
    }

    /// Validates every question, returning the failures keyed by index.
    pub fn validate(&self) -> Vec<(usize, ValidationError)> {
        self.questions
            .iter()
            .enumerate()
            .filter_map(|(i, q)| q.validate().err().map(|e| (i, e)))
            .collect()
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}
