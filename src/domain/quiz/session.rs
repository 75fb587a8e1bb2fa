//! Quiz session aggregate.
//!
//! A session is one user's run through a question set. It is an explicit value
//! threaded through transition methods; nothing here is global.
//!
//! # Submission
//!
//! Answers are accepted at most once per question. The local path
//! ([`QuizSession::submit`]) checks synchronously. The remote path splits the
//! submission in two so the check can happen outside any lock:
//!
//! 1. [`begin_submission`](QuizSession::begin_submission) records a
//!    [`PendingSubmission`] ticket for the current question.
//! 2. [`apply_verdict`](QuizSession::apply_verdict) applies the result, or
//!    [`abandon_submission`](QuizSession::abandon_submission) clears the ticket
//!    after a failed check.
//!
//! Every reset bumps the session generation, so a verdict for a ticket issued
//! before a restart or language change is discarded as stale.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::foundation::{Language, StateMachine};

use super::{AnswerChecker, Question, QuestionSet, QuizError, QuizPhase, QuizResult};

/// Question content available to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizContent {
    Ready(Arc<QuestionSet>),
    /// Loading failed; the session is non-interactive until reloaded.
    Unavailable(String),
}

impl QuizContent {
    /// Wraps a loaded set. An empty set cannot be played and counts as unavailable.
    pub fn from_set(set: Arc<QuestionSet>) -> Self {
        if set.is_empty() {
            QuizContent::Unavailable("question set is empty".to_string())
        } else {
            QuizContent::Ready(set)
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        QuizContent::Unavailable(reason.into())
    }
}

/// Ticket for an answer whose check is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    generation: u64,
    question_index: usize,
    language: Language,
    answer: String,
}

impl PendingSubmission {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The answer was recorded.
    Accepted { is_correct: bool, completed: bool },
    /// The quiz is already complete; nothing changed.
    Ignored,
    /// The verdict belongs to an earlier generation or question; nothing changed.
    Stale,
}

/// Quiz session aggregate.
///
/// # Invariants
///
/// - `score <= current_index + (complete ? 1 : 0) <= submitted_answers.len()`
/// - `current_index < questions.len()` while not complete
/// - a complete session accepts no answers until restarted
/// - at most one pending submission, always for `current_index`
#[derive(Debug, Clone)]
pub struct QuizSession {
    language: Language,
    content: QuizContent,
    phase: QuizPhase,
    current_index: usize,
    score: usize,
    submitted_answers: Vec<String>,
    generation: u64,
    pending: Option<PendingSubmission>,
}

impl QuizSession {
    /// Create a not-started session over a loaded question set.
    pub fn new(language: Language, questions: Arc<QuestionSet>) -> Self {
        Self::with_content(language, QuizContent::from_set(questions))
    }

    /// Create a session whose content failed to load.
    pub fn unavailable(language: Language, reason: impl Into<String>) -> Self {
        Self::with_content(language, QuizContent::unavailable(reason))
    }

    pub fn with_content(language: Language, content: QuizContent) -> Self {
        Self {
            language,
            content,
            phase: QuizPhase::NotStarted,
            current_index: 0,
            score: 0,
            submitted_answers: Vec::new(),
            generation: 0,
            pending: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn submitted_answers(&self) -> &[String] {
        &self.submitted_answers
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<&PendingSubmission> {
        self.pending.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.phase.is_started()
    }

    pub fn is_complete(&self) -> bool {
        self.phase == QuizPhase::Complete
    }

    pub fn is_available(&self) -> bool {
        matches!(self.content, QuizContent::Ready(_))
    }

    /// Loaded question set, if any.
    pub fn questions(&self) -> Option<&Arc<QuestionSet>> {
        match &self.content {
            QuizContent::Ready(set) => Some(set),
            QuizContent::Unavailable(_) => None,
        }
    }

    /// Why content is unavailable, if it is.
    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.content {
            QuizContent::Ready(_) => None,
            QuizContent::Unavailable(reason) => Some(reason),
        }
    }

    pub fn total_questions(&self) -> usize {
        self.questions().map_or(0, |q| q.len())
    }

    /// The question awaiting an answer. `None` unless in progress.
    pub fn current_question(&self) -> Option<&Question> {
        if !self.phase.accepts_answers() {
            return None;
        }
        self.questions().and_then(|q| q.get(self.current_index))
    }

    /// Score summary, available only once complete.
    pub fn result(&self) -> Option<QuizResult> {
        self.is_complete()
            .then(|| QuizResult::new(self.score, self.total_questions()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Start (or start over) the quiz from the first question.
    ///
    /// # Errors
    ///
    /// - `ContentUnavailable` if no question set is loaded
    pub fn start(&mut self) -> Result<(), QuizError> {
        self.ensure_available()?;

        self.reset();
        self.phase = self.phase.transition_to(QuizPhase::InProgress)?;
        tracing::debug!(
            language = %self.language,
            generation = self.generation,
            "Quiz started"
        );
        Ok(())
    }

    /// Return to the not-started phase with all counters cleared.
    pub fn restart(&mut self) {
        self.reset();
        tracing::debug!(generation = self.generation, "Quiz restarted");
    }

    /// Switch language. Always discards in-progress state, since question sets
    /// are not aligned across languages.
    pub fn change_language(&mut self, language: Language, content: QuizContent) {
        self.language = language;
        self.content = content;
        self.reset();
        tracing::debug!(language = %language, generation = self.generation, "Quiz language changed");
    }

    /// Replace the content after a retried load. Resets the session.
    pub fn reload(&mut self, content: QuizContent) {
        self.content = content;
        self.reset();
    }

    /// Submit an answer and check it locally.
    ///
    /// Returns `Ignored` without touching state when the quiz is complete.
    ///
    /// # Errors
    ///
    /// - `ContentUnavailable` if no question set is loaded
    /// - `NotStarted` if the quiz has not been started
    /// - `SubmissionInFlight` if a remote check for this question is pending
    pub fn submit(
        &mut self,
        answer: impl Into<String>,
        checker: &AnswerChecker,
    ) -> Result<SubmitOutcome, QuizError> {
        let Some(ticket) = self.begin_submission(answer)? else {
            return Ok(SubmitOutcome::Ignored);
        };
        let is_correct = checker.check_at(ticket.language, ticket.question_index, &ticket.answer);
        self.apply_verdict(&ticket, is_correct)
    }

    /// Reserve the current question for an answer whose check happens elsewhere.
    ///
    /// Returns `Ok(None)` when the quiz is complete (a no-op).
    ///
    /// # Errors
    ///
    /// - `ContentUnavailable` if no question set is loaded
    /// - `NotStarted` if the quiz has not been started
    /// - `SubmissionInFlight` if the current question already has a pending answer
    pub fn begin_submission(
        &mut self,
        answer: impl Into<String>,
    ) -> Result<Option<PendingSubmission>, QuizError> {
        self.ensure_available()?;

        match self.phase {
            QuizPhase::Complete => {
                tracing::debug!("Ignoring answer for completed quiz");
                return Ok(None);
            }
            QuizPhase::NotStarted => return Err(QuizError::NotStarted),
            QuizPhase::InProgress => {}
        }

        if self.pending.is_some() {
            return Err(QuizError::SubmissionInFlight {
                index: self.current_index,
            });
        }

        let ticket = PendingSubmission {
            generation: self.generation,
            question_index: self.current_index,
            language: self.language,
            answer: answer.into(),
        };
        self.pending = Some(ticket.clone());
        Ok(Some(ticket))
    }

    /// Apply the verdict for a previously issued ticket.
    ///
    /// A ticket from an earlier generation or question is discarded as `Stale`.
    pub fn apply_verdict(
        &mut self,
        ticket: &PendingSubmission,
        is_correct: bool,
    ) -> Result<SubmitOutcome, QuizError> {
        if self.pending.as_ref() != Some(ticket) {
            tracing::debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                question_index = ticket.question_index,
                "Discarding stale verdict"
            );
            return Ok(SubmitOutcome::Stale);
        }

        let is_last = self
            .questions()
            .and_then(|q| q.last_index())
            .is_some_and(|last| self.current_index >= last);
        let next_phase = if is_last {
            self.phase.transition_to(QuizPhase::Complete)?
        } else {
            self.phase
        };

        self.pending = None;
        self.submitted_answers.push(ticket.answer.clone());
        if is_correct {
            self.score += 1;
        }
        if is_last {
            self.phase = next_phase;
            tracing::info!(
                language = %self.language,
                score = self.score,
                total = self.total_questions(),
                "Quiz completed"
            );
        } else {
            self.current_index += 1;
        }

        Ok(SubmitOutcome::Accepted {
            is_correct,
            completed: is_last,
        })
    }

    /// Release the ticket after a failed check so the same answer can be retried.
    /// Score and pointer are unchanged.
    pub fn abandon_submission(&mut self, ticket: &PendingSubmission) {
        if self.pending.as_ref() == Some(ticket) {
            self.pending = None;
        }
    }

    /// Serializable view of the session for rendering.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            language: self.language,
            phase: self.phase,
            current_index: self.current_index,
            score: self.score,
            submitted_answers: self.submitted_answers.clone(),
            started: self.is_started(),
            complete: self.is_complete(),
            total_questions: self.total_questions(),
            current_question: self.current_question().cloned(),
            awaiting_check: self.pending.is_some(),
            result: self.result(),
            error: self.unavailable_reason().map(str::to_string),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_available(&self) -> Result<(), QuizError> {
        match &self.content {
            QuizContent::Ready(_) => Ok(()),
            QuizContent::Unavailable(reason) => Err(QuizError::content_unavailable(reason.clone())),
        }
    }

    fn reset(&mut self) {
        self.phase = QuizPhase::NotStarted;
        self.current_index = 0;
        self.score = 0;
        self.submitted_answers.clear();
        self.pending = None;
        self.generation += 1;
    }
}

/// Read-only view of a [`QuizSession`] handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub language: Language,
    pub phase: QuizPhase,
    pub current_index: usize,
    pub score: usize,
    pub submitted_answers: Vec<String>,
    pub started: bool,
    pub complete: bool,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<Question>,
    pub awaiting_check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<QuizResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
