//! Quiz HTTP adapter - question retrieval and answer checking.

mod dto;
mod handlers;
mod routes;

pub use dto::{CheckAnswerRequest, CheckAnswerResponse, QuestionsParams, QuestionsResponse};
pub use handlers::{check_answer, get_questions, QuizAppState};
pub use routes::quiz_routes;
