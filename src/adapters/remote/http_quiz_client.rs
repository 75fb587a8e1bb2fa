//! HTTP client for a remote quiz server.
//!
//! Implements both content and checking ports against `GET /questions` and
//! `POST /check-answer`, so a session can be driven from another process.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::adapters::http::quiz::{CheckAnswerRequest, CheckAnswerResponse, QuestionsResponse};
use crate::adapters::http::ErrorResponse;
use crate::config::ClientConfig;
use crate::domain::foundation::Language;
use crate::domain::quiz::{AnswerVerdict, QuestionSet};
use crate::ports::{AnswerService, CheckError, ContentError, QuestionRepository};

/// Quiz server client.
#[derive(Debug, Clone)]
pub struct HttpQuizClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpQuizClient {
    /// Create a client for the server at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, reqwest::Error> {
        Self::new(&config.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Pulls the `error` field out of a failed response, falling back to the raw body.
async fn error_message(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<ErrorResponse>(&text)
        .map(|body| body.error)
        .unwrap_or(text)
}

#[async_trait]
impl QuestionRepository for HttpQuizClient {
    async fn questions(&self, language: Language) -> Result<Arc<QuestionSet>, ContentError> {
        let url = self.url("/questions");
        tracing::debug!(url = %url, language = %language, "Fetching questions");

        let response = self
            .http_client
            .get(&url)
            .query(&[("language", language.code())])
            .send()
            .await
            .map_err(|e| ContentError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = error_message(response).await;
            tracing::error!(status = %status, error = %message, "Question request failed");
            return Err(ContentError::Transport(format!(
                "server returned {}: {}",
                status, message
            )));
        }

        let body: QuestionsResponse = response
            .json()
            .await
            .map_err(|e| ContentError::parse(url, e))?;

        Ok(Arc::new(QuestionSet::new(body.questions)))
    }
}

#[async_trait]
impl AnswerService for HttpQuizClient {
    async fn check_answer(
        &self,
        language: Language,
        question_index: i64,
        answer: &str,
    ) -> Result<AnswerVerdict, CheckError> {
        let request = CheckAnswerRequest {
            question_index,
            answer: answer.to_string(),
            language: Some(language.code().to_string()),
        };

        let response = self
            .http_client
            .post(self.url("/check-answer"))
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::BAD_REQUEST {
            let message = error_message(response).await;
            if message == CheckError::InvalidQuestionIndex.to_string() {
                return Err(CheckError::InvalidQuestionIndex);
            }
            return Err(CheckError::Rejected {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            let message = error_message(response).await;
            tracing::error!(status = %status, error = %message, "Answer check failed");
            return Err(CheckError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let verdict: CheckAnswerResponse = response
            .json()
            .await
            .map_err(|e| CheckError::Transport(format!("Failed to parse verdict: {}", e)))?;

        Ok(verdict)
    }
}
