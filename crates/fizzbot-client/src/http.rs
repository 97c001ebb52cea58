//! HTTP implementation of the quiz API.

use async_trait::async_trait;
use tracing::instrument;

use fizzbot_core::model::{Answer, Question};
use fizzbot_core::traits::QuizApi;
use fizzbot_core::FizzbotError;

/// Origin of the public fizzbot service.
pub const DEFAULT_DOMAIN: &str = "https://api.noopschallenge.com";

/// Quiz API client speaking JSON over HTTP.
pub struct HttpQuizApi {
    domain: String,
    client: reqwest::Client,
}

impl HttpQuizApi {
    pub fn new(domain: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fizzbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FizzbotError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            domain: domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
            client,
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Full URL for a service path. Paths are appended to the domain as-is.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.domain.trim_end_matches('/'), path)
        } else {
            format!("{}{}", self.domain, path)
        }
    }

    async fn decode(response: reqwest::Response) -> anyhow::Result<Question> {
        // Rejected answers come back with a 4xx status and a regular body,
        // so the status is informational only.
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FizzbotError::Transport(format!("failed to read response: {e}")))?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        let question = serde_json::from_str::<Question>(&body)
            .map_err(|e| FizzbotError::Decode(format!("HTTP {}: {e}", status.as_u16())))?;
        Ok(question)
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    #[instrument(skip(self))]
    async fn fetch(&self, path: &str) -> anyhow::Result<Question> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| FizzbotError::Transport(e.to_string()))?;

        Self::decode(response).await
    }

    #[instrument(skip(self, answer))]
    async fn submit(&self, path: &str, answer: &Answer) -> anyhow::Result<Question> {
        let response = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .json(answer)
            .send()
            .await
            .map_err(|e| FizzbotError::Transport(e.to_string()))?;

        Self::decode(response).await
    }
}
