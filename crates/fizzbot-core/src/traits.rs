//! Core trait definitions for the quiz service and answer sources.
//!
//! `QuizApi` is implemented by the `fizzbot-client` crate; answer sources
//! live in [`crate::answer`].

use async_trait::async_trait;

use crate::model::{Answer, Question};

// ---------------------------------------------------------------------------
// Quiz API trait
// ---------------------------------------------------------------------------

/// The remote quiz service.
///
/// Paths are the opaque relative paths handed out by the service, e.g.
/// `/fizzbot/questions/1`.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Fetch the record at `path`.
    async fn fetch(&self, path: &str) -> anyhow::Result<Question>;

    /// Submit an answer to the question at `path` and return the outcome.
    async fn submit(&self, path: &str, answer: &Answer) -> anyhow::Result<Question>;
}

// ---------------------------------------------------------------------------
// Answer source trait
// ---------------------------------------------------------------------------

/// Produces a candidate answer for a question.
#[async_trait]
pub trait AnswerSource: Send {
    /// Short name used in logs (e.g. "auto").
    fn name(&self) -> &str;

    /// Produce an untrimmed answer for `question`.
    async fn answer(&mut self, question: &Question) -> anyhow::Result<String>;

    /// Whether the session should write the answer into the transcript.
    ///
    /// Typed answers are already on the operator's terminal.
    fn echoes_answer(&self) -> bool {
        false
    }
}
