//! Session error types.
//!
//! Every variant is fatal for the running session. An answer the service
//! rejects is not an error: it is reported through [`crate::model::ResultStatus`].

use thiserror::Error;

/// Errors that can occur while talking to the fizzbot service.
#[derive(Debug, Error)]
pub enum FizzbotError {
    /// The request could not be sent or the response body could not be read.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body is not a valid question record.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A record that must point at the next question did not.
    #[error("response has no nextQuestion path")]
    MissingNextQuestion,

    /// The configured attempt limit for a single question was reached.
    #[error("gave up on {path} after {attempts} attempt(s)")]
    AttemptsExhausted { path: String, attempts: u32 },

    /// Reading an answer from the operator failed.
    #[error("input error: {0}")]
    Input(String),
}
