//! Interview session state machine.
//!
//! A session fetches the root resource, then cycles through
//! fetch → answer → submit → evaluate until the service reports that the
//! interview is complete. Rejected answers are retried against the same
//! question without fetching it again.

use std::io::Write;
use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{Context, Result};

use crate::display::{
    render_banner, render_complete, render_correct, render_hint, render_question,
};
use crate::error::FizzbotError;
use crate::model::{Answer, Question, ResultStatus};
use crate::traits::{AnswerSource, QuizApi};

/// Path of the root resource on the public service.
pub const DEFAULT_START_PATH: &str = "/fizzbot";

/// Configuration for a single session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Path of the root resource.
    pub start_path: String,
    /// Submissions allowed per question. `None` retries forever.
    pub max_attempts: Option<NonZeroU32>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_path: DEFAULT_START_PATH.to_string(),
            max_attempts: None,
        }
    }
}

/// Observable state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The next question has to be fetched.
    AwaitingQuestion,
    /// The current question needs an answer.
    AwaitingAnswer,
    /// A submission outcome is waiting to be interpreted.
    Evaluating,
    /// The service reported the interview as complete.
    Complete,
}

/// What a finished session did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Questions whose answer was accepted, including the last one.
    pub questions_answered: u32,
    /// Answers submitted, accepted or not.
    pub submissions: u32,
    /// Message sent with the completion signal.
    pub final_message: String,
}

enum Phase {
    AwaitingQuestion,
    AwaitingAnswer,
    Evaluating(Question),
    Complete,
}

/// A single interview session writing its transcript to `W`.
pub struct Session<W> {
    api: Arc<dyn QuizApi>,
    answers: Box<dyn AnswerSource>,
    out: W,
    max_attempts: Option<NonZeroU32>,
    next: String,
    current: Question,
    attempts: u32,
    phase: Phase,
    summary: SessionSummary,
}

impl<W: Write + Send> Session<W> {
    /// Fetch the root resource, print the banner, and point the session at
    /// the first question.
    pub async fn begin(
        api: Arc<dyn QuizApi>,
        answers: Box<dyn AnswerSource>,
        out: W,
        config: &SessionConfig,
    ) -> Result<Self> {
        tracing::info!(
            start = %config.start_path,
            answers = answers.name(),
            "starting fizzbot session"
        );

        let root = api.fetch(&config.start_path).await?;
        let next = root
            .next_question
            .clone()
            .ok_or(FizzbotError::MissingNextQuestion)?;

        let mut session = Self {
            api,
            answers,
            out,
            max_attempts: config.max_attempts,
            next,
            current: Question::default(),
            attempts: 0,
            phase: Phase::AwaitingQuestion,
            summary: SessionSummary::default(),
        };
        session.emit(&render_banner(&root))?;
        Ok(session)
    }

    pub fn state(&self) -> SessionState {
        match self.phase {
            Phase::AwaitingQuestion => SessionState::AwaitingQuestion,
            Phase::AwaitingAnswer => SessionState::AwaitingAnswer,
            Phase::Evaluating(_) => SessionState::Evaluating,
            Phase::Complete => SessionState::Complete,
        }
    }

    /// Path used for the next fetch or submission.
    pub fn next_path(&self) -> &str {
        &self.next
    }

    /// The question currently being answered.
    pub fn current_question(&self) -> &Question {
        &self.current
    }

    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Consume the session and return its transcript writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Perform one transition and return the resulting state.
    ///
    /// Stepping a complete session is a no-op. A failed step leaves the state
    /// unchanged.
    pub async fn step(&mut self) -> Result<SessionState> {
        match &self.phase {
            Phase::AwaitingQuestion => self.fetch_question().await?,
            Phase::AwaitingAnswer => self.submit_answer().await?,
            Phase::Evaluating(outcome) => {
                let outcome = outcome.clone();
                self.evaluate(outcome)?
            }
            Phase::Complete => {}
        }
        Ok(self.state())
    }

    /// Step until the service reports completion.
    pub async fn run(&mut self) -> Result<SessionSummary> {
        while self.state() != SessionState::Complete {
            self.step().await?;
        }
        Ok(self.summary.clone())
    }

    async fn fetch_question(&mut self) -> Result<()> {
        let question = self.api.fetch(&self.next).await?;
        self.emit(&render_question(&question))?;

        self.current = question;
        self.attempts = 0;
        self.phase = Phase::AwaitingAnswer;
        Ok(())
    }

    async fn submit_answer(&mut self) -> Result<()> {
        if let Some(max) = self.max_attempts {
            if self.attempts >= max.get() {
                return Err(FizzbotError::AttemptsExhausted {
                    path: self.next.clone(),
                    attempts: self.attempts,
                }
                .into());
            }
        }

        let raw = self.answers.answer(&self.current).await?;
        if self.answers.echoes_answer() {
            self.emit(&format!("{raw}\n"))?;
        }

        let answer = Answer::new(&raw);
        tracing::debug!(path = %self.next, answer = %answer.answer, "submitting answer");
        let outcome = self.api.submit(&self.next, &answer).await?;

        self.attempts += 1;
        self.summary.submissions += 1;
        self.phase = Phase::Evaluating(outcome);
        Ok(())
    }

    fn evaluate(&mut self, outcome: Question) -> Result<()> {
        match outcome.status() {
            ResultStatus::Correct => {
                let next = outcome
                    .next_question
                    .clone()
                    .ok_or(FizzbotError::MissingNextQuestion)?;
                self.emit(&render_correct(&outcome))?;
                self.summary.questions_answered += 1;
                self.next = next;
                self.phase = Phase::AwaitingQuestion;
            }
            ResultStatus::Complete => {
                self.emit(&render_complete(&outcome))?;
                self.summary.questions_answered += 1;
                self.summary.final_message = outcome.message;
                self.phase = Phase::Complete;
                tracing::info!(
                    questions = self.summary.questions_answered,
                    submissions = self.summary.submissions,
                    "interview complete"
                );
            }
            ResultStatus::Incorrect(result) => {
                tracing::info!(path = %self.next, %result, attempt = self.attempts, "answer rejected");
                self.emit(&render_hint(&outcome))?;
                self.phase = Phase::AwaitingAnswer;
            }
        }
        Ok(())
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .context("failed to write transcript")
    }
}

/// Run a whole session against `api`, writing the transcript to `out`.
pub async fn play<W: Write + Send>(
    api: Arc<dyn QuizApi>,
    answers: Box<dyn AnswerSource>,
    out: W,
    config: &SessionConfig,
) -> Result<SessionSummary> {
    let mut session = Session::begin(api, answers, out, config).await?;
    session.run().await
}
