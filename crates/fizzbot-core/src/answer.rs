//! Answer sources.
//!
//! A session is parameterized by where its answers come from: the rule
//! solver, or lines typed by an operator.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::error::FizzbotError;
use crate::model::Question;
use crate::solver::solve;
use crate::traits::AnswerSource;

/// Answer sent for questions that carry no numbers.
pub const ACKNOWLEDGEMENT: &str = "go";

/// Which answer source a session uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerMode {
    /// Solve numeric questions, acknowledge the rest.
    #[default]
    Auto,
    /// Read each answer from standard input.
    Interactive,
}

impl AnswerMode {
    /// Build the answer source for this mode.
    pub fn source(self) -> Box<dyn AnswerSource> {
        match self {
            AnswerMode::Auto => Box::new(SolverAnswers),
            AnswerMode::Interactive => Box::new(LineAnswers::stdin()),
        }
    }
}

impl fmt::Display for AnswerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerMode::Auto => write!(f, "auto"),
            AnswerMode::Interactive => write!(f, "interactive"),
        }
    }
}

impl FromStr for AnswerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(AnswerMode::Auto),
            "interactive" => Ok(AnswerMode::Interactive),
            other => Err(format!("unknown answer mode: {other}")),
        }
    }
}

/// Answers numeric questions with the rule solver.
#[derive(Debug, Default)]
pub struct SolverAnswers;

#[async_trait]
impl AnswerSource for SolverAnswers {
    fn name(&self) -> &str {
        "auto"
    }

    async fn answer(&mut self, question: &Question) -> anyhow::Result<String> {
        Ok(match &question.numbers {
            Some(numbers) => solve(numbers, question.rules.as_deref().unwrap_or_default()),
            None => ACKNOWLEDGEMENT.to_string(),
        })
    }

    fn echoes_answer(&self) -> bool {
        true
    }
}

/// Reads one line per answer from an async reader.
pub struct LineAnswers<R> {
    reader: R,
}

impl<R> LineAnswers<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl LineAnswers<BufReader<Stdin>> {
    /// Read answers from standard input.
    pub fn stdin() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()))
    }
}

#[async_trait]
impl<R> AnswerSource for LineAnswers<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    fn name(&self) -> &str {
        "interactive"
    }

    async fn answer(&mut self, _question: &Question) -> anyhow::Result<String> {
        let mut line = String::new();
        let read = self
            .reader
            .read_line(&mut line)
            .await
            .map_err(|e| FizzbotError::Input(e.to_string()))?;
        if read == 0 {
            return Err(
                FizzbotError::Input("input closed before an answer was entered".into()).into(),
            );
        }
        Ok(line)
    }
}
