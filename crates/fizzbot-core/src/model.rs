//! Core data model types for fizzbot.
//!
//! These types mirror the JSON records exchanged with the fizzbot service.
//! Wire field names are camelCase; optional fields decode the same whether
//! they are absent or `null`.

use std::fmt;
use std::num::NonZeroI64;

use serde::{Deserialize, Serialize};

/// Result string the service sends for an accepted answer.
pub const RESULT_CORRECT: &str = "correct";
/// Result string the service sends once the last question is answered.
pub const RESULT_COMPLETE: &str = "interview complete";

/// A question, or the outcome of an answer submission.
///
/// The service uses the same record shape for both, so only a subset of the
/// fields is populated in any given response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Display text.
    #[serde(default)]
    pub message: String,
    /// Relative path of the next resource to fetch and submit against.
    #[serde(default)]
    pub next_question: Option<String>,
    /// Numbers to solve, present only on numeric challenges.
    #[serde(default)]
    pub numbers: Option<Vec<i64>>,
    /// Outcome of the latest submission.
    #[serde(default)]
    pub result: Option<String>,
    /// Replacement rules applied to `numbers`.
    #[serde(default)]
    pub rules: Option<Vec<Rule>>,
    /// Sample answer, shown to the candidate only.
    #[serde(default)]
    pub example_response: Option<ExampleResponse>,
}

impl Question {
    /// Interpret the `result` field.
    pub fn status(&self) -> ResultStatus {
        ResultStatus::parse(self.result.as_deref().unwrap_or_default())
    }

    /// The example answer, or an empty string when the record has none.
    pub fn example_answer(&self) -> &str {
        self.example_response
            .as_ref()
            .map(|e| e.answer.as_str())
            .unwrap_or_default()
    }
}

/// A divisor and the text that replaces numbers it divides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Divisor. Zero is rejected when the record is decoded.
    #[serde(rename = "number")]
    pub divisor: NonZeroI64,
    /// Replacement text.
    pub response: String,
}

impl Rule {
    /// Build a rule, returning `None` for a zero divisor.
    pub fn new(divisor: i64, response: impl Into<String>) -> Option<Self> {
        Some(Self {
            divisor: NonZeroI64::new(divisor)?,
            response: response.into(),
        })
    }

    /// Whether this rule applies to `number`.
    pub fn applies_to(&self, number: i64) -> bool {
        // wrapping_rem keeps i64::MIN % -1 from overflowing; the remainder is 0.
        number.wrapping_rem(self.divisor.get()) == 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleResponse {
    #[serde(default)]
    pub answer: String,
}

/// The body of an answer submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub answer: String,
}

impl Answer {
    /// Wrap a candidate answer, trimming surrounding spaces and line terminators.
    pub fn new(raw: &str) -> Self {
        Self {
            answer: trim_wire(raw).to_string(),
        }
    }
}

/// Interpreted outcome of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultStatus {
    /// The answer was accepted; move on to the next question.
    Correct,
    /// The interview is over.
    Complete,
    /// Anything else, carrying the trimmed raw value.
    Incorrect(String),
}

impl ResultStatus {
    /// Classify a raw result string by exact match after trimming.
    pub fn parse(raw: &str) -> Self {
        match trim_wire(raw) {
            RESULT_CORRECT => ResultStatus::Correct,
            RESULT_COMPLETE => ResultStatus::Complete,
            other => ResultStatus::Incorrect(other.to_string()),
        }
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultStatus::Correct => write!(f, "{RESULT_CORRECT}"),
            ResultStatus::Complete => write!(f, "{RESULT_COMPLETE}"),
            ResultStatus::Incorrect(raw) => write!(f, "incorrect ({raw:?})"),
        }
    }
}

/// Trim spaces, carriage returns and newlines. Tabs and other whitespace are kept.
pub fn trim_wire(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\r' | '\n'))
}
