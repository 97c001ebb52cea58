//! Scripted quiz API for testing.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;

use fizzbot_core::model::{Answer, Question, RESULT_COMPLETE, RESULT_CORRECT};
use fizzbot_core::traits::QuizApi;
use fizzbot_core::FizzbotError;

/// A request received by [`ScriptedApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    Fetch(String),
    Submit { path: String, answer: String },
}

/// An in-memory quiz service for exercising sessions without a network.
///
/// Fetches are served from a path → question map and may repeat.
/// Submissions consume scripted outcomes in order; running out of either is
/// reported as a transport error.
pub struct ScriptedApi {
    questions: HashMap<String, Question>,
    outcomes: Mutex<VecDeque<Question>>,
    calls: Mutex<Vec<ApiCall>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self {
            questions: HashMap::new(),
            outcomes: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Serve `question` for fetches of `path`.
    pub fn with_question(mut self, path: &str, question: Question) -> Self {
        self.questions.insert(path.to_string(), question);
        self
    }

    /// Queue the outcome of the next submission.
    pub fn with_outcome(self, outcome: Question) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Paths fetched so far, in order.
    pub fn fetched_paths(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ApiCall::Fetch(path) => Some(path),
                ApiCall::Submit { .. } => None,
            })
            .collect()
    }

    /// Submissions so far as `(path, answer)` pairs.
    pub fn submissions(&self) -> Vec<(String, String)> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ApiCall::Submit { path, answer } => Some((path, answer)),
                ApiCall::Fetch(_) => None,
            })
            .collect()
    }
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuizApi for ScriptedApi {
    async fn fetch(&self, path: &str) -> anyhow::Result<Question> {
        self.calls
            .lock()
            .unwrap()
            .push(ApiCall::Fetch(path.to_string()));

        self.questions
            .get(path)
            .cloned()
            .ok_or_else(|| FizzbotError::Transport(format!("no scripted question at {path}")).into())
    }

    async fn submit(&self, path: &str, answer: &Answer) -> anyhow::Result<Question> {
        self.calls.lock().unwrap().push(ApiCall::Submit {
            path: path.to_string(),
            answer: answer.answer.clone(),
        });

        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| FizzbotError::Transport(format!("no scripted outcome for {path}")).into())
    }
}

/// A root or plain question pointing at `next`.
pub fn question(message: &str, next: &str) -> Question {
    Question {
        message: message.to_string(),
        next_question: Some(next.to_string()),
        ..Default::default()
    }
}

/// An accepted-answer outcome pointing at `next`.
pub fn correct(message: &str, next: &str) -> Question {
    Question {
        result: Some(RESULT_CORRECT.to_string()),
        ..question(message, next)
    }
}

/// The completion outcome.
pub fn complete(message: &str) -> Question {
    Question {
        message: message.to_string(),
        result: Some(RESULT_COMPLETE.to_string()),
        ..Default::default()
    }
}

/// A rejected-answer outcome.
pub fn incorrect(message: &str) -> Question {
    Question {
        message: message.to_string(),
        result: Some("incorrect".to_string()),
        ..Default::default()
    }
}
