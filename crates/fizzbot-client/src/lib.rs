//! fizzbot-client — access to the fizzbot quiz service.
//!
//! Implements the `QuizApi` trait over HTTP, loads client configuration,
//! and provides a scripted in-memory service for tests.

pub mod config;
pub mod http;
pub mod mock;

pub use config::{create_api, load_config, FizzbotConfig};
pub use http::HttpQuizApi;
