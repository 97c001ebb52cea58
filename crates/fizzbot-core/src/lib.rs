//! fizzbot-core — data model, rule solver, and session loop.
//!
//! This crate defines the quiz records exchanged with the fizzbot service,
//! the fizzbuzz-style rule solver, and the state machine that drives a
//! single interview session.

pub mod answer;
pub mod display;
pub mod error;
pub mod model;
pub mod session;
pub mod solver;
pub mod traits;

pub use error::FizzbotError;
