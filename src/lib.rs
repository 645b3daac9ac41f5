//! DhanRakshak: financial calculators, tutorials, quizzes and progress
//! tracking, served as a JSON API or used one-shot from the CLI.

pub mod api;
pub mod coach;
pub mod core;
pub mod error;

pub use error::{Error, Result};
