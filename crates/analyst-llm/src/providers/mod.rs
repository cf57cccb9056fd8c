//! Concrete text-generator implementations
//!
//! This module contains implementations of the TextGenerator trait for
//! OpenAI-compatible services, hosted or local.

pub mod openai;

pub use openai::{OpenAiConfig, OpenAiGenerator};
