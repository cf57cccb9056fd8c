//! Text-generation boundary for analyst-rs
//!
//! This crate abstracts the generative-model call behind a small trait so
//! the analysis pipeline can treat generation as `prompt -> text`. It
//! includes:
//!
//! - Generation request/response types
//! - The TextGenerator trait
//! - An OpenAI-compatible provider (hosted API or local inference server)
//! - A process-wide lazily-initialized shared generator handle

pub mod error;
pub mod generation;
pub mod generator;
pub mod providers;
pub mod shared;

// Re-export main types
pub use error::{GeneratorError, Result};
pub use generation::{FinishReason, GenerationRequest, GenerationResponse, TokenUsage};
pub use generator::TextGenerator;
pub use providers::{OpenAiConfig, OpenAiGenerator};
pub use shared::SharedGenerator;
