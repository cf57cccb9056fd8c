//! Text generator trait definition

use crate::{GenerationRequest, GenerationResponse, Result};
use async_trait::async_trait;

/// Trait for text-generation backends
///
/// Implementations of this trait turn a rendered prompt into generated
/// text, whether the model runs behind a hosted API or a local
/// OpenAI-compatible inference server.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the given request
    ///
    /// # Arguments
    ///
    /// * `request` - The generation request with prompt and parameters
    ///
    /// # Returns
    ///
    /// The generated text with finish reason and token usage
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse>;

    /// Get the backend name (e.g., "openai")
    fn name(&self) -> &str;
}
