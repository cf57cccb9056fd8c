//! Process-wide shared generator handle
//!
//! Model backends are expensive to construct (connection pools, local
//! model warm-up), so the handle is built once on first use and reused
//! for the lifetime of the process. After initialization the handle is
//! read-only and can be shared across concurrent requests without
//! locking.

use crate::{Result, TextGenerator};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Lazily initialized, shareable handle to a text generator
///
/// Construct one per process and inject it wherever generation is
/// needed; the backing generator is created by the first caller and
/// every later call reuses it. There is no teardown.
pub struct SharedGenerator {
    cell: OnceCell<Arc<dyn TextGenerator>>,
}

impl SharedGenerator {
    /// Create an empty handle; the generator is built on first use
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Create a handle that is already initialized
    ///
    /// Used by tests and callers that construct the backend eagerly.
    pub fn with_generator(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            cell: OnceCell::new_with(Some(generator)),
        }
    }

    /// Get the generator, initializing it on first call
    ///
    /// Concurrent first calls race on a single initialization; losers
    /// wait and receive the winner's generator.
    pub async fn get_or_init<F, Fut>(&self, init: F) -> Result<&Arc<dyn TextGenerator>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Arc<dyn TextGenerator>>>,
    {
        self.cell.get_or_try_init(init).await
    }

    /// Get the generator if it has been initialized
    pub fn get(&self) -> Option<&Arc<dyn TextGenerator>> {
        self.cell.get()
    }
}

impl Default for SharedGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FinishReason, GenerationRequest, GenerationResponse, TokenUsage};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, request: GenerationRequest) -> Result<GenerationResponse> {
            Ok(GenerationResponse {
                text: request.prompt,
                finish_reason: FinishReason::Stop,
                usage: TokenUsage {
                    input_tokens: 0,
                    output_tokens: 0,
                },
            })
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[tokio::test]
    async fn test_initializes_once() {
        let shared = SharedGenerator::new();
        let init_count = AtomicUsize::new(0);

        for _ in 0..3 {
            let generator = shared
                .get_or_init(|| async {
                    init_count.fetch_add(1, Ordering::SeqCst);
                    Ok(Arc::new(EchoGenerator) as Arc<dyn TextGenerator>)
                })
                .await
                .expect("init should succeed");
            assert_eq!(generator.name(), "echo");
        }

        assert_eq!(init_count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_with_generator_is_initialized() {
        let shared = SharedGenerator::with_generator(Arc::new(EchoGenerator));
        assert!(shared.get().is_some());
    }

    #[tokio::test]
    async fn test_empty_handle_has_no_generator() {
        let shared = SharedGenerator::new();
        assert!(shared.get().is_none());
    }
}
