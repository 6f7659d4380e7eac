//! Gemini service integration for text and image generation
//!
//! Provides the service traits the use-case layer depends on, their Gemini
//! REST implementations, and builder-style mocks for tests.

pub mod gemini;
pub mod mime;
pub mod mock;

pub use gemini::{GeminiImageClient, GeminiTextClient};
pub use mock::{MockImageClient, MockTextClient};

use crate::models::{AspectRatio, ResponseMode};
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Generate text for a prompt under the given response mode.
    async fn generate(&self, prompt: &str, mode: &ResponseMode) -> Result<String>;
}

#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    /// Generate one image, returning the base64 payload of the first inline
    /// image part in the response, or `None` when the response carries no
    /// image.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Option<String>>;
}
