//! Concurrent image-generation batches
//!
//! Fans N prompts out to the image service in parallel and joins on all of
//! them, collecting per-position outcomes. One slot failing does not poison
//! the rest of the batch.

use crate::ai::ImageGenerationService;
use crate::models::{AspectRatio, ImageOutcome};
use std::sync::Arc;

/// Generate one image, honoring the gating flag.
///
/// An empty prompt or a false flag resolves to `Skipped` without touching
/// the network.
pub async fn generate_single_image(
    service: &dyn ImageGenerationService,
    prompt: &str,
    aspect_ratio: AspectRatio,
    should_generate: bool,
) -> ImageOutcome {
    if !should_generate || prompt.is_empty() {
        return ImageOutcome::Skipped;
    }

    match service.generate_image(prompt, aspect_ratio).await {
        Ok(Some(data)) => ImageOutcome::Generated(data),
        Ok(None) => {
            tracing::warn!("Image generation returned no inline data");
            ImageOutcome::Failed("no inline image data in response".to_string())
        }
        Err(e) => {
            tracing::warn!("Image generation failed: {}", e);
            ImageOutcome::Failed(e.to_string())
        }
    }
}

/// Generate a batch of images concurrently.
///
/// The result is positionally aligned with `prompts`. When the gating flag
/// is false every position resolves to `Skipped` and no request is issued;
/// otherwise empty prompts are skipped and all remaining prompts are
/// submitted together and awaited as one joined unit.
pub async fn generate_image_batch(
    service: Arc<dyn ImageGenerationService>,
    prompts: &[String],
    aspect_ratio: AspectRatio,
    should_generate: bool,
) -> Vec<ImageOutcome> {
    if !should_generate {
        return vec![ImageOutcome::Skipped; prompts.len()];
    }

    let handles: Vec<_> = prompts
        .iter()
        .map(|prompt| {
            if prompt.is_empty() {
                return None;
            }
            let service = Arc::clone(&service);
            let prompt = prompt.clone();
            Some(tokio::spawn(async move {
                service.generate_image(&prompt, aspect_ratio).await
            }))
        })
        .collect();

    let mut outcomes = Vec::with_capacity(handles.len());
    for (index, handle) in handles.into_iter().enumerate() {
        let outcome = match handle {
            None => ImageOutcome::Skipped,
            Some(handle) => match handle.await {
                Ok(Ok(Some(data))) => ImageOutcome::Generated(data),
                Ok(Ok(None)) => {
                    tracing::warn!("Image {} returned no inline data", index);
                    ImageOutcome::Failed("no inline image data in response".to_string())
                }
                Ok(Err(e)) => {
                    tracing::warn!("Image {} generation failed: {}", index, e);
                    ImageOutcome::Failed(e.to_string())
                }
                Err(join_err) => {
                    tracing::error!("Image {} task aborted: {}", index, join_err);
                    ImageOutcome::Failed(join_err.to_string())
                }
            },
        };
        outcomes.push(outcome);
    }

    outcomes
}
