//! Backend trait.

use async_trait::async_trait;
use std::sync::Arc;
use tubeseo_core::{ImageGenerationRequest, ImageGenerationResponse, JsonGenerationRequest};
use tubeseo_error::TubeseoResult;

/// A hosted generative model provider offering schema-constrained text
/// generation and image generation.
///
/// Implementations issue exactly one outbound call per method invocation.
/// They do not retry.
#[async_trait]
pub trait GenerativeDriver: Send + Sync {
    /// Generate text constrained to `req.response_schema`.
    ///
    /// Returns the raw text payload. It is expected to be JSON, possibly
    /// wrapped in a markdown code fence; callers decode it.
    async fn generate_json(&self, req: &JsonGenerationRequest) -> TubeseoResult<String>;

    /// Generate images for `req.prompt`.
    async fn generate_images(
        &self,
        req: &ImageGenerationRequest,
    ) -> TubeseoResult<ImageGenerationResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default text model identifier.
    fn text_model(&self) -> &str;

    /// Default image model identifier.
    fn image_model(&self) -> &str;
}

#[async_trait]
impl<T: GenerativeDriver + ?Sized> GenerativeDriver for Arc<T> {
    async fn generate_json(&self, req: &JsonGenerationRequest) -> TubeseoResult<String> {
        (**self).generate_json(req).await
    }

    async fn generate_images(
        &self,
        req: &ImageGenerationRequest,
    ) -> TubeseoResult<ImageGenerationResponse> {
        (**self).generate_images(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn text_model(&self) -> &str {
        (**self).text_model()
    }

    fn image_model(&self) -> &str {
        (**self).image_model()
    }
}
