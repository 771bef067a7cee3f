//! Content generator orchestrating prompts, backend calls and decoding.

use crate::{
    Operation, alternative_titles_prompt, alternative_titles_schema, normalize_failure,
    parse_json_payload, seo_content_schema, seo_prompt, thumbnail_prompt,
};
use serde_json::Value;
use tracing::{debug, error, instrument};
use tubeseo_core::{
    AlternativeTitle, GeneratedContent, GenerationRequest, ImageGenerationRequest,
    ImageGenerationResponse, JPEG_MIME, JsonGenerationRequest, ThumbnailImage, ThumbnailRequest,
};
use tubeseo_error::{ContentError, ContentErrorKind, ContentResult, JsonError, TubeseoResult};
use tubeseo_interface::GenerativeDriver;

/// Generates SEO metadata, A/B titles and thumbnails through a
/// [`GenerativeDriver`].
///
/// Every operation is a single backend call with no retries. Failures are
/// logged and normalized to [`ContentErrorKind`].
#[derive(Debug, Clone)]
pub struct ContentGenerator<D> {
    driver: D,
}

impl<D: GenerativeDriver> ContentGenerator<D> {
    /// Create a generator over a backend driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// The underlying driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Generate a title, description, hashtags, keywords and pinned comment
    /// for a video topic.
    ///
    /// # Errors
    ///
    /// [`ContentErrorKind::QuotaExceeded`] when the provider reports quota
    /// exhaustion, otherwise [`ContentErrorKind::GenerationFailed`] for any
    /// transport, decoding or validation failure.
    #[instrument(
        name = "generate_seo_content",
        skip(self, request),
        fields(provider = self.driver.provider_name(), topic = %request.topic())
    )]
    pub async fn generate_seo_content(
        &self,
        request: &GenerationRequest,
    ) -> ContentResult<GeneratedContent> {
        let backend_request = JsonGenerationRequest::new(seo_prompt(request), seo_content_schema());
        self.seo_content_internal(&backend_request)
            .await
            .map_err(|e| normalize_failure(Operation::SeoContent, &e))
    }

    async fn seo_content_internal(
        &self,
        request: &JsonGenerationRequest,
    ) -> TubeseoResult<GeneratedContent> {
        let text = self.driver.generate_json(request).await?;
        debug!(response_len = text.len(), "Decoding SEO content");
        Ok(parse_json_payload(&text)?)
    }

    /// Generate alternative titles for A/B testing, sorted by descending SEO
    /// score.
    ///
    /// Titles with equal scores keep the order the model returned them in.
    /// A response without a `titles` array yields an empty list.
    ///
    /// # Errors
    ///
    /// [`ContentErrorKind::QuotaExceeded`] when the provider reports quota
    /// exhaustion, otherwise [`ContentErrorKind::GenerationFailed`].
    #[instrument(
        name = "generate_alternative_titles",
        skip(self),
        fields(provider = self.driver.provider_name())
    )]
    pub async fn generate_alternative_titles(
        &self,
        topic: &str,
        original_title: &str,
    ) -> ContentResult<Vec<AlternativeTitle>> {
        let backend_request = JsonGenerationRequest::new(
            alternative_titles_prompt(topic, original_title),
            alternative_titles_schema(),
        );
        self.alternative_titles_internal(&backend_request)
            .await
            .map_err(|e| normalize_failure(Operation::AlternativeTitles, &e))
    }

    async fn alternative_titles_internal(
        &self,
        request: &JsonGenerationRequest,
    ) -> TubeseoResult<Vec<AlternativeTitle>> {
        let text = self.driver.generate_json(request).await?;
        let payload: Value = parse_json_payload(&text)?;
        let mut titles = extract_titles(payload)?;
        titles.sort_by(|a, b| b.seo_score.cmp(&a.seo_score));
        debug!(count = titles.len(), "Decoded alternative titles");
        Ok(titles)
    }

    /// Generate a single thumbnail image.
    ///
    /// # Errors
    ///
    /// [`ContentErrorKind::NoImage`] when the model returns no image or an
    /// image without bytes, [`ContentErrorKind::QuotaExceeded`] on quota
    /// exhaustion, otherwise [`ContentErrorKind::GenerationFailed`].
    #[instrument(
        name = "generate_thumbnail",
        skip(self, request),
        fields(
            provider = self.driver.provider_name(),
            style = %request.style(),
            aspect_ratio = %request.aspect_ratio()
        )
    )]
    pub async fn generate_thumbnail(
        &self,
        request: &ThumbnailRequest,
    ) -> ContentResult<ThumbnailImage> {
        let backend_request =
            ImageGenerationRequest::single_jpeg(thumbnail_prompt(request), *request.aspect_ratio());
        let response = self
            .thumbnail_internal(&backend_request)
            .await
            .map_err(|e| normalize_failure(Operation::Thumbnail, &e))?;
        first_image(response)
    }

    async fn thumbnail_internal(
        &self,
        request: &ImageGenerationRequest,
    ) -> TubeseoResult<ImageGenerationResponse> {
        self.driver.generate_images(request).await
    }
}

/// Decode the `titles` member of a title payload.
///
/// A payload that is not an object, or whose `titles` member is missing or
/// not an array, yields no titles. Malformed elements are an error.
fn extract_titles(payload: Value) -> Result<Vec<AlternativeTitle>, JsonError> {
    let items = match payload {
        Value::Object(mut map) => match map.remove("titles") {
            Some(Value::Array(items)) => items,
            _ => return Ok(Vec::new()),
        },
        _ => return Ok(Vec::new()),
    };
    serde_json::from_value(Value::Array(items)).map_err(|e| JsonError::new(e.to_string()))
}

fn first_image(response: ImageGenerationResponse) -> ContentResult<ThumbnailImage> {
    let operation = Operation::Thumbnail;
    let Some(image) = response.images.into_iter().next() else {
        error!(%operation, "Image model returned no images");
        return Err(ContentError::new(ContentErrorKind::NoImage));
    };
    match image.bytes {
        Some(bytes) if !bytes.is_empty() => {
            let mime_type = image.mime_type.unwrap_or_else(|| JPEG_MIME.to_string());
            Ok(ThumbnailImage::new(bytes, mime_type))
        }
        _ => {
            error!(
                %operation,
                filtered_reason = ?image.filtered_reason,
                "Image model returned an image without bytes"
            );
            Err(ContentError::new(ContentErrorKind::NoImage))
        }
    }
}
