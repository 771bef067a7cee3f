//! Thumbnail request and image types.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tubeseo_error::{BuilderError, BuilderErrorKind};

/// MIME type requested from the image model.
pub const JPEG_MIME: &str = "image/jpeg";

/// Visual style of a generated thumbnail.
///
/// Names parse and print in kebab-case (`pixel-art`, `photorealistic`, ...).
///
/// # Examples
///
/// ```
/// use tubeseo_core::ThumbnailStyle;
///
/// assert_eq!("pixel-art".parse::<ThumbnailStyle>().unwrap(), ThumbnailStyle::PixelArt);
/// assert_eq!(ThumbnailStyle::from_name_lenient("oil-painting"), ThumbnailStyle::Cinematic);
/// assert_eq!(ThumbnailStyle::Viral.to_string(), "viral");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ThumbnailStyle {
    /// Loud clickbait photomontage with burned-in text
    Viral,
    /// Watercolor painting
    Watercolor,
    /// 80s synthwave
    Retro,
    /// 8-bit pixel art
    PixelArt,
    /// Saturated high-contrast colors
    Vibrant,
    /// Clean single focal point
    Minimalist,
    /// Sharp professional photograph
    Photorealistic,
    /// Dramatic film lighting
    #[default]
    Cinematic,
    /// Free-form prompt supplied by the user
    Custom,
}

impl ThumbnailStyle {
    /// Parse a style name, falling back to [`ThumbnailStyle::Cinematic`] for
    /// anything unrecognized.
    pub fn from_name_lenient(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

/// Output aspect ratio of a thumbnail.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum AspectRatio {
    /// 16:9, regular videos
    #[default]
    #[strum(serialize = "16:9")]
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16, Shorts
    #[strum(serialize = "9:16")]
    #[serde(rename = "9:16")]
    Portrait,
}

/// Input of a thumbnail generation.
///
/// # Examples
///
/// ```
/// use tubeseo_core::{AspectRatio, ThumbnailRequest, ThumbnailStyle};
///
/// let request = ThumbnailRequest::builder()
///     .topic("Mi primer maratón")
///     .style(ThumbnailStyle::Minimalist)
///     .text_overlay("Día 1")
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.aspect_ratio(), AspectRatio::Landscape);
/// assert_eq!(request.overlay(), Some("Día 1"));
/// assert_eq!(request.custom_prompt_override(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailRequest {
    /// Video topic
    topic: String,
    /// Visual style
    #[builder(default)]
    #[serde(default)]
    style: ThumbnailStyle,
    /// Output aspect ratio
    #[builder(default)]
    #[serde(default)]
    aspect_ratio: AspectRatio,
    /// Text to burn into the image
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text_overlay: Option<String>,
    /// Raw prompt replacing every templated style
    #[builder(default, setter(into, strip_option))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    custom_prompt: Option<String>,
}

impl ThumbnailRequest {
    /// Creates a new builder for `ThumbnailRequest`.
    pub fn builder() -> ThumbnailRequestBuilder {
        ThumbnailRequestBuilder::default()
    }

    /// The overlay text, if one was given and it is not empty.
    pub fn overlay(&self) -> Option<&str> {
        self.text_overlay.as_deref().filter(|text| !text.is_empty())
    }

    /// The custom prompt, if one was given and it is not blank.
    ///
    /// The returned text is the prompt as supplied, untrimmed.
    pub fn custom_prompt_override(&self) -> Option<&str> {
        self.custom_prompt
            .as_deref()
            .filter(|prompt| !prompt.trim().is_empty())
    }
}

impl ThumbnailRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.topic {
            Some(topic) if topic.trim().is_empty() => Err("topic must not be empty".to_string()),
            _ => Ok(()),
        }
    }
}

impl From<ThumbnailRequestBuilderError> for BuilderError {
    #[track_caller]
    fn from(err: ThumbnailRequestBuilderError) -> Self {
        match err {
            ThumbnailRequestBuilderError::UninitializedField(field) => {
                BuilderError::new(BuilderErrorKind::MissingField(field.to_string()))
            }
            ThumbnailRequestBuilderError::ValidationError(reason) => {
                BuilderError::new(BuilderErrorKind::ValidationFailed(reason))
            }
        }
    }
}

/// Encoded image returned by a thumbnail generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ThumbnailImage {
    /// Encoded image bytes
    bytes: Vec<u8>,
    /// MIME type of `bytes`
    mime_type: String,
}

impl ThumbnailImage {
    /// Wrap encoded image bytes.
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    /// Consume the image, returning its bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Base64 encoding of the image bytes.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// `data:` URL suitable for an `<img src>` attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubeseo_core::{JPEG_MIME, ThumbnailImage};
    ///
    /// let image = ThumbnailImage::new(vec![0xff, 0xd8, 0xff], JPEG_MIME);
    /// assert_eq!(image.data_url(), "data:image/jpeg;base64,/9j/");
    /// ```
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}
