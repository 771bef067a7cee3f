//! Core data types for the tubeseo content generation library.
//!
//! This crate holds the value records exchanged between the content generator
//! and its callers, plus the request/response records a generative backend
//! accepts and returns.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod content;
mod request;
mod thumbnail;

pub use backend::{
    GeneratedImage, ImageGenerationRequest, ImageGenerationResponse, JsonGenerationRequest,
};
pub use content::{AlternativeTitle, GeneratedContent};
pub use request::{GenerationRequest, GenerationRequestBuilder, GenerationRequestBuilderError};
pub use thumbnail::{
    AspectRatio, JPEG_MIME, ThumbnailImage, ThumbnailRequest, ThumbnailRequestBuilder,
    ThumbnailRequestBuilderError, ThumbnailStyle,
};
