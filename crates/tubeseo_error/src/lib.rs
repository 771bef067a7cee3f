//! Error types for the tubeseo library.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Drivers and internal plumbing return [`TubeseoResult`]. The content
//! generation operations never leak those errors to their callers; they
//! normalize every failure into a [`ContentError`].
//!
//! # Examples
//!
//! ```
//! use tubeseo_error::{GeminiError, GeminiErrorKind, TubeseoResult};
//!
//! fn fetch() -> TubeseoResult<String> {
//!     Err(GeminiError::new(GeminiErrorKind::MissingApiKey("GEMINI_API_KEY".into())))?
//! }
//!
//! assert!(fetch().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builder;
mod config;
mod content;
mod error;
mod gemini;
mod json;

pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind, ContentResult, NO_IMAGE_MESSAGE};
pub use error::{TubeseoError, TubeseoErrorKind, TubeseoResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use json::JsonError;
