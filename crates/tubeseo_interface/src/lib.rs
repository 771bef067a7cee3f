//! Trait definitions for tubeseo generative backends.
//!
//! The content generator talks to its provider only through
//! [`GenerativeDriver`], so tests can substitute a scripted backend.

mod traits;

pub use traits::GenerativeDriver;
