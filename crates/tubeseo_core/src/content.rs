//! Generated SEO metadata records.

use serde::{Deserialize, Serialize};

/// SEO metadata for one video, exactly as the text model produced it.
///
/// Every field is required on the wire; a payload missing any of them fails
/// to decode.
///
/// # Examples
///
/// ```
/// use tubeseo_core::GeneratedContent;
///
/// let content: GeneratedContent = serde_json::from_str(r##"{
///     "title": "5 Secretos del Pan Casero que Nadie Te Cuenta",
///     "description": "Descubre... [ENLACE A RECURSO O PRODUCTO]",
///     "hashtags": ["#pan", "#recetas"],
///     "keywords": ["pan casero", "masa madre"],
///     "pinnedComment": "¿Cuál es tu pan favorito?"
/// }"##).unwrap();
///
/// assert_eq!(content.hashtags.len(), 2);
/// assert!(content.pinned_comment.ends_with('?'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    /// Click-worthy title, ideally 60-70 characters
    pub title: String,
    /// Long-form description with creator-filled placeholder tokens
    pub description: String,
    /// Hashtags, each starting with `#`
    pub hashtags: Vec<String>,
    /// SEO keywords, mostly drawn from the title and description
    pub keywords: Vec<String>,
    /// Comment to pin, ending in a question or call to action
    pub pinned_comment: String,
}

/// One A/B testing title candidate with its estimated click-through score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeTitle {
    /// Candidate title
    pub title: String,
    /// Estimated CTR potential, nominally 0-100
    pub seo_score: i64,
}

impl AlternativeTitle {
    /// Create a new title candidate.
    pub fn new(title: impl Into<String>, seo_score: i64) -> Self {
        Self {
            title: title.into(),
            seo_score,
        }
    }
}
