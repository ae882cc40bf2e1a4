use crate::models::{NormalizedPost, Sentiment};
use crate::types::{Emoji, Hashtag, Polarity};

/// A normalized post plus its derived per-record features.
///
/// The originating post travels with its features, so they can never be
/// re-associated with the wrong record.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturizedPost {
    pub post: NormalizedPost,
    pub polarity: Polarity,
    pub sentiment: Sentiment,
    /// Emoji from the raw text in order of appearance, duplicates kept.
    pub emojis: Vec<Emoji>,
    /// Distinct hashtags from the cleaned text, ordered by first occurrence.
    pub hashtags: Vec<Hashtag>,
}

impl FeaturizedPost {
    pub fn id(&self) -> &str {
        &self.post.id
    }

    pub fn entity(&self) -> &str {
        &self.post.entity
    }
}
