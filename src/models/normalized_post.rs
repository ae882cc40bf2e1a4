use crate::models::StateResolution;
use crate::types::{AuthorId, Entity, PostId};
use chrono::{NaiveDate, NaiveDateTime};

/// A post with its categorical fields case-folded and its timestamp and state parsed.
///
/// Produced by the `RecordNormalizer`; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPost {
    pub id: PostId,
    pub entity: Entity,
    /// The original post text, emoji included.
    pub text: String,
    /// Text with URLs, mentions and noise already stripped by the dataset producer.
    pub cleaned_text: String,
    /// `None` when the source value could not be parsed.
    pub created_at: Option<NaiveDateTime>,
    pub likes: u64,
    pub retweets: u64,
    pub author_id: Option<AuthorId>,
    pub author_followers: u64,
    pub country: Option<String>,
    pub state: StateResolution,
    pub city: Option<String>,
    /// Client used to publish the post (e.g. "twitter for iphone").
    pub source: Option<String>,
}

impl NormalizedPost {
    /// Calendar date of `created_at`, as provided (no timezone conversion).
    pub fn created_on(&self) -> Option<NaiveDate> {
        self.created_at.map(|created_at| created_at.date())
    }

    pub fn engagement(&self) -> u64 {
        self.likes.saturating_add(self.retweets)
    }
}
