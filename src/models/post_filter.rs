use crate::models::{FeaturizedPost, KeywordMatcher};
use crate::types::{DateRange, Entity};

/// Selection parameters supplied by the consumer of the summary tables.
///
/// Every set criterion must hold for a post to match; an empty filter matches
/// everything.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub entity: Option<Entity>,
    /// Inclusive. Posts without a timestamp never match a date range.
    pub date_range: Option<DateRange>,
    /// Every matcher must match the cleaned text.
    pub keywords: Vec<KeywordMatcher>,
}

impl PostFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to one entity, compared case-insensitively.
    pub fn with_entity(mut self, entity: &str) -> Self {
        self.entity = Some(entity.trim().to_lowercase());
        self
    }

    pub fn with_date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    pub fn with_keywords(mut self, matcher: KeywordMatcher) -> Self {
        self.keywords.push(matcher);
        self
    }

    pub fn matches(&self, featurized_post: &FeaturizedPost) -> bool {
        let post = &featurized_post.post;

        if let Some(entity) = &self.entity {
            if &post.entity != entity {
                return false;
            }
        }

        if let Some((start, end)) = self.date_range {
            match post.created_on() {
                Some(day) if day >= start && day <= end => {}
                _ => return false,
            }
        }

        KeywordMatcher::matches_all(&self.keywords, &post.cleaned_text)
    }

    pub fn apply<'p>(&self, posts: &'p [FeaturizedPost]) -> Vec<&'p FeaturizedPost> {
        posts.iter().filter(|post| self.matches(post)).collect()
    }
}
