use crate::types::Hashtag;
use crate::utils::dedup_vector;
use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#(\w+)").expect("hashtag pattern is valid"));

/// Finds `#word` hashtags in cleaned post text.
pub struct HashtagExtractor {}

impl HashtagExtractor {
    pub fn new() -> Self {
        HashtagExtractor {}
    }

    /// Every hashtag in order of appearance, lowercased and without the `#`.
    /// Duplicates are kept.
    ///
    /// A `#` at the end of the text, or followed by a non-word character, is
    /// not a hashtag.
    pub fn extract_sequence(&self, text: &str) -> Vec<Hashtag> {
        HASHTAG_REGEX
            .captures_iter(text)
            .filter_map(|captures| captures.get(1))
            .map(|tag| tag.as_str().to_lowercase())
            .collect()
    }

    /// Distinct hashtags, ordered by first occurrence.
    pub fn extract(&self, text: &str) -> Vec<Hashtag> {
        dedup_vector(&self.extract_sequence(text))
    }
}

impl Default for HashtagExtractor {
    fn default() -> Self {
        Self::new()
    }
}
