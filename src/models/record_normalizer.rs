use crate::config::PipelineConfig;
use crate::models::{NormalizedPost, RawPost, StateCode, StateResolution};
use crate::types::PostId;
use crate::Error;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, info};
use std::collections::HashSet;

/// Normalized posts of one batch along with how many rows were dropped.
#[derive(Debug, Clone, Default)]
pub struct NormalizedBatch {
    pub posts: Vec<NormalizedPost>,
    /// Rows rejected with `Error::MalformedRecord`.
    pub malformed_count: usize,
    /// Rows whose identifier was already seen earlier in the batch.
    pub duplicate_count: usize,
}

pub struct RecordNormalizer<'a> {
    config: &'a PipelineConfig,
    sentinels: HashSet<String>,
}

impl<'a> RecordNormalizer<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        let sentinels = config
            .unknown_sentinels
            .iter()
            .map(|sentinel| sentinel.trim().to_lowercase())
            .collect();

        RecordNormalizer { config, sentinels }
    }

    /// Normalizes a single raw row.
    ///
    /// # Errors
    ///
    /// Returns `Error::MalformedRecord` when the row has no identifier, no
    /// entity, or a non-numeric engagement or follower count.
    pub fn normalize(&self, raw_post: &RawPost) -> Result<NormalizedPost, Error> {
        let id = raw_post.tweet_id.as_deref().map(str::trim).unwrap_or("");
        if id.is_empty() {
            return Err(Error::malformed(id, "missing identifier"));
        }

        let entity = raw_post
            .candidate
            .as_deref()
            .map(|candidate| candidate.trim().to_lowercase())
            .filter(|candidate| !candidate.is_empty())
            .ok_or_else(|| Error::malformed(id, "missing entity label"))?;

        let likes = parse_count(id, "likes", raw_post.likes.as_deref())?;
        let retweets = parse_count(id, "retweet_count", raw_post.retweet_count.as_deref())?;
        let author_followers = parse_count(
            id,
            "user_followers_count",
            raw_post.user_followers_count.as_deref(),
        )?;

        Ok(NormalizedPost {
            id: id.to_string(),
            entity,
            text: raw_post.tweet.clone().unwrap_or_default(),
            cleaned_text: raw_post.tweet_cleaned.clone().unwrap_or_default(),
            created_at: raw_post
                .created_at
                .as_deref()
                .and_then(|created_at| self.parse_timestamp(created_at)),
            likes,
            retweets,
            author_id: raw_post
                .user_id
                .as_deref()
                .map(str::trim)
                .filter(|user_id| !user_id.is_empty())
                .map(str::to_string),
            author_followers,
            country: self.normalize_location(raw_post.country.as_deref()),
            state: self.resolve_state(raw_post.state.as_deref()),
            city: self.normalize_location(raw_post.city.as_deref()),
            source: normalize_category(raw_post.source.as_deref()),
        })
    }

    /// Normalizes every row, dropping (and counting) malformed and duplicated ones.
    ///
    /// A bad row never aborts the batch.
    pub fn normalize_batch(&self, raw_posts: &[RawPost]) -> NormalizedBatch {
        info!("Normalizing {} rows...", raw_posts.len());

        let mut batch = NormalizedBatch::default();
        let mut seen_ids: HashSet<PostId> = HashSet::with_capacity(raw_posts.len());

        for raw_post in raw_posts {
            match self.normalize(raw_post) {
                Ok(post) => {
                    if seen_ids.insert(post.id.clone()) {
                        batch.posts.push(post);
                    } else {
                        debug!("Dropping duplicate post {}", post.id);
                        batch.duplicate_count += 1;
                    }
                }
                Err(err) => {
                    debug!("Dropping row: {}", err);
                    batch.malformed_count += 1;
                }
            }
        }

        info!(
            "Normalized {} posts ({} malformed, {} duplicates dropped)",
            batch.posts.len(),
            batch.malformed_count,
            batch.duplicate_count
        );

        batch
    }

    /// Parses a textual timestamp, trying the canonical format first.
    ///
    /// Offsets, when present, are discarded and the wall-clock time is kept as
    /// provided. Returns `None` rather than a default when nothing matches.
    pub fn parse_timestamp(&self, value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }

        std::iter::once(self.config.canonical_timestamp_format)
            .chain(self.config.fallback_timestamp_formats.iter().copied())
            .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|timestamp| timestamp.naive_local())
            })
            .or_else(|| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d")
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
    }

    /// Maps a free-text state name to its canonical code.
    pub fn resolve_state(&self, value: Option<&str>) -> StateResolution {
        self.normalize_location(value)
            .and_then(|state| StateCode::from_name(&state))
            .map_or(StateResolution::Unresolved, StateResolution::Resolved)
    }

    pub fn is_sentinel(&self, value: &str) -> bool {
        self.sentinels.contains(&value.trim().to_lowercase())
    }

    fn normalize_location(&self, value: Option<&str>) -> Option<String> {
        normalize_category(value).filter(|location| !self.sentinels.contains(location))
    }
}

/// Trims and lowercases a categorical value; blank values become `None`.
fn normalize_category(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// Parses an engagement or follower count. Blank cells count as zero.
///
/// Exports that went through a float column (`"12.0"`) are accepted as long
/// as the value is a whole, non-negative number.
fn parse_count(id: &str, column: &str, value: Option<&str>) -> Result<u64, Error> {
    let value = value.map(str::trim).unwrap_or("");
    if value.is_empty() {
        return Ok(0);
    }

    if let Ok(count) = value.parse::<u64>() {
        return Ok(count);
    }

    match value.parse::<f64>() {
        Ok(count) if count.is_finite() && count >= 0.0 && count.fract() == 0.0 => Ok(count as u64),
        _ => Err(Error::malformed(
            id,
            format!("non-numeric {} value '{}'", column, value),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_PIPELINE_CONFIG;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("1", "likes", None).unwrap(), 0);
        assert_eq!(parse_count("1", "likes", Some(" 42 ")).unwrap(), 42);
        assert_eq!(parse_count("1", "likes", Some("12.0")).unwrap(), 12);
        assert!(parse_count("1", "likes", Some("12.5")).is_err());
        assert!(parse_count("1", "likes", Some("-3")).is_err());
        assert!(parse_count("1", "likes", Some("lots")).is_err());
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let normalizer = RecordNormalizer::new(DEFAULT_PIPELINE_CONFIG);

        let expected = NaiveDate::from_ymd_opt(2020, 10, 15)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();

        assert_eq!(normalizer.parse_timestamp("2020-10-15 00:00:01"), Some(expected));
        assert_eq!(normalizer.parse_timestamp("2020-10-15T00:00:01"), Some(expected));
        assert_eq!(
            normalizer.parse_timestamp("2020-10-15T00:00:01+05:00"),
            Some(expected)
        );
        assert_eq!(
            normalizer.parse_timestamp("2020-10-15"),
            NaiveDate::from_ymd_opt(2020, 10, 15).unwrap().and_hms_opt(0, 0, 0)
        );
        assert_eq!(normalizer.parse_timestamp("yesterday"), None);
        assert_eq!(normalizer.parse_timestamp(""), None);
    }

    #[test]
    fn test_sentinels_are_case_insensitive() {
        let normalizer = RecordNormalizer::new(DEFAULT_PIPELINE_CONFIG);

        assert!(normalizer.is_sentinel("Unknown"));
        assert!(normalizer.is_sentinel(" UNKNWN "));
        assert!(!normalizer.is_sentinel("new york"));
    }
}
