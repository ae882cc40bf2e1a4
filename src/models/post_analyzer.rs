use crate::config::PipelineConfig;
use crate::models::{
    AggregationOp, Aggregator, FeaturizedPost, FrequencyTable, GroupDimension, KeyPart,
    NumericField, Sentiment, StateCode, SummaryValue,
};
use crate::types::{AuthorId, Emoji, Entity, Hashtag};
use crate::Error;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// Per-state post counts plus how many posts had no canonical state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateFrequencies {
    pub table: FrequencyTable<StateCode>,
    pub unresolved_count: usize,
}

/// Engagement totals for one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngagementSummary {
    pub entity: Entity,
    pub post_count: u64,
    pub likes: u64,
    pub retweets: u64,
}

impl EngagementSummary {
    pub fn total_engagement(&self) -> u64 {
        self.likes.saturating_add(self.retweets)
    }

    /// Likes as a share of total engagement; `None` when there was no engagement.
    pub fn likes_share(&self) -> Option<f64> {
        self.share_of_engagement(self.likes)
    }

    /// Retweets as a share of total engagement; `None` when there was no engagement.
    pub fn retweets_share(&self) -> Option<f64> {
        self.share_of_engagement(self.retweets)
    }

    /// Average likes per post.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyGroup` when the entity has no posts.
    pub fn mean_likes(&self) -> Result<f64, Error> {
        if self.post_count == 0 {
            return Err(Error::EmptyGroup(format!(
                "mean likes for '{}' over no posts",
                self.entity
            )));
        }

        Ok(self.likes as f64 / self.post_count as f64)
    }

    fn share_of_engagement(&self, part: u64) -> Option<f64> {
        let total = self.total_engagement();
        if total == 0 {
            return None;
        }

        Some(part as f64 / total as f64)
    }
}

/// Sentiment label counts for one entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentimentBreakdown {
    pub counts: BTreeMap<Sentiment, u64>,
}

impl SentimentBreakdown {
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, sentiment: Sentiment) -> u64 {
        self.counts.get(&sentiment).copied().unwrap_or(0)
    }

    /// Share of posts carrying `sentiment`; `None` when there are no posts.
    pub fn proportion(&self, sentiment: Sentiment) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }

        Some(self.count(sentiment) as f64 / total as f64)
    }
}

/// Activity of the single most prolific author.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorActivity {
    pub author_id: AuthorId,
    pub post_count: usize,
    pub total_likes: u64,
    pub max_likes: u64,
    /// Taken from the author's first post in the dataset.
    pub follower_count: u64,
    /// Taken from the author's first post in the dataset.
    pub country: Option<String>,
}

/// Derived summary tables over featurized posts.
pub struct PostAnalyzer<'a> {
    config: &'a PipelineConfig,
}

impl<'a> PostAnalyzer<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        PostAnalyzer { config }
    }

    /// Number of posts using each hashtag. A hashtag repeated within a post counts once.
    pub fn hashtag_frequencies<'p, I>(&self, posts: I) -> FrequencyTable<Hashtag>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts
            .into_iter()
            .flat_map(|post| post.hashtags.iter().cloned())
            .collect()
    }

    /// Every emoji occurrence across all posts.
    pub fn emoji_frequencies<'p, I>(&self, posts: I) -> FrequencyTable<Emoji>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts
            .into_iter()
            .flat_map(|post| post.emojis.iter().copied())
            .collect()
    }

    pub fn city_frequencies<'p, I>(&self, posts: I) -> FrequencyTable<String>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts
            .into_iter()
            .filter_map(|post| post.post.city.clone())
            .collect()
    }

    pub fn country_frequencies<'p, I>(&self, posts: I) -> FrequencyTable<String>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts
            .into_iter()
            .filter_map(|post| post.post.country.clone())
            .collect()
    }

    /// Client/device usage, e.g. "twitter for iphone".
    pub fn source_frequencies<'p, I>(&self, posts: I) -> FrequencyTable<String>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts
            .into_iter()
            .filter_map(|post| post.post.source.clone())
            .collect()
    }

    pub fn state_frequencies<'p, I>(&self, posts: I) -> StateFrequencies
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let mut state_frequencies = StateFrequencies {
            table: FrequencyTable::new(),
            unresolved_count: 0,
        };

        for post in posts {
            match post.post.state.code() {
                Some(code) => state_frequencies.table.record(code),
                None => state_frequencies.unresolved_count += 1,
            }
        }

        state_frequencies
    }

    /// Word counts over the cleaned text, skipping stop words and bare numbers.
    /// This is the input of a word cloud.
    pub fn word_frequencies<'p, I>(&self, posts: I) -> FrequencyTable<String>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let stop_words: HashSet<&str> = self.config.stop_words.iter().copied().collect();

        posts
            .into_iter()
            .flat_map(|post| {
                post.post
                    .cleaned_text
                    .split(|c: char| !(c.is_alphanumeric() || c == '\''))
                    .map(|word| word.trim_matches('\'').to_lowercase())
                    .collect::<Vec<String>>()
            })
            .filter(|word| {
                !word.is_empty()
                    && !word.chars().all(|c| c.is_numeric())
                    && !stop_words.contains(word.as_str())
            })
            .collect()
    }

    /// Likes and retweets per entity, ordered by entity.
    pub fn engagement_by_entity<'p, I>(&self, posts: I) -> Vec<EngagementSummary>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let mut summaries: BTreeMap<&str, EngagementSummary> = BTreeMap::new();

        for featurized_post in posts {
            let post = &featurized_post.post;
            let summary = summaries
                .entry(post.entity.as_str())
                .or_insert_with(|| EngagementSummary {
                    entity: post.entity.clone(),
                    post_count: 0,
                    likes: 0,
                    retweets: 0,
                });

            summary.post_count += 1;
            summary.likes = summary.likes.saturating_add(post.likes);
            summary.retweets = summary.retweets.saturating_add(post.retweets);
        }

        summaries.into_values().collect()
    }

    /// Sentiment label counts per entity.
    pub fn sentiment_by_entity<'p, I>(&self, posts: I) -> BTreeMap<Entity, SentimentBreakdown>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let counts = Aggregator::aggregate(
            posts,
            &[GroupDimension::Entity, GroupDimension::Sentiment],
            AggregationOp::Count,
        );

        let mut breakdowns: BTreeMap<Entity, SentimentBreakdown> = BTreeMap::new();

        for (key, value) in counts.iter() {
            if let (
                [KeyPart::Entity(entity), KeyPart::Sentiment(sentiment)],
                SummaryValue::Count(count),
            ) = (key.parts(), value)
            {
                breakdowns
                    .entry(entity.clone())
                    .or_default()
                    .counts
                    .insert(*sentiment, *count);
            }
        }

        breakdowns
    }

    /// The author with the most posts; ties go to the author seen first.
    pub fn most_active_author<'p, I>(&self, posts: I) -> Option<AuthorActivity>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let posts: Vec<&FeaturizedPost> = posts.into_iter().collect();

        let author_frequencies: FrequencyTable<&str> = posts
            .iter()
            .filter_map(|post| post.post.author_id.as_deref())
            .collect();

        let (author_id, post_count) = author_frequencies.top(1).into_iter().next()?;

        let authored: Vec<&FeaturizedPost> = posts
            .iter()
            .copied()
            .filter(|post| post.post.author_id.as_deref() == Some(author_id))
            .collect();

        let first_post = &authored.first()?.post;

        Some(AuthorActivity {
            author_id: author_id.to_string(),
            post_count,
            total_likes: authored.iter().map(|post| post.post.likes).sum(),
            max_likes: authored
                .iter()
                .map(|post| post.post.likes)
                .max()
                .unwrap_or(0),
            follower_count: first_post.author_followers,
            country: first_post.country.clone(),
        })
    }

    /// Mean polarity per day for one entity.
    pub fn daily_mean_polarity<'p, I>(&self, posts: I, entity: &str) -> BTreeMap<NaiveDate, f64>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let entity = entity.trim().to_lowercase();

        let means = Aggregator::aggregate(
            posts.into_iter().filter(|post| post.post.entity == entity),
            &[GroupDimension::Day],
            AggregationOp::Mean(NumericField::Polarity),
        );

        means
            .iter()
            .filter_map(|(key, value)| match key.parts() {
                [KeyPart::Day(day)] => Some((*day, value.as_f64())),
                _ => None,
            })
            .collect()
    }

    /// Per-day difference of mean polarity, `entity_a - entity_b`.
    ///
    /// Days are matched by date; a day only one entity has data for is left out.
    pub fn daily_polarity_difference<'p, I>(
        &self,
        posts: I,
        entity_a: &str,
        entity_b: &str,
    ) -> BTreeMap<NaiveDate, f64>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let posts: Vec<&FeaturizedPost> = posts.into_iter().collect();

        let means_a = self.daily_mean_polarity(posts.iter().copied(), entity_a);
        let means_b = self.daily_mean_polarity(posts.iter().copied(), entity_b);

        means_a
            .into_iter()
            .filter_map(|(day, mean_a)| means_b.get(&day).map(|mean_b| (day, mean_a - mean_b)))
            .collect()
    }
}
