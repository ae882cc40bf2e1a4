use crate::models::{FeaturizedPost, Sentiment, StateCode};
use crate::types::{AuthorId, Entity};
use crate::Error;
use chrono::NaiveDate;
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// A dimension posts can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupDimension {
    Entity,
    /// Calendar date of `created_at`.
    Day,
    Sentiment,
    /// Canonical state code; unresolved states are excluded.
    State,
    Country,
    City,
    Source,
    Author,
}

/// One component of an `AggregationKey`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyPart {
    Entity(Entity),
    Day(NaiveDate),
    Sentiment(Sentiment),
    State(StateCode),
    Country(String),
    City(String),
    Source(String),
    Author(AuthorId),
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPart::Entity(entity) => write!(f, "{}", entity),
            KeyPart::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            KeyPart::Sentiment(sentiment) => write!(f, "{}", sentiment),
            KeyPart::State(code) => write!(f, "{}", code),
            KeyPart::Country(country) => write!(f, "{}", country),
            KeyPart::City(city) => write!(f, "{}", city),
            KeyPart::Source(source) => write!(f, "{}", source),
            KeyPart::Author(author) => write!(f, "{}", author),
        }
    }
}

/// Ordered tuple of key parts, one per requested `GroupDimension`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AggregationKey(pub Vec<KeyPart>);

impl AggregationKey {
    pub fn new(parts: Vec<KeyPart>) -> Self {
        AggregationKey(parts)
    }

    pub fn parts(&self) -> &[KeyPart] {
        &self.0
    }
}

impl fmt::Display for AggregationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|part| part.to_string()).collect();
        write!(f, "({})", parts.join(", "))
    }
}

/// A numeric post attribute that can be summed or averaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericField {
    Likes,
    Retweets,
    /// Likes plus retweets.
    Engagement,
    FollowerCount,
    Polarity,
}

impl NumericField {
    pub fn value(&self, featurized_post: &FeaturizedPost) -> f64 {
        let post = &featurized_post.post;

        match self {
            NumericField::Likes => post.likes as f64,
            NumericField::Retweets => post.retweets as f64,
            NumericField::Engagement => post.engagement() as f64,
            NumericField::FollowerCount => post.author_followers as f64,
            NumericField::Polarity => featurized_post.polarity,
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumericField::Likes => "likes",
            NumericField::Retweets => "retweets",
            NumericField::Engagement => "engagement",
            NumericField::FollowerCount => "follower count",
            NumericField::Polarity => "polarity",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregationOp {
    Count,
    Sum(NumericField),
    Mean(NumericField),
}

/// The summary computed for one group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SummaryValue {
    Count(u64),
    Sum(f64),
    Mean(f64),
}

impl SummaryValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            SummaryValue::Count(count) => *count as f64,
            SummaryValue::Sum(sum) => *sum,
            SummaryValue::Mean(mean) => *mean,
        }
    }
}

impl fmt::Display for SummaryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummaryValue::Count(count) => write!(f, "{}", count),
            SummaryValue::Sum(sum) => write!(f, "{:.2}", sum),
            SummaryValue::Mean(mean) => write!(f, "{:.4}", mean),
        }
    }
}

/// Why a post was left out of a grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExclusionReason {
    /// Grouped by day, but the post has no parseable timestamp.
    MissingTimestamp,
    /// Grouped by state, but the state did not resolve to a canonical code.
    UnresolvedGeography,
    /// Grouped by country, city, source or author, but the value is absent.
    MissingCategory,
}

/// Summaries per group plus the number of posts excluded from grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationResult {
    pub dimensions: Vec<GroupDimension>,
    pub op: AggregationOp,
    groups: BTreeMap<AggregationKey, SummaryValue>,
    exclusions: BTreeMap<ExclusionReason, usize>,
}

impl AggregationResult {
    pub fn get(&self, key: &AggregationKey) -> Option<&SummaryValue> {
        self.groups.get(key)
    }

    /// Groups in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&AggregationKey, &SummaryValue)> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn excluded(&self, reason: ExclusionReason) -> usize {
        self.exclusions.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_excluded(&self) -> usize {
        self.exclusions.values().sum()
    }

    /// Groups ordered by value descending; ties keep key order.
    pub fn sorted_by_value(&self) -> Vec<(&AggregationKey, &SummaryValue)> {
        let mut sorted: Vec<(&AggregationKey, &SummaryValue)> = self.groups.iter().collect();
        sorted.sort_by(|a, b| b.1.as_f64().total_cmp(&a.1.as_f64()));
        sorted
    }

    pub fn into_groups(self) -> BTreeMap<AggregationKey, SummaryValue> {
        self.groups
    }
}

/// Groups featurized posts and summarizes each group.
pub struct Aggregator {}

impl Aggregator {
    /// Groups `posts` by `dimensions` and applies `op` to every group.
    ///
    /// A post missing the value for any requested dimension is excluded and
    /// counted under the reason of the first such dimension. Keys are ordered,
    /// and sums accumulate in input order, so identical input always yields an
    /// identical result.
    pub fn aggregate<'p, I>(
        posts: I,
        dimensions: &[GroupDimension],
        op: AggregationOp,
    ) -> AggregationResult
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let mut accumulators: BTreeMap<AggregationKey, (u64, f64)> = BTreeMap::new();
        let mut exclusions: BTreeMap<ExclusionReason, usize> = BTreeMap::new();

        for post in posts {
            let key = match Self::key_for(post, dimensions) {
                Ok(key) => key,
                Err(reason) => {
                    *exclusions.entry(reason).or_insert(0) += 1;
                    continue;
                }
            };

            let value = match op {
                AggregationOp::Count => 0.0,
                AggregationOp::Sum(field) | AggregationOp::Mean(field) => field.value(post),
            };

            let accumulator = accumulators.entry(key).or_insert((0, 0.0));
            accumulator.0 += 1;
            accumulator.1 += value;
        }

        if !exclusions.is_empty() {
            debug!("Excluded from {:?} grouping: {:?}", dimensions, exclusions);
        }

        let groups = accumulators
            .into_iter()
            .map(|(key, (count, sum))| {
                let summary = match op {
                    AggregationOp::Count => SummaryValue::Count(count),
                    AggregationOp::Sum(_) => SummaryValue::Sum(sum),
                    // Groups only exist once a post lands in them, so `count` is never zero
                    AggregationOp::Mean(_) => SummaryValue::Mean(sum / count as f64),
                };
                (key, summary)
            })
            .collect();

        AggregationResult {
            dimensions: dimensions.to_vec(),
            op,
            groups,
            exclusions,
        }
    }

    pub fn count<'p, I>(posts: I) -> u64
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts.into_iter().count() as u64
    }

    pub fn sum<'p, I>(posts: I, field: NumericField) -> f64
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        posts.into_iter().map(|post| field.value(post)).sum()
    }

    /// Mean of `field` over `posts`.
    ///
    /// # Errors
    ///
    /// Returns `Error::EmptyGroup` when `posts` is empty.
    pub fn mean<'p, I>(posts: I, field: NumericField) -> Result<f64, Error>
    where
        I: IntoIterator<Item = &'p FeaturizedPost>,
    {
        let (count, sum) = posts
            .into_iter()
            .fold((0u64, 0.0), |(count, sum), post| {
                (count + 1, sum + field.value(post))
            });

        if count == 0 {
            return Err(Error::EmptyGroup(format!("mean {} over no posts", field)));
        }

        Ok(sum / count as f64)
    }

    fn key_for(
        featurized_post: &FeaturizedPost,
        dimensions: &[GroupDimension],
    ) -> Result<AggregationKey, ExclusionReason> {
        let post = &featurized_post.post;

        let parts = dimensions
            .iter()
            .map(|dimension| match dimension {
                GroupDimension::Entity => Ok(KeyPart::Entity(post.entity.clone())),
                GroupDimension::Day => post
                    .created_on()
                    .map(KeyPart::Day)
                    .ok_or(ExclusionReason::MissingTimestamp),
                GroupDimension::Sentiment => Ok(KeyPart::Sentiment(featurized_post.sentiment)),
                GroupDimension::State => post
                    .state
                    .code()
                    .map(KeyPart::State)
                    .ok_or(ExclusionReason::UnresolvedGeography),
                GroupDimension::Country => post
                    .country
                    .clone()
                    .map(KeyPart::Country)
                    .ok_or(ExclusionReason::MissingCategory),
                GroupDimension::City => post
                    .city
                    .clone()
                    .map(KeyPart::City)
                    .ok_or(ExclusionReason::MissingCategory),
                GroupDimension::Source => post
                    .source
                    .clone()
                    .map(KeyPart::Source)
                    .ok_or(ExclusionReason::MissingCategory),
                GroupDimension::Author => post
                    .author_id
                    .clone()
                    .map(KeyPart::Author)
                    .ok_or(ExclusionReason::MissingCategory),
            })
            .collect::<Result<Vec<KeyPart>, ExclusionReason>>()?;

        Ok(AggregationKey(parts))
    }
}
