use serde::Deserialize;

/// One row of the input dataset, exactly as read.
///
/// Every field is optional at this stage; the `RecordNormalizer` decides which
/// absences make a row malformed. Field names match the dataset's column headers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawPost {
    pub tweet_id: Option<String>,
    pub candidate: Option<String>,
    pub tweet: Option<String>,
    pub tweet_cleaned: Option<String>,
    pub created_at: Option<String>,
    pub likes: Option<String>,
    pub retweet_count: Option<String>,
    pub user_id: Option<String>,
    pub user_followers_count: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub source: Option<String>,
}

/// Column headers the loader expects to find.
pub const EXPECTED_COLUMNS: [&str; 13] = [
    "tweet_id",
    "candidate",
    "tweet",
    "tweet_cleaned",
    "created_at",
    "likes",
    "retweet_count",
    "user_id",
    "user_followers_count",
    "country",
    "state",
    "city",
    "source",
];
