pub mod aggregator;
pub use aggregator::{
    AggregationKey, AggregationOp, AggregationResult, Aggregator, ExclusionReason, GroupDimension,
    KeyPart, NumericField, SummaryValue,
};

pub mod dataset_cache;
pub use dataset_cache::DatasetCache;

pub mod dataset_loader;
pub use dataset_loader::{Dataset, DatasetLoader};

pub mod emoji_extractor;
pub use emoji_extractor::EmojiExtractor;

pub mod error;
pub use error::Error;

pub mod featurized_post;
pub use featurized_post::FeaturizedPost;

pub mod featurizer;
pub use featurizer::Featurizer;

pub mod frequency_table;
pub use frequency_table::FrequencyTable;

pub mod hashtag_extractor;
pub use hashtag_extractor::HashtagExtractor;

pub mod keyword_matcher;
pub use keyword_matcher::KeywordMatcher;

pub mod normalized_post;
pub use normalized_post::NormalizedPost;

pub mod pipeline;
pub use pipeline::{Pipeline, PipelineOutput};

pub mod post_analyzer;
pub use post_analyzer::{
    AuthorActivity, EngagementSummary, PostAnalyzer, SentimentBreakdown, StateFrequencies,
};

pub mod post_filter;
pub use post_filter::PostFilter;

pub mod raw_post;
pub use raw_post::RawPost;

pub mod record_normalizer;
pub use record_normalizer::{NormalizedBatch, RecordNormalizer};

pub mod sentiment;
pub use sentiment::{LexiconPolarityScorer, PolarityScorer, Sentiment};

pub mod state_code;
pub use state_code::{StateCode, StateResolution};
