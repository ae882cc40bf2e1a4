#[cfg(doctest)]
doc_comment::doctest!("../README.md");

mod config;
pub use config::{PipelineConfig, DEFAULT_PIPELINE_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    AggregationKey, AggregationOp, AggregationResult, Aggregator, AuthorActivity, Dataset,
    DatasetCache, DatasetLoader, EmojiExtractor, EngagementSummary, Error, ExclusionReason,
    FeaturizedPost, Featurizer, FrequencyTable, GroupDimension, HashtagExtractor, KeyPart,
    KeywordMatcher, LexiconPolarityScorer, NormalizedBatch, NormalizedPost, NumericField, Pipeline,
    PipelineOutput, PolarityScorer, PostAnalyzer, PostFilter, RawPost, RecordNormalizer,
    Sentiment, SentimentBreakdown, StateCode, StateFrequencies, StateResolution, SummaryValue,
};
pub mod types;
mod utils;
pub use types::{
    AuthorId, DateRange, Emoji, Entity, Hashtag, ItemFrequency, Polarity, PostId,
};
pub use utils::select_top_k;

use std::path::Path;

/// Loads the dataset at `path` and runs it through the default pipeline.
///
/// # Errors
///
/// Returns `Error::DatasetUnavailable` when the file can't be opened.
pub fn featurize_dataset<P: AsRef<Path>>(path: P) -> Result<PipelineOutput, Error> {
    featurize_dataset_with_custom_config(path, DEFAULT_PIPELINE_CONFIG)
}

pub fn featurize_dataset_with_custom_config<P: AsRef<Path>>(
    path: P,
    config: &PipelineConfig,
) -> Result<PipelineOutput, Error> {
    let dataset = DatasetLoader::load(path)?;

    Ok(Pipeline::new(config).run(&dataset))
}

/// Runs CSV text through the default pipeline. Handy for small, in-memory inputs.
pub fn featurize_csv_text(csv_text: &str) -> Result<PipelineOutput, Error> {
    let dataset = DatasetLoader::read_from_string(csv_text)?;

    Ok(Pipeline::new(DEFAULT_PIPELINE_CONFIG).run(&dataset))
}
