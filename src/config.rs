use crate::constants::{
    CANONICAL_TIMESTAMP_FORMAT, DEFAULT_UNKNOWN_SENTINELS, FALLBACK_TIMESTAMP_FORMATS, STOP_WORDS,
};

/// Tunables for the normalize → featurize → aggregate pipeline.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Case-insensitive placeholder values treated as absent for city, state and country.
    pub unknown_sentinels: &'static [&'static str],
    /// Format tried first when parsing `created_at`.
    pub canonical_timestamp_format: &'static str,
    /// Formats tried, in order, when the canonical one fails.
    pub fallback_timestamp_formats: &'static [&'static str],
    /// Words skipped by word frequency counting.
    pub stop_words: &'static [&'static str],
    /// Number of entries returned by top-k selections when the caller doesn't specify one.
    pub default_top_n: usize,
}

pub const DEFAULT_PIPELINE_CONFIG: &PipelineConfig = &PipelineConfig {
    unknown_sentinels: DEFAULT_UNKNOWN_SENTINELS,
    canonical_timestamp_format: CANONICAL_TIMESTAMP_FORMAT,
    fallback_timestamp_formats: FALLBACK_TIMESTAMP_FORMATS,
    stop_words: STOP_WORDS,
    default_top_n: 10,
};
