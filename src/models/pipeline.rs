use crate::config::PipelineConfig;
use crate::models::{Dataset, FeaturizedPost, Featurizer, PolarityScorer, RecordNormalizer};
use log::info;

/// Featurized posts of one run and the number of rows that didn't make it.
#[derive(Debug, Clone, Default)]
pub struct PipelineOutput {
    pub posts: Vec<FeaturizedPost>,
    /// Rows the CSV reader could not decode.
    pub unreadable_count: usize,
    /// Rows rejected by the normalizer.
    pub malformed_count: usize,
    /// Rows dropped because their identifier repeated an earlier row.
    pub duplicate_count: usize,
}

impl PipelineOutput {
    /// Every input row that was dropped before featurization.
    pub fn dropped_count(&self) -> usize {
        self.unreadable_count + self.malformed_count + self.duplicate_count
    }
}

/// Raw rows → normalized posts → featurized posts.
pub struct Pipeline<'a> {
    config: &'a PipelineConfig,
    featurizer: Featurizer,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a PipelineConfig) -> Self {
        Pipeline {
            config,
            featurizer: Featurizer::new(),
        }
    }

    /// Uses `scorer` instead of the built-in lexicon for polarity.
    pub fn with_scorer(config: &'a PipelineConfig, scorer: Box<dyn PolarityScorer>) -> Self {
        Pipeline {
            config,
            featurizer: Featurizer::with_scorer(scorer),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        self.config
    }

    pub fn run(&self, dataset: &Dataset) -> PipelineOutput {
        info!("Running pipeline over {} rows...", dataset.len());

        let normalizer = RecordNormalizer::new(self.config);
        let batch = normalizer.normalize_batch(&dataset.rows);

        let posts = self.featurizer.featurize_batch(batch.posts);

        info!("Pipeline produced {} featurized posts", posts.len());

        PipelineOutput {
            posts,
            unreadable_count: dataset.unreadable_rows,
            malformed_count: batch.malformed_count,
            duplicate_count: batch.duplicate_count,
        }
    }
}
