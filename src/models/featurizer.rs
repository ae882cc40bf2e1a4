use crate::models::{
    EmojiExtractor, FeaturizedPost, HashtagExtractor, LexiconPolarityScorer, NormalizedPost,
    PolarityScorer, Sentiment,
};
use log::info;

/// Runs the independent per-record extractors over normalized posts.
pub struct Featurizer {
    scorer: Box<dyn PolarityScorer>,
    emoji_extractor: EmojiExtractor,
    hashtag_extractor: HashtagExtractor,
}

impl Featurizer {
    /// Featurizer backed by the built-in lexicon scorer.
    pub fn new() -> Self {
        Self::with_scorer(Box::new(LexiconPolarityScorer::new()))
    }

    pub fn with_scorer(scorer: Box<dyn PolarityScorer>) -> Self {
        Featurizer {
            scorer,
            emoji_extractor: EmojiExtractor::new(),
            hashtag_extractor: HashtagExtractor::new(),
        }
    }

    /// Polarity is scored on the cleaned text, emoji are taken from the raw text
    /// and hashtags from the cleaned text.
    pub fn featurize(&self, post: NormalizedPost) -> FeaturizedPost {
        let score = self.scorer.polarity(&post.cleaned_text);
        let polarity = if score.is_nan() {
            0.0
        } else {
            score.clamp(-1.0, 1.0)
        };
        let emojis = self.emoji_extractor.extract(&post.text);
        let hashtags = self.hashtag_extractor.extract(&post.cleaned_text);

        FeaturizedPost {
            polarity,
            sentiment: Sentiment::from_polarity(polarity),
            emojis,
            hashtags,
            post,
        }
    }

    pub fn featurize_batch(&self, posts: Vec<NormalizedPost>) -> Vec<FeaturizedPost> {
        info!("Extracting features for {} posts...", posts.len());

        posts.into_iter().map(|post| self.featurize(post)).collect()
    }
}

impl Default for Featurizer {
    fn default() -> Self {
        Self::new()
    }
}
