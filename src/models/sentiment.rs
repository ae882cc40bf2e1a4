use crate::types::Polarity;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Three-way sentiment label derived from the sign of a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Negative, Sentiment::Neutral, Sentiment::Positive];

    /// Buckets a polarity score: `> 0` positive, `== 0` neutral, `< 0` negative.
    ///
    /// A NaN score carries no signal and is labeled neutral.
    pub fn from_polarity(polarity: Polarity) -> Sentiment {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
            Sentiment::Positive => "positive",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores text polarity in `[-1.0, 1.0]`.
///
/// This is the seam for plugging in an external sentiment model; downstream
/// code only depends on the sign of the returned score.
pub trait PolarityScorer {
    fn polarity(&self, text: &str) -> Polarity;
}

impl<F> PolarityScorer for F
where
    F: Fn(&str) -> Polarity,
{
    fn polarity(&self, text: &str) -> Polarity {
        self(text)
    }
}

/// Word lexicon scorer: averages the polarity of every lexicon hit.
///
/// An intensifier scales the next sentiment word; a negation within
/// `negation_window` tokens flips it and halves its weight.
#[derive(Debug, Clone)]
pub struct LexiconPolarityScorer {
    lexicon: HashMap<String, Polarity>,
    intensifiers: HashMap<String, f64>,
    negations: HashSet<String>,
    negation_window: usize,
}

const DEFAULT_LEXICON: &[(&str, Polarity)] = &[
    // Positive
    ("love", 0.5),
    ("loved", 0.7),
    ("loves", 0.5),
    ("great", 0.8),
    ("good", 0.7),
    ("best", 1.0),
    ("better", 0.5),
    ("happy", 0.8),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("win", 0.8),
    ("wins", 0.8),
    ("winning", 0.5),
    ("won", 0.6),
    ("victory", 0.7),
    ("strong", 0.43),
    ("honest", 0.6),
    ("proud", 0.8),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("excellent", 1.0),
    ("wonderful", 1.0),
    ("beautiful", 0.85),
    ("brilliant", 0.9),
    ("nice", 0.6),
    ("fair", 0.7),
    ("free", 0.4),
    ("safe", 0.5),
    ("support", 0.3),
    ("trust", 0.4),
    ("success", 0.6),
    ("successful", 0.75),
    ("thank", 0.3),
    ("thanks", 0.3),
    ("congratulations", 0.8),
    ("glad", 0.5),
    ("peace", 0.5),
    ("unity", 0.4),
    ("decent", 0.17),
    ("smart", 0.21),
    ("fantastic", 0.4),
    ("incredible", 0.9),
    ("positive", 0.23),
    ("true", 0.35),
    ("right", 0.29),
    // Negative
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("hate", -0.8),
    ("hated", -0.9),
    ("sad", -0.5),
    ("angry", -0.5),
    ("lie", -0.5),
    ("lies", -0.5),
    ("liar", -0.6),
    ("lying", -0.5),
    ("corrupt", -0.5),
    ("fraud", -0.6),
    ("fake", -0.5),
    ("wrong", -0.5),
    ("stupid", -0.8),
    ("dumb", -0.38),
    ("terrible", -1.0),
    ("horrible", -1.0),
    ("awful", -1.0),
    ("disgusting", -1.0),
    ("pathetic", -1.0),
    ("weak", -0.38),
    ("lose", -0.4),
    ("loser", -0.6),
    ("losing", -0.4),
    ("lost", -0.2),
    ("dead", -0.2),
    ("death", -0.4),
    ("crazy", -0.6),
    ("dangerous", -0.6),
    ("scary", -0.5),
    ("poor", -0.4),
    ("failed", -0.5),
    ("failure", -0.5),
    ("crisis", -0.4),
    ("disaster", -0.8),
    ("racist", -0.6),
    ("evil", -1.0),
    ("sick", -0.71),
    ("negative", -0.3),
    ("false", -0.4),
    ("shame", -0.5),
    ("rigged", -0.6),
];

const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("so", 1.2),
    ("extremely", 1.5),
    ("totally", 1.3),
    ("absolutely", 1.4),
    ("most", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.7),
    ("barely", 0.5),
];

const DEFAULT_NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't",
    "isnt", "isn't", "wasnt", "wasn't", "cant", "can't", "cannot", "wont", "won't", "aint", "ain't",
];

impl LexiconPolarityScorer {
    pub fn new() -> Self {
        Self::from_entries(DEFAULT_LEXICON.iter().copied())
    }

    /// Builds a scorer from custom `(word, polarity)` entries, keeping the
    /// default intensifiers and negations.
    pub fn from_entries<'e, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'e str, Polarity)>,
    {
        LexiconPolarityScorer {
            lexicon: entries
                .into_iter()
                .map(|(word, polarity)| (word.to_lowercase(), polarity.clamp(-1.0, 1.0)))
                .collect(),
            intensifiers: DEFAULT_INTENSIFIERS
                .iter()
                .map(|(word, factor)| (word.to_string(), *factor))
                .collect(),
            negations: DEFAULT_NEGATIONS.iter().map(|word| word.to_string()).collect(),
            negation_window: 3,
        }
    }

    pub fn with_negation_window(mut self, negation_window: usize) -> Self {
        self.negation_window = negation_window;
        self
    }

    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .map(|word| word.trim_matches('\'').to_lowercase())
            .filter(|word| !word.is_empty())
    }
}

impl Default for LexiconPolarityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconPolarityScorer {
    fn polarity(&self, text: &str) -> Polarity {
        let mut scores: Vec<Polarity> = Vec::new();
        let mut intensity = 1.0;
        let mut tokens_since_negation: Option<usize> = None;

        for token in Self::tokenize(text) {
            if self.negations.contains(&token) {
                tokens_since_negation = Some(0);
                continue;
            }

            if let Some(factor) = self.intensifiers.get(&token) {
                intensity = *factor;
                continue;
            }

            if let Some(base) = self.lexicon.get(&token) {
                let mut score = base * intensity;

                if tokens_since_negation.is_some_and(|distance| distance < self.negation_window) {
                    score *= -0.5;
                }

                scores.push(score.clamp(-1.0, 1.0));
                intensity = 1.0;
                tokens_since_negation = None;
                continue;
            }

            intensity = 1.0;
            tokens_since_negation = tokens_since_negation.map(|distance| distance + 1);
        }

        if scores.is_empty() {
            return 0.0;
        }

        (scores.iter().sum::<Polarity>() / scores.len() as Polarity).clamp(-1.0, 1.0)
    }
}
