use tweet_sniffer::{
    EmojiExtractor, Featurizer, HashtagExtractor, LexiconPolarityScorer, NormalizedPost,
    PolarityScorer, RawPost, RecordNormalizer, Sentiment, DEFAULT_PIPELINE_CONFIG,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized_post(id: &str, text: &str, cleaned_text: &str) -> NormalizedPost {
        let raw_post = RawPost {
            tweet_id: Some(id.to_string()),
            candidate: Some("Biden".to_string()),
            tweet: Some(text.to_string()),
            tweet_cleaned: Some(cleaned_text.to_string()),
            created_at: Some("2020-10-20 12:00:00".to_string()),
            ..RawPost::default()
        };

        RecordNormalizer::new(DEFAULT_PIPELINE_CONFIG)
            .normalize(&raw_post)
            .expect("Row should normalize")
    }

    #[test]
    fn test_sentiment_follows_polarity_sign() {
        let polarities = [-1.0, -0.5, -1e-9, -0.0, 0.0, 1e-9, 0.3, 1.0];

        for polarity in polarities {
            let sentiment = Sentiment::from_polarity(polarity);

            assert_eq!(polarity == 0.0, sentiment == Sentiment::Neutral);
            assert_eq!(polarity > 0.0, sentiment == Sentiment::Positive);
            assert_eq!(polarity < 0.0, sentiment == Sentiment::Negative);
        }
    }

    #[test]
    fn test_lexicon_scorer_stays_in_range() {
        let scorer = LexiconPolarityScorer::new();

        let texts = [
            "absolutely the best, most wonderful, excellent debate",
            "extremely terrible horrible awful evil",
            "not bad, not great",
            "nothing to see",
        ];

        for text in texts {
            let polarity = scorer.polarity(text);
            assert!(
                (-1.0..=1.0).contains(&polarity),
                "'{}' scored {}",
                text,
                polarity
            );
        }
    }

    #[test]
    fn test_custom_lexicon() {
        let scorer = LexiconPolarityScorer::from_entries([("malarkey", -0.6), ("landslide", 0.9)]);

        assert!(scorer.polarity("what a bunch of malarkey") < 0.0);
        assert!(scorer.polarity("Landslide!") > 0.0);
        assert_eq!(scorer.polarity("this is good"), 0.0);
    }

    #[test]
    fn test_negation_window() {
        let scorer = LexiconPolarityScorer::new().with_negation_window(1);

        assert!(scorer.polarity("not good") < 0.0);
        assert!(scorer.polarity("not that it was good") > 0.0);
    }

    #[test]
    fn test_hashtag_round_trip() {
        let extractor = HashtagExtractor::new();
        let tokens = ["Vote", "Election2020", "hope", "vote", "MAGA", "hope"];

        let text = tokens
            .iter()
            .map(|token| format!("#{}", token))
            .collect::<Vec<String>>()
            .join(" ");

        assert_eq!(
            extractor.extract_sequence(&text),
            vec!["vote", "election2020", "hope", "vote", "maga", "hope"]
        );
        assert_eq!(
            extractor.extract(&text),
            vec!["vote", "election2020", "hope", "maga"]
        );
    }

    #[test]
    fn test_hashtag_marker_rules() {
        let extractor = HashtagExtractor::new();

        assert!(extractor.extract("#").is_empty());
        assert!(extractor.extract("score: 10 # 5").is_empty());
        assert_eq!(extractor.extract("end with #tag"), vec!["tag"]);
        assert_eq!(extractor.extract("#tag_with_underscore!"), vec!["tag_with_underscore"]);
    }

    #[test]
    fn test_emoji_extraction() {
        let extractor = EmojiExtractor::new();

        assert_eq!(extractor.extract("🔥 hot 🔥 take 👏"), vec!['🔥', '🔥', '👏']);
        assert!(extractor.extract("plain text only").is_empty());
    }

    #[test]
    fn test_featurizer_uses_raw_and_cleaned_text() {
        let featurizer = Featurizer::new();

        let featurized_post = featurizer.featurize(normalized_post(
            "1",
            "I love #Hope 😍😍 https://t.co/xyz",
            "i love #hope",
        ));

        assert_eq!(featurized_post.id(), "1");
        assert_eq!(featurized_post.entity(), "biden");
        assert_eq!(featurized_post.emojis, vec!['😍', '😍']);
        assert_eq!(featurized_post.hashtags, vec!["hope"]);
        assert!(featurized_post.polarity > 0.0);
        assert_eq!(featurized_post.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_featurizer_with_custom_scorer() {
        let featurizer = Featurizer::with_scorer(Box::new(|text: &str| {
            if text.contains("boo") {
                -0.4
            } else {
                0.0
            }
        }));

        let posts = vec![
            normalized_post("1", "boo!", "boo"),
            normalized_post("2", "ok", "ok"),
        ];

        let featurized_posts = featurizer.featurize_batch(posts);

        assert_eq!(featurized_posts.len(), 2);
        assert_eq!(featurized_posts[0].id(), "1");
        assert_eq!(featurized_posts[0].sentiment, Sentiment::Negative);
        assert_eq!(featurized_posts[1].id(), "2");
        assert_eq!(featurized_posts[1].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_featurizer_clamps_out_of_range_scores() {
        let featurizer = Featurizer::with_scorer(Box::new(|_: &str| 7.5));

        let featurized_post = featurizer.featurize(normalized_post("1", "x", "x"));

        assert_eq!(featurized_post.polarity, 1.0);
        assert_eq!(featurized_post.sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_featurizer_treats_nan_score_as_neutral() {
        let featurizer = Featurizer::with_scorer(Box::new(|_: &str| f64::NAN));

        let featurized_post = featurizer.featurize(normalized_post("1", "x", "x"));

        assert_eq!(featurized_post.polarity, 0.0);
        assert_eq!(featurized_post.sentiment, Sentiment::Neutral);
    }
}
