#[path = "../test_utils/lib.rs"]
mod test_utils;

use chrono::NaiveDate;
use test_utils::{build_dataset_csv, minimal_row};
use tweet_sniffer::{
    featurize_csv_text, AggregationKey, AggregationOp, Aggregator, DatasetLoader, FeaturizedPost,
    GroupDimension, KeyPart, KeywordMatcher, Pipeline, PostAnalyzer, PostFilter, Sentiment,
    StateCode, SummaryValue, DEFAULT_PIPELINE_CONFIG,
};

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("Invalid test date")
    }

    fn featurize(rows: &[[&str; 13]]) -> Vec<FeaturizedPost> {
        featurize_csv_text(&build_dataset_csv(rows))
            .expect("Dataset should parse")
            .posts
    }

    #[test]
    fn test_hashtags_and_daily_counts_per_entity() {
        let posts = featurize(&[
            minimal_row("1", "Biden", "I love #hope", "2020-10-15 10:00:00"),
            minimal_row("2", "Biden", "#hope wins", "2020-10-15 18:00:00"),
            minimal_row("3", "Trump", "no hashtag", "2020-10-16 09:00:00"),
        ]);

        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

        let biden_posts = PostFilter::new().with_entity("Biden").apply(&posts);
        let hashtags = analyzer.hashtag_frequencies(biden_posts);

        assert_eq!(hashtags.len(), 1);
        assert_eq!(hashtags.top(10), vec![("hope".to_string(), 2)]);

        let daily_counts = Aggregator::aggregate(
            &posts,
            &[GroupDimension::Entity, GroupDimension::Day],
            AggregationOp::Count,
        );

        let groups: Vec<(AggregationKey, SummaryValue)> =
            daily_counts.into_groups().into_iter().collect();
        assert_eq!(
            groups,
            vec![
                (
                    AggregationKey::new(vec![
                        KeyPart::Entity("biden".to_string()),
                        KeyPart::Day(day(2020, 10, 15)),
                    ]),
                    SummaryValue::Count(2),
                ),
                (
                    AggregationKey::new(vec![
                        KeyPart::Entity("trump".to_string()),
                        KeyPart::Day(day(2020, 10, 16)),
                    ]),
                    SummaryValue::Count(1),
                ),
            ]
        );
    }

    #[test]
    fn test_state_resolution_and_unresolved_count() {
        let mut california = minimal_row("1", "Biden", "hello", "2020-10-15 10:00:00");
        california[10] = "california";
        let mut unknown = minimal_row("2", "Trump", "hello", "2020-10-15 11:00:00");
        unknown[10] = "Unknown";

        let posts = featurize(&[california, unknown]);

        assert_eq!(posts[0].post.state.code().map(|code| code.as_str()), Some("CA"));
        assert!(!posts[1].post.state.is_resolved());

        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);
        let state_frequencies = analyzer.state_frequencies(&posts);

        let ca = StateCode::from_name("California").expect("California is a state");
        assert_eq!(state_frequencies.table.len(), 1);
        assert_eq!(state_frequencies.table.get(&ca), 1);
        assert_eq!(state_frequencies.unresolved_count, 1);
    }

    #[test]
    fn test_pipeline_reports_dropped_rows() {
        let mut bad_likes = minimal_row("3", "Biden", "hello", "2020-10-15 10:00:00");
        bad_likes[5] = "a lot";

        let csv = build_dataset_csv(&[
            minimal_row("1", "Biden", "hello", "2020-10-15 10:00:00"),
            minimal_row("1", "Trump", "hello again", "2020-10-15 10:00:00"),
            minimal_row("", "Trump", "no id", "2020-10-15 10:00:00"),
            bad_likes,
        ]);

        let dataset = DatasetLoader::read_from_string(&csv).unwrap();
        let output = Pipeline::new(DEFAULT_PIPELINE_CONFIG).run(&dataset);

        assert_eq!(output.posts.len(), 1);
        assert_eq!(output.duplicate_count, 1);
        assert_eq!(output.malformed_count, 2);
        assert_eq!(output.unreadable_count, 0);
        assert_eq!(output.dropped_count(), 3);
    }

    #[test]
    fn test_pipeline_with_custom_scorer() {
        let csv = build_dataset_csv(&[
            minimal_row("1", "Biden", "anything", "2020-10-15 10:00:00"),
            minimal_row("2", "Trump", "anything", "2020-10-15 10:00:00"),
        ]);
        let dataset = DatasetLoader::read_from_string(&csv).unwrap();

        let pipeline =
            Pipeline::with_scorer(DEFAULT_PIPELINE_CONFIG, Box::new(|_: &str| -0.25));
        let output = pipeline.run(&dataset);

        assert_eq!(pipeline.config().default_top_n, 10);
        assert!(output
            .posts
            .iter()
            .all(|post| post.sentiment == Sentiment::Negative));
    }

    #[test]
    fn test_filter_by_date_range_and_keywords() {
        let posts = featurize(&[
            minimal_row("1", "Biden", "Covid plan announced", "2020-10-14 23:59:59"),
            minimal_row("2", "Biden", "covid19 numbers", "2020-10-15 00:00:00"),
            minimal_row("3", "Trump", "the economy and COVID", "2020-10-18 12:00:00"),
            minimal_row("4", "Trump", "rally tonight", "2020-10-16 12:00:00"),
            minimal_row("5", "Trump", "covid again", ""),
        ]);

        let in_range = PostFilter::new()
            .with_date_range((day(2020, 10, 15), day(2020, 10, 18)))
            .apply(&posts);
        let ids: Vec<&str> = in_range.iter().map(|post| post.id()).collect();
        assert_eq!(ids, vec!["2", "3", "4"]);

        let covid = KeywordMatcher::new(&["covid"]).unwrap();
        let mentions = PostFilter::new().with_keywords(covid).apply(&posts);
        let ids: Vec<&str> = mentions.iter().map(|post| post.id()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "5"]);

        let combined = PostFilter::new()
            .with_entity("TRUMP")
            .with_date_range((day(2020, 10, 15), day(2020, 10, 18)))
            .with_keywords(KeywordMatcher::new(&["covid"]).unwrap())
            .with_keywords(KeywordMatcher::new(&["economy", "jobs"]).unwrap())
            .apply(&posts);
        let ids: Vec<&str> = combined.iter().map(|post| post.id()).collect();
        assert_eq!(ids, vec!["3"]);

        assert_eq!(PostFilter::new().apply(&posts).len(), posts.len());
    }

    #[test]
    fn test_engagement_by_entity() {
        let mut biden_a = minimal_row("1", "Biden", "a", "2020-10-15 10:00:00");
        biden_a[5] = "30";
        biden_a[6] = "10";
        let mut biden_b = minimal_row("2", "Biden", "b", "2020-10-15 11:00:00");
        biden_b[5] = "10";
        let trump = minimal_row("3", "Trump", "c", "2020-10-15 12:00:00");

        let posts = featurize(&[biden_a, biden_b, trump]);
        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

        let engagement = analyzer.engagement_by_entity(&posts);
        assert_eq!(engagement.len(), 2);

        let biden = &engagement[0];
        assert_eq!(biden.entity, "biden");
        assert_eq!(biden.post_count, 2);
        assert_eq!(biden.total_engagement(), 50);
        assert_eq!(biden.likes_share(), Some(0.8));
        assert_eq!(biden.retweets_share(), Some(0.2));
        assert_eq!(biden.mean_likes().unwrap(), 20.0);

        let trump = &engagement[1];
        assert_eq!(trump.entity, "trump");
        assert_eq!(trump.total_engagement(), 0);
        assert_eq!(trump.likes_share(), None);
        assert_eq!(trump.retweets_share(), None);
        assert_eq!(trump.mean_likes().unwrap(), 0.0);
    }

    #[test]
    fn test_sentiment_by_entity() {
        let posts = featurize(&[
            minimal_row("1", "Biden", "a great plan", "2020-10-15 10:00:00"),
            minimal_row("2", "Biden", "a wonderful night", "2020-10-15 10:00:00"),
            minimal_row("3", "Biden", "terrible", "2020-10-15 10:00:00"),
            minimal_row("4", "Trump", "the rally", "2020-10-15 10:00:00"),
        ]);

        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);
        let breakdowns = analyzer.sentiment_by_entity(&posts);

        let biden = &breakdowns["biden"];
        assert_eq!(biden.total(), 3);
        assert_eq!(biden.count(Sentiment::Positive), 2);
        assert_eq!(biden.count(Sentiment::Negative), 1);
        assert_eq!(biden.count(Sentiment::Neutral), 0);
        assert_eq!(biden.proportion(Sentiment::Neutral), Some(0.0));

        let trump = &breakdowns["trump"];
        assert_eq!(trump.count(Sentiment::Neutral), 1);
        assert_eq!(trump.proportion(Sentiment::Neutral), Some(1.0));
    }

    #[test]
    fn test_location_and_source_frequencies() {
        let mut first = minimal_row("1", "Biden", "a", "2020-10-15 10:00:00");
        first[9] = "United States of America";
        first[11] = "New York";
        first[12] = "Twitter for iPhone";
        let mut second = minimal_row("2", "Biden", "b", "2020-10-15 10:00:00");
        second[9] = "France";
        second[11] = "Paris";
        second[12] = "Twitter for Android";
        let mut third = minimal_row("3", "Trump", "c", "2020-10-15 10:00:00");
        third[9] = "united states of america";
        third[11] = "unknown";
        third[12] = "twitter for iphone";

        let posts = featurize(&[first, second, third]);
        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

        assert_eq!(
            analyzer.country_frequencies(&posts).top(1),
            vec![("united states of america".to_string(), 2)]
        );
        assert_eq!(
            analyzer.city_frequencies(&posts).top(5),
            vec![("new york".to_string(), 1), ("paris".to_string(), 1)]
        );
        assert_eq!(
            analyzer.source_frequencies(&posts).top(5),
            vec![
                ("twitter for iphone".to_string(), 2),
                ("twitter for android".to_string(), 1)
            ]
        );
    }

    #[test]
    fn test_emoji_and_word_frequencies() {
        let mut first = minimal_row("1", "Biden", "vote vote vote", "2020-10-15 10:00:00");
        first[2] = "Vote 🇺🇸🔥";
        let mut second = minimal_row("2", "Trump", "the vote is in 2020", "2020-10-15 10:00:00");
        second[2] = "🔥🔥";

        let posts = featurize(&[first, second]);
        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

        let emojis = analyzer.emoji_frequencies(&posts);
        assert_eq!(emojis.get(&'🔥'), 3);
        assert_eq!(emojis.top(1), vec![('🔥', 3)]);

        let words = analyzer.word_frequencies(&posts);
        assert_eq!(words.top(1), vec![("vote".to_string(), 4)]);
        assert_eq!(words.get(&"the".to_string()), 0);
        assert_eq!(words.get(&"2020".to_string()), 0);
    }

    #[test]
    fn test_most_active_author() {
        let mut rows = Vec::new();
        for (id, author, likes, followers, country) in [
            ("1", "u1", "5", "100", "Canada"),
            ("2", "u2", "50", "10", "France"),
            ("3", "u2", "7", "12", ""),
            ("4", "u1", "1", "100", "Canada"),
            ("5", "u3", "0", "0", ""),
        ] {
            let mut row = minimal_row(id, "Biden", "text", "2020-10-15 10:00:00");
            row[5] = likes;
            row[7] = author;
            row[8] = followers;
            row[9] = country;
            rows.push(row);
        }

        let posts = featurize(&rows);
        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

        // u1 and u2 both have two posts; u1 was seen first
        let author = analyzer
            .most_active_author(&posts)
            .expect("Dataset has authors");
        assert_eq!(author.author_id, "u1");
        assert_eq!(author.post_count, 2);
        assert_eq!(author.total_likes, 6);
        assert_eq!(author.max_likes, 5);
        assert_eq!(author.follower_count, 100);
        assert_eq!(author.country.as_deref(), Some("canada"));

        let none: Vec<FeaturizedPost> = Vec::new();
        assert!(analyzer.most_active_author(&none).is_none());
    }

    #[test]
    fn test_daily_polarity_difference() {
        let posts = featurize(&[
            minimal_row("1", "Biden", "great", "2020-10-15 10:00:00"),
            minimal_row("2", "Biden", "the debate", "2020-10-15 12:00:00"),
            minimal_row("3", "Trump", "bad", "2020-10-15 13:00:00"),
            minimal_row("4", "Biden", "good", "2020-10-16 10:00:00"),
            minimal_row("5", "Trump", "good", "2020-10-17 10:00:00"),
        ]);

        let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

        let biden_means = analyzer.daily_mean_polarity(&posts, "Biden");
        assert_eq!(biden_means.len(), 2);
        assert!((biden_means[&day(2020, 10, 15)] - 0.4).abs() < 1e-9);

        let difference = analyzer.daily_polarity_difference(&posts, "biden", "trump");

        // Only the 15th has posts about both entities
        assert_eq!(difference.len(), 1);
        assert!((difference[&day(2020, 10, 15)] - 1.1).abs() < 1e-9);
    }
}
