use chrono::NaiveDate;
use clap::Parser;
use log::{error, info};
use std::fmt::Display;
use std::path::PathBuf;
use tweet_sniffer::constants::DEFAULT_DATASET_PATH;
use tweet_sniffer::{
    featurize_dataset, AggregationOp, Aggregator, ExclusionReason, FeaturizedPost, FrequencyTable,
    GroupDimension, KeywordMatcher, PostAnalyzer, PostFilter, Sentiment, DEFAULT_PIPELINE_CONFIG,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Summarize sentiment, emoji, hashtag and location data of a post dataset")]
struct Args {
    /// CSV dataset, optionally gzip-compressed (`.gz`)
    #[arg(long, default_value = DEFAULT_DATASET_PATH)]
    dataset: PathBuf,

    /// Only summarize posts about this entity
    #[arg(long)]
    entity: Option<String>,

    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    from: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_parser = parse_day)]
    to: Option<NaiveDate>,

    /// Number of entries printed per frequency table
    #[arg(long, default_value_t = DEFAULT_PIPELINE_CONFIG.default_top_n)]
    top: usize,

    /// Only summarize posts mentioning this word; may be repeated
    #[arg(long = "keyword")]
    keywords: Vec<String>,
}

fn parse_day(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{}': {}", value, e))
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let output = match featurize_dataset(&args.dataset) {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to load dataset: {}", e);
            std::process::exit(1);
        }
    };

    info!(
        "{} posts featurized, {} rows dropped ({} unreadable, {} malformed, {} duplicate)",
        output.posts.len(),
        output.dropped_count(),
        output.unreadable_count,
        output.malformed_count,
        output.duplicate_count
    );

    let post_filter = match build_filter(&args) {
        Ok(post_filter) => post_filter,
        Err(e) => {
            error!("Invalid filter: {}", e);
            std::process::exit(1);
        }
    };

    let posts = post_filter.apply(&output.posts);

    println!("{} of {} posts selected", posts.len(), output.posts.len());

    print_report(&posts, args.top);
}

fn build_filter(args: &Args) -> Result<PostFilter, tweet_sniffer::Error> {
    let mut post_filter = PostFilter::new();

    if let Some(entity) = &args.entity {
        post_filter = post_filter.with_entity(entity);
    }

    if args.from.is_some() || args.to.is_some() {
        post_filter = post_filter.with_date_range((
            args.from.unwrap_or(NaiveDate::MIN),
            args.to.unwrap_or(NaiveDate::MAX),
        ));
    }

    if !args.keywords.is_empty() {
        post_filter = post_filter.with_keywords(KeywordMatcher::new(args.keywords.as_slice())?);
    }

    Ok(post_filter)
}

fn print_report(posts: &[&FeaturizedPost], top: usize) {
    let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);

    let daily_counts = Aggregator::aggregate(
        posts.iter().copied(),
        &[GroupDimension::Entity, GroupDimension::Day],
        AggregationOp::Count,
    );

    println!("\n== Posts per day ==");
    for (key, count) in daily_counts.iter() {
        println!("{}: {}", key, count);
    }
    if daily_counts.excluded(ExclusionReason::MissingTimestamp) > 0 {
        println!(
            "(without timestamp: {})",
            daily_counts.excluded(ExclusionReason::MissingTimestamp)
        );
    }

    println!("\n== Sentiment ==");
    for (entity, breakdown) in analyzer.sentiment_by_entity(posts.iter().copied()) {
        for sentiment in Sentiment::ALL {
            println!(
                "{} {}: {} ({})",
                entity,
                sentiment,
                breakdown.count(sentiment),
                format_share(breakdown.proportion(sentiment))
            );
        }
    }

    println!("\n== Engagement ==");
    let engagement = analyzer.engagement_by_entity(posts.iter().copied());
    for summary in &engagement {
        println!(
            "{}: {} likes ({}), {} retweets ({})",
            summary.entity,
            summary.likes,
            format_share(summary.likes_share()),
            summary.retweets,
            format_share(summary.retweets_share())
        );
    }

    if let [first, second] = engagement.as_slice() {
        println!(
            "\n== Daily polarity difference ({} - {}) ==",
            first.entity, second.entity
        );
        for (day, difference) in
            analyzer.daily_polarity_difference(posts.iter().copied(), &first.entity, &second.entity)
        {
            println!("{}: {:+.4}", day, difference);
        }
    }

    print_top(
        "Hashtags",
        &analyzer.hashtag_frequencies(posts.iter().copied()),
        top,
    );
    print_top(
        "Emojis",
        &analyzer.emoji_frequencies(posts.iter().copied()),
        top,
    );
    print_top(
        "Words",
        &analyzer.word_frequencies(posts.iter().copied()),
        top,
    );
    print_top(
        "Cities",
        &analyzer.city_frequencies(posts.iter().copied()),
        top,
    );

    let state_frequencies = analyzer.state_frequencies(posts.iter().copied());
    print_top("States", &state_frequencies.table, top);
    println!("(unresolved: {})", state_frequencies.unresolved_count);

    print_top(
        "Countries",
        &analyzer.country_frequencies(posts.iter().copied()),
        top,
    );
    print_top(
        "Sources",
        &analyzer.source_frequencies(posts.iter().copied()),
        top,
    );

    println!("\n== Most active author ==");
    match analyzer.most_active_author(posts.iter().copied()) {
        Some(author) => println!(
            "{}: {} posts, {} likes (max {}), {} followers, country: {}",
            author.author_id,
            author.post_count,
            author.total_likes,
            author.max_likes,
            author.follower_count,
            author.country.as_deref().unwrap_or("-")
        ),
        None => println!("-"),
    }
}

fn print_top<T>(title: &str, table: &FrequencyTable<T>, top: usize)
where
    T: Eq + std::hash::Hash + Clone + Display,
{
    println!("\n== {} ==", title);
    for (item, frequency) in table.top(top) {
        println!("{}: {}", item, frequency);
    }
}

fn format_share(share: Option<f64>) -> String {
    match share {
        Some(share) => format!("{:.1}%", share * 100.0),
        None => "n/a".to_string(),
    }
}
