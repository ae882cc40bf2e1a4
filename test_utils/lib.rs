#![allow(dead_code)]

use chrono::NaiveDate;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::{fs, str::FromStr};
use tweet_sniffer::{
    featurize_csv_text, AggregationKey, AggregationOp, Aggregator, ExclusionReason,
    GroupDimension, KeyPart, PipelineOutput, PostAnalyzer, PostFilter, Sentiment, StateCode,
    SummaryValue, DEFAULT_PIPELINE_CONFIG,
};
pub mod constants;
use constants::{COMMENT_PREFIX, DATASET_HEADER, EXPECTED_PREFIX};

/// Builds one CSV row, quoting fields that contain a delimiter or quote.
pub fn csv_row(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|field| {
            if field.contains(',') || field.contains('"') || field.contains('\n') {
                format!("\"{}\"", field.replace('"', "\"\""))
            } else {
                field.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(",")
}

/// A full dataset (header included) from rows in `DATASET_HEADER` column order.
pub fn build_dataset_csv(rows: &[[&str; 13]]) -> String {
    let mut csv = String::from(DATASET_HEADER);
    csv.push('\n');

    for row in rows {
        csv.push_str(&csv_row(row));
        csv.push('\n');
    }

    csv
}

/// A row with only the columns most tests care about; everything else blank.
pub fn minimal_row<'a>(
    tweet_id: &'a str,
    candidate: &'a str,
    tweet_cleaned: &'a str,
    created_at: &'a str,
) -> [&'a str; 13] {
    [
        tweet_id,
        candidate,
        tweet_cleaned,
        tweet_cleaned,
        created_at,
        "0",
        "0",
        "",
        "0",
        "",
        "",
        "",
        "",
    ]
}

pub fn write_fixture(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

pub fn write_gzip_fixture(dir: &Path, file_name: &str, contents: &str) -> PathBuf {
    let path = dir.join(file_name);
    let file = fs::File::create(&path).expect("Failed to create fixture");

    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(contents.as_bytes())
        .expect("Failed to compress fixture");
    encoder.finish().expect("Failed to finish gzip stream");

    path
}

// Helper function to get the `key=value` expectations from a fixture file
pub fn get_expected_values(file_path: &Path) -> Vec<(String, String)> {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            let expectation = line.strip_prefix(EXPECTED_PREFIX)?.trim();
            let (key, value) = expectation.split_once('=')?;
            Some((key.trim().to_string(), value.trim().to_string()))
        })
        .collect()
}

// Helper function to strip the expectation and comment lines, leaving the CSV body
pub fn get_dataset_text(file_path: &Path) -> String {
    let content = fs::read_to_string(file_path).expect("Failed to read test file");

    content
        .lines()
        .filter(|line| {
            !line.trim_start().starts_with(EXPECTED_PREFIX)
                && !line.trim_start().starts_with(COMMENT_PREFIX)
        })
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Looks up the value an expectation key refers to.
///
/// Keys:
/// - `posts`, `malformed`, `duplicates`, `unreadable`
/// - `missing_timestamps`, `unresolved_states`
/// - `hashtag:<entity>:<tag>`, `day_count:<entity>:<YYYY-MM-DD>`
/// - `sentiment:<entity>:<label>`, `state:<CODE>`, `city:<name>`
pub fn actual_value(key: &str, output: &PipelineOutput) -> Option<String> {
    let analyzer = PostAnalyzer::new(DEFAULT_PIPELINE_CONFIG);
    let parts: Vec<&str> = key.split(':').collect();

    let value = match parts.as_slice() {
        ["posts"] => output.posts.len().to_string(),
        ["malformed"] => output.malformed_count.to_string(),
        ["duplicates"] => output.duplicate_count.to_string(),
        ["unreadable"] => output.unreadable_count.to_string(),
        ["missing_timestamps"] => Aggregator::aggregate(
            &output.posts,
            &[GroupDimension::Day],
            AggregationOp::Count,
        )
        .excluded(ExclusionReason::MissingTimestamp)
        .to_string(),
        ["unresolved_states"] => analyzer
            .state_frequencies(&output.posts)
            .unresolved_count
            .to_string(),
        ["hashtag", entity, tag] => {
            let posts = PostFilter::new().with_entity(entity).apply(&output.posts);
            analyzer
                .hashtag_frequencies(posts)
                .get(&tag.to_string())
                .to_string()
        }
        ["day_count", entity, day] => {
            let day = NaiveDate::from_str(day).ok()?;
            let counts = Aggregator::aggregate(
                &output.posts,
                &[GroupDimension::Entity, GroupDimension::Day],
                AggregationOp::Count,
            );
            let key = AggregationKey::new(vec![
                KeyPart::Entity(entity.to_string()),
                KeyPart::Day(day),
            ]);
            match counts.get(&key) {
                Some(SummaryValue::Count(count)) => count.to_string(),
                _ => "0".to_string(),
            }
        }
        ["sentiment", entity, label] => {
            let sentiment = Sentiment::ALL
                .into_iter()
                .find(|sentiment| sentiment.as_str() == *label)?;
            analyzer
                .sentiment_by_entity(&output.posts)
                .get(*entity)
                .map(|breakdown| breakdown.count(sentiment))
                .unwrap_or(0)
                .to_string()
        }
        ["state", code] => {
            let state_code = StateCode::all().find(|state_code| state_code.as_str() == *code)?;
            analyzer
                .state_frequencies(&output.posts)
                .table
                .get(&state_code)
                .to_string()
        }
        ["city", city] => analyzer
            .city_frequencies(&output.posts)
            .get(&city.to_string())
            .to_string(),
        _ => return None,
    };

    Some(value)
}

// Helper function to run the pipeline over a fixture file and check every expectation.
// Returns the number of mismatched expectations.
pub fn run_test_for_file(test_file_path: &Path, use_assertions: bool) -> usize {
    let dataset_text = get_dataset_text(test_file_path);
    let expected_values = get_expected_values(test_file_path);

    assert!(
        !expected_values.is_empty(),
        "{:?} - No EXPECTED lines found",
        test_file_path
    );

    let output = featurize_csv_text(&dataset_text).expect("Failed to parse dataset");

    let mut error_count = 0;

    for (key, expected) in &expected_values {
        let actual = actual_value(key, &output);

        if actual.as_deref() != Some(expected.as_str()) {
            error_count += 1;
        }

        if use_assertions {
            assert_eq!(
                actual.as_deref(),
                Some(expected.as_str()),
                "{:?} - Mismatch for '{}'",
                test_file_path,
                key
            );
        }
    }

    error_count
}
