#![allow(unused)] // Not every test binary uses every fixture path

use std::path::PathBuf;
use std::sync::LazyLock;

macro_rules! define_path {
    ($($segment:expr),*) => {{
        PathBuf::from_iter(vec![$($segment),*])
    }};
}

pub static TEST_FILES_DIRECTORY: LazyLock<PathBuf> =
    LazyLock::new(|| define_path!("tests", "test_files"));

pub const EXPECTED_PREFIX: &str = "EXPECTED:";

pub const COMMENT_PREFIX: &str = "COMMENT:";

pub const DATASET_HEADER: &str = "tweet_id,candidate,tweet,tweet_cleaned,created_at,likes,retweet_count,user_id,user_followers_count,country,state,city,source";
