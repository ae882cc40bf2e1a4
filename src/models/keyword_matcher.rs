use crate::Error;
use regex::{Regex, RegexBuilder};

/// Case-insensitive "mentions any of these keywords" test over post text.
///
/// Keywords match as substrings, so `covid` also matches `covid19`.
#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    keywords: Vec<String>,
    regex: Regex,
}

impl KeywordMatcher {
    /// # Errors
    ///
    /// Returns `Error::ParserError` when no non-blank keyword is given.
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> Result<Self, Error> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|keyword| keyword.as_ref().trim().to_string())
            .filter(|keyword| !keyword.is_empty())
            .collect();

        if keywords.is_empty() {
            return Err(Error::ParserError(
                "Keyword matcher needs at least one keyword".to_string(),
            ));
        }

        let pattern = keywords
            .iter()
            .map(|keyword| regex::escape(keyword))
            .collect::<Vec<String>>()
            .join("|");

        let regex = RegexBuilder::new(&pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| Error::ParserError(format!("Invalid keyword pattern: {}", e)))?;

        Ok(KeywordMatcher { keywords, regex })
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when every matcher matches `text`.
    pub fn matches_all(matchers: &[KeywordMatcher], text: &str) -> bool {
        matchers.iter().all(|matcher| matcher.is_match(text))
    }
}
