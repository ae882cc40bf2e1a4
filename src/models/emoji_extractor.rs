use crate::constants::EMOJI_RANGES;
use crate::types::Emoji;

/// Finds emoji characters in raw post text.
pub struct EmojiExtractor {
    ranges: &'static [(u32, u32)],
}

impl EmojiExtractor {
    pub fn new() -> Self {
        EmojiExtractor {
            ranges: EMOJI_RANGES,
        }
    }

    pub fn is_emoji(&self, c: char) -> bool {
        let code = c as u32;
        self.ranges
            .iter()
            .any(|&(start, end)| code >= start && code <= end)
    }

    /// Returns every recognized emoji in left-to-right order, duplicates included.
    ///
    /// Characters are checked one at a time, so multi-codepoint sequences
    /// (flags, ZWJ families) contribute each recognized component separately.
    pub fn extract(&self, text: &str) -> Vec<Emoji> {
        text.chars().filter(|c| self.is_emoji(*c)).collect()
    }
}

impl Default for EmojiExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keeps_order_and_duplicates() {
        let extractor = EmojiExtractor::new();

        assert_eq!(
            extractor.extract("Vote 🇺🇸 now 😂😂 🔥 ok"),
            vec!['🇺', '🇸', '😂', '😂', '🔥']
        );
    }

    #[test]
    fn test_extract_ignores_plain_text() {
        let extractor = EmojiExtractor::new();

        assert!(extractor.extract("No emoji here: #hope, @user, 100%").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_symbol_blocks() {
        let extractor = EmojiExtractor::new();

        assert!(extractor.is_emoji('❤'));
        assert!(extractor.is_emoji('⭐'));
        assert!(!extractor.is_emoji('\u{FE0F}'));
        assert!(!extractor.is_emoji('a'));
    }
}
