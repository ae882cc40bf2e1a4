
// Types listed here are either shared across multiple files and/or exposed via the library.

/// Identifier of a post, unique within a single dataset load.
pub type PostId = String;

/// The subject a post is about (e.g. "biden" or "trump"), stored case-folded.
pub type Entity = String;

/// Identifier of the account that authored a post.
pub type AuthorId = String;

/// A hashtag as found in the cleaned text, lowercased and without the leading `#`.
pub type Hashtag = String;

/// A single recognized emoji character.
pub type Emoji = char;

/// A continuous sentiment score in the range `[-1.0, 1.0]`.
pub type Polarity = f64;

/// Represents the total number of occurrences of an item within a frequency scan.
pub type ItemFrequency = usize;

/// An inclusive `(start, end)` calendar date range.
pub type DateRange = (chrono::NaiveDate, chrono::NaiveDate);
