/// Full U.S. state names (title-cased) mapped to their two-letter postal codes.
pub static US_STATE_CODES: [(&str, &str); 50] = [
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

/// Misspellings of "unknown" observed in the location columns of the election dataset.
pub const DEFAULT_UNKNOWN_SENTINELS: &[&str] = &["unknown", "unkown", "unknwn", "unlown", "unknownn"];

/// The canonical textual timestamp format of the `created_at` column.
pub const CANONICAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Fallback timestamp formats tried, in order, after the canonical one.
pub const FALLBACK_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Inclusive Unicode scalar ranges treated as emoji characters.
///
/// Covers the pictographic blocks plus the older symbol blocks whose members
/// commonly render as emoji. Variation selectors, ZWJ and skin tone modifiers
/// are left out; only visible glyphs are counted.
pub const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F300, 0x1F5FF), // Misc symbols and pictographs
    (0x1F600, 0x1F64F), // Emoticons
    (0x1F680, 0x1F6FF), // Transport and map
    (0x1F900, 0x1F9FF), // Supplemental symbols and pictographs
    (0x1FA70, 0x1FAFF), // Symbols and pictographs extended-A
    (0x1F1E6, 0x1F1FF), // Regional indicators
    (0x1F004, 0x1F004), // Mahjong red dragon
    (0x1F0CF, 0x1F0CF), // Joker
    (0x2600, 0x26FF),   // Misc symbols
    (0x2700, 0x27BF),   // Dingbats
    (0x2B50, 0x2B50),   // Star
    (0x2B55, 0x2B55),   // Heavy circle
    (0x231A, 0x231B),   // Watch, hourglass
    (0x23E9, 0x23F3),   // Media controls
    (0x203C, 0x203C),   // Double exclamation
    (0x2049, 0x2049),   // Exclamation question
];

/// Words ignored when counting words for word clouds.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "amp", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "else", "ever", "few", "for", "from", "further", "get", "had", "has", "have", "having", "he",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "however", "http", "https",
    "i", "if", "in", "into", "is", "it", "its", "itself", "just", "like", "me", "more", "most",
    "my", "myself", "no", "nor", "not", "of", "off", "on", "once", "only", "or", "other", "otherwise",
    "ought", "our", "ours", "ourselves", "out", "over", "own", "r", "same", "shall", "she",
    "should", "since", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "with", "would", "www", "you", "your", "yours", "yourself",
    "yourselves", "com",
];

/// Default location of the election dataset, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data/twitter_cleaned_data.csv";
