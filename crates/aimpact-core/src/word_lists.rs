//! Fixed word lists for sentiment scoring.
//!
//! Order matters only for readability; scoring sums occurrences across each
//! list.

/// Words that push sentiment positive.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "amazing",
    "wonderful",
    "fantastic",
    "love",
    "best",
    "awesome",
    "perfect",
];

/// Words that push sentiment negative.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "awful",
    "hate",
    "worst",
    "horrible",
    "disappointing",
    "poor",
    "sad",
    "angry",
];
