//! Word-list sentiment scoring.
//!
//! Matching is unanchored: a listed word counts wherever it appears as a
//! substring of the lowercased text, so "sad" inside "sadly" is a hit. That
//! over-counts compared to whole-word matching and is a known imprecision of
//! the heuristic.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::word_lists::{NEGATIVE_WORDS, POSITIVE_WORDS};

/// Coarse sentiment of a text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// More positive than negative word hits.
    Positive,
    /// Equal hits, including none at all.
    #[default]
    Neutral,
    /// More negative than positive word hits.
    Negative,
}

impl Sentiment {
    /// Returns the sentiment as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hit counts behind a [`Sentiment`] verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SentimentScore {
    /// Total occurrences of positive list words.
    pub positive: usize,
    /// Total occurrences of negative list words.
    pub negative: usize,
}

impl SentimentScore {
    /// The verdict for these counts. Ties are neutral.
    pub fn sentiment(&self) -> Sentiment {
        match self.positive.cmp(&self.negative) {
            std::cmp::Ordering::Greater => Sentiment::Positive,
            std::cmp::Ordering::Less => Sentiment::Negative,
            std::cmp::Ordering::Equal => Sentiment::Neutral,
        }
    }
}

/// Count positive and negative word occurrences in `text`.
pub fn score(text: &str) -> SentimentScore {
    let lower = text.to_lowercase();
    SentimentScore {
        positive: count_hits(&lower, POSITIVE_WORDS),
        negative: count_hits(&lower, NEGATIVE_WORDS),
    }
}

/// Classify `text` as positive, neutral, or negative.
pub fn classify(text: &str) -> Sentiment {
    score(text).sentiment()
}

fn count_hits(haystack: &str, words: &[&str]) -> usize {
    words.iter().map(|w| haystack.matches(w).count()).sum()
}
