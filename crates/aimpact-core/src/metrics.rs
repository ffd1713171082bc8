//! Descriptive text statistics.
//!
//! [`analyze`] computes word, sentence, and paragraph counts, reading time,
//! a word-list sentiment verdict, a sentence-length readability score, and
//! the most frequent keywords. It never fails: any string, including the
//! empty one, yields a well-formed [`AnalysisResult`].
//!
//! Readability score: `clamp(100 - (words / sentences) * 2, 0, 100)`.
//! Text with no sentences scores 100.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::keywords::{self, DEFAULT_KEYWORD_LIMIT};
use crate::sentiment::{self, Sentiment};
use crate::text;

/// Reading speed used for [`AnalysisResult::reading_time`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Score assigned when the text has no sentences to average over.
pub const EMPTY_READABILITY_SCORE: f64 = 100.0;

/// Statistics for one block of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Whitespace-delimited tokens.
    pub word_count: usize,
    /// Length of the raw input in UTF-16 code units, so characters outside
    /// the Basic Multilingual Plane count as two.
    pub character_count: usize,
    /// Non-empty segments between runs of `.`, `!`, `?`.
    pub sentence_count: usize,
    /// Non-empty blank-line separated blocks, never less than 1.
    pub paragraph_count: usize,
    /// Estimated minutes to read, rounded up.
    pub reading_time: usize,
    /// Word-list sentiment verdict.
    pub sentiment: Sentiment,
    /// Sentence-length readability, 0 (hard) to 100 (easy).
    pub readability_score: f64,
    /// Up to five most frequent keywords, most frequent first.
    pub key_words: Vec<String>,
}

impl AnalysisResult {
    /// Band for this result's readability score.
    pub fn readability_band(&self) -> ReadabilityBand {
        ReadabilityBand::from_score(self.readability_score)
    }
}

/// Coarse grouping of readability scores for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilityBand {
    /// Score of 80 or more.
    Good,
    /// Score of 60 up to 80.
    Fair,
    /// Score below 60.
    Poor,
}

impl ReadabilityBand {
    /// Classify a readability score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Good
        } else if score >= 60.0 {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Returns the band as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }
}

impl std::fmt::Display for ReadabilityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Analyze a block of text.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> AnalysisResult {
    let words = text::split_words(text);
    let sentence_count = text::split_sentences(text).len();
    let paragraph_count = text::split_paragraphs(text).len().max(1);
    let word_count = words.len();

    let result = AnalysisResult {
        word_count,
        character_count: text.encode_utf16().count(),
        sentence_count,
        paragraph_count,
        reading_time: reading_time(word_count),
        sentiment: sentiment::classify(text),
        readability_score: readability_score(word_count, sentence_count),
        key_words: keywords::extract_keywords(&words, DEFAULT_KEYWORD_LIMIT),
    };

    tracing::debug!(
        words = result.word_count,
        sentences = result.sentence_count,
        sentiment = %result.sentiment,
        "text analyzed"
    );
    result
}

/// Minutes to read `word_count` words, rounded up. Zero words is zero minutes.
pub const fn reading_time(word_count: usize) -> usize {
    word_count.div_ceil(WORDS_PER_MINUTE)
}

/// Sentence-length readability score, clamped to `[0, 100]`.
pub fn readability_score(word_count: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        return EMPTY_READABILITY_SCORE;
    }
    let words_per_sentence = word_count as f64 / sentence_count as f64;
    2.0f64
        .mul_add(-words_per_sentence, 100.0)
        .clamp(0.0, 100.0)
}
