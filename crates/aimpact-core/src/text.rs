//! Text splitting utilities.
//!
//! Provides the word, sentence, and paragraph splitting used by
//! [`crate::metrics`]. Splitting is deliberately naive: sentences end at any
//! run of `.`, `!`, or `?` with no abbreviation or decimal handling.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of sentence terminators.
static SENTENCE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// A newline, optional whitespace, then another newline.
static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex"));

/// Split text into whitespace-delimited tokens, dropping empty ones.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Split text into sentences on runs of `.`, `!`, `?`.
///
/// Segments that are empty or whitespace only are dropped. Returned slices
/// are not trimmed.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_BREAK
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// Split text into paragraphs separated by blank lines.
///
/// A blank line may contain whitespace. Empty segments are dropped, so the
/// result can be empty; callers that need a floor apply it themselves.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|p| !p.trim().is_empty())
        .collect()
}
