//! Keyword extraction by raw frequency.

use std::collections::HashMap;

/// Default number of keywords reported by [`crate::metrics::analyze`].
pub const DEFAULT_KEYWORD_LIMIT: usize = 5;

/// Tokens must be longer than this (after cleaning) to count.
const MIN_KEYWORD_LEN: usize = 3;

/// Lowercase a token and drop everything but ASCII letters and digits.
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Return up to `limit` most frequent cleaned tokens, most frequent first.
///
/// Tokens of 3 characters or fewer after cleaning are ignored. Equal counts
/// keep first-seen order.
#[tracing::instrument(skip_all, fields(tokens = tokens.len(), limit = limit))]
pub fn extract_keywords(tokens: &[&str], limit: usize) -> Vec<String> {
    // (word, count) in first-seen order, with an index for O(1) lookup
    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokens {
        let cleaned = clean_token(token);
        if cleaned.len() <= MIN_KEYWORD_LEN {
            continue;
        }
        if let Some(&i) = index.get(&cleaned) {
            entries[i].1 += 1;
        } else {
            index.insert(cleaned.clone(), entries.len());
            entries.push((cleaned, 1));
        }
    }

    // sort_by is stable: ties stay in first-seen order
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    entries
        .into_iter()
        .take(limit)
        .map(|(word, _)| word)
        .collect()
}
