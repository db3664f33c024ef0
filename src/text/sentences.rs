// Sentence segmentation.
//
// Splits raw text on runs of terminal punctuation and keeps only pieces long
// enough to carry a statement. Order is document order; the summarizer's
// positional score depends on it.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Sentences must be strictly longer than this many characters after trimming.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// One or more consecutive `.`, `!`, or `?` act as a single delimiter.
static DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("sentence delimiter pattern is valid"));

/// Split text into trimmed sentences longer than `MIN_SENTENCE_CHARS`.
pub fn segment(text: &str) -> Vec<String> {
    DELIMITER
        .split(text)
        .map(str::trim)
        .filter(|s| s.chars().count() > MIN_SENTENCE_CHARS)
        .map(str::to_string)
        .collect()
}
