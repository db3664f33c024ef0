// Text analysis: sentence segmentation and keyword vocabulary extraction.

pub mod keywords;
pub mod sentences;
pub mod stopwords;
pub mod traits;

/// Take at most `max_chars` characters from `text`.
///
/// Slices on character boundaries, so multi-byte text never panics.
pub fn take_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Uppercase the first character and lowercase the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
