// Definition-style flashcards.
//
// One card per keyword, in vocabulary rank order. The back of the card is the
// first sentence that reads like a definition of the keyword ("X is ...",
// "X refers to ..."), or failing that the first mid-length sentence that
// mentions it at all. Keywords with neither are skipped.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::keywords::Vocabulary;
use crate::text::{capitalize, take_chars};

/// Phrases that, directly after a keyword, mark a definition sentence.
pub const DEFINITION_CONNECTIVES: &[&str] = &[" is", " refers to", " means", " can be defined"];

/// Longest card back, in characters.
pub const BACK_MAX_CHARS: usize = 300;

/// Exclusive character-length window for fallback sentences.
pub const FALLBACK_MIN_CHARS: usize = 40;
pub const FALLBACK_MAX_CHARS: usize = 200;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The capitalized keyword
    pub front: String,
    /// The explaining sentence, at most `BACK_MAX_CHARS` characters
    pub back: String,
}

/// Build up to `n` flashcards, one per keyword at most.
pub fn generate_cards(sentences: &[String], vocab: &Vocabulary, n: usize) -> Vec<Flashcard> {
    let lowered: Vec<String> = sentences.iter().map(|s| s.to_lowercase()).collect();
    let mut cards = Vec::new();
    let mut used: HashSet<&str> = HashSet::new();

    for keyword in vocab.keywords() {
        if cards.len() >= n {
            break;
        }
        if used.contains(keyword) {
            continue;
        }

        let found = find_definition(&lowered, keyword)
            .or_else(|| find_explanation(sentences, &lowered, keyword));
        let Some(index) = found else {
            debug!(keyword, "No explaining sentence, skipping keyword");
            continue;
        };

        cards.push(Flashcard {
            front: capitalize(keyword),
            back: take_chars(sentences[index].trim(), BACK_MAX_CHARS).to_string(),
        });
        used.insert(keyword);
    }

    debug!(
        keywords = vocab.len(),
        cards = cards.len(),
        "Generated flashcards"
    );

    cards
}

/// Does this lowercase sentence contain `keyword` followed directly by a
/// definition connective?
pub fn is_definition(lower: &str, keyword: &str) -> bool {
    lower.contains(keyword)
        && DEFINITION_CONNECTIVES
            .iter()
            .any(|c| lower.contains(&format!("{keyword}{c}")))
}

/// Position of the first definition sentence for `keyword`.
fn find_definition(lowered: &[String], keyword: &str) -> Option<usize> {
    lowered.iter().position(|lower| is_definition(lower, keyword))
}

/// Position of the first sentence mentioning `keyword` whose length falls
/// strictly inside the fallback window.
fn find_explanation(sentences: &[String], lowered: &[String], keyword: &str) -> Option<usize> {
    sentences
        .iter()
        .zip(lowered)
        .position(|(sentence, lower)| {
            let len = sentence.chars().count();
            lower.contains(keyword) && len > FALLBACK_MIN_CHARS && len < FALLBACK_MAX_CHARS
        })
}
