// Extractive summary.
//
// Each sentence gets a positional score that favors the start of the document,
// plus a bonus of 2 for every distinct keyword it contains as a whole word.
// The top `n` sentences are returned in document order, never score order.

use std::collections::HashSet;

use tracing::debug;

use crate::text::keywords::Vocabulary;

/// Score bonus per distinct keyword found in a sentence.
pub const KEYWORD_BONUS: f64 = 2.0;

/// A sentence with its summary score and its position in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence<'a> {
    pub score: f64,
    pub index: usize,
    pub sentence: &'a str,
}

/// Select up to `n` sentences as a space-joined extractive summary.
///
/// With `n` or fewer sentences there is nothing to choose, so all of them are
/// returned unscored.
pub fn summarize_sentences(sentences: &[String], vocab: &Vocabulary, n: usize) -> String {
    if sentences.len() <= n {
        return sentences.join(" ");
    }

    let mut scored = score_sentences(sentences, vocab);

    // Highest score first. Equal scores fall back to the sentence text,
    // descending, then position, so the ranking is deterministic.
    scored.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.sentence.cmp(a.sentence))
            .then_with(|| a.index.cmp(&b.index))
    });

    let mut selected: Vec<usize> = scored.iter().take(n).map(|s| s.index).collect();
    selected.sort_unstable();

    debug!(
        sentences = sentences.len(),
        selected = selected.len(),
        "Selected summary sentences"
    );

    selected
        .iter()
        .map(|&i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Score every sentence: `(L - i) / L` for position `i` of `L`, plus
/// `KEYWORD_BONUS` per distinct whitespace-separated lowercase word that is a
/// keyword.
pub fn score_sentences<'a>(sentences: &'a [String], vocab: &Vocabulary) -> Vec<ScoredSentence<'a>> {
    let keywords: HashSet<&str> = vocab.keywords().collect();
    let total = sentences.len() as f64;

    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| {
            let positional = (total - i as f64) / total;
            let lower = sentence.to_lowercase();
            let words: HashSet<&str> = lower.split_whitespace().collect();
            let overlap = words.iter().filter(|w| keywords.contains(*w)).count();
            ScoredSentence {
                score: positional + KEYWORD_BONUS * overlap as f64,
                index: i,
                sentence: sentence.as_str(),
            }
        })
        .collect()
}
