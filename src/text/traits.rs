// Keyword extractor trait: swap-ready abstraction.
//
// The generators only see a `Vocabulary`, so the frequency heuristic can be
// replaced without touching the summarizer, quiz, or flashcard code.

use super::keywords::Vocabulary;

/// Trait for deriving a ranked keyword vocabulary from document text.
pub trait KeywordExtractor {
    /// Analyze the text and produce its keyword vocabulary. Never fails:
    /// text with no surviving words yields an empty vocabulary.
    fn extract(&self, text: &str) -> Vocabulary;
}
