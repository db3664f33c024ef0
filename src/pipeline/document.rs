// Document: the shared, read-only analysis every generator works from.

use tracing::info;

use crate::text::keywords::Vocabulary;
use crate::text::sentences;
use crate::text::traits::KeywordExtractor;

/// Sentences and keyword vocabulary of one document text.
///
/// Built once per text and only ever borrowed immutably, so the generators
/// can run in any order, or in parallel, against the same analysis.
#[derive(Debug, Clone, Default)]
pub struct Document {
    sentences: Vec<String>,
    vocabulary: Vocabulary,
}

impl Document {
    /// Segment the text and extract its vocabulary.
    pub fn analyze(text: &str, extractor: &dyn KeywordExtractor) -> Self {
        let sentences = sentences::segment(text);
        let vocabulary = extractor.extract(text);

        info!(
            chars = text.chars().count(),
            sentences = sentences.len(),
            keywords = vocabulary.len(),
            "Analyzed document text"
        );

        Self {
            sentences,
            vocabulary,
        }
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::keywords::FrequencyExtractor;

    #[test]
    fn test_analyze_shares_one_snapshot() {
        let text = "Neurons transmit signals through synapses. \
                    Neurons release neurotransmitters at synapses! \
                    Glial cells support neurons and synapses in the brain?";
        let doc = Document::analyze(text, &FrequencyExtractor::default());
        assert_eq!(doc.sentences().len(), 3);
        assert_eq!(
            doc.vocabulary().keywords().collect::<Vec<_>>(),
            vec!["neurons", "synapses"]
        );
    }

    #[test]
    fn test_analyze_empty_text() {
        let doc = Document::analyze("", &FrequencyExtractor::default());
        assert!(doc.sentences().is_empty());
        assert!(doc.vocabulary().is_empty());
    }
}
