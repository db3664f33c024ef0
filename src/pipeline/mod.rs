// Pipeline: turn document text into a StudyPack.
//
// The text is segmented and its vocabulary extracted exactly once; the
// summarizer, quiz generator, and flashcard generator then each read that
// shared Document independently. None of the stages can fail: text without
// usable sentences or keywords simply produces empty artifacts.

pub mod document;

use rand::Rng;
use tracing::info;

pub use document::Document;

use crate::config::PipelineConfig;
use crate::study::flashcards::{self, Flashcard};
use crate::study::pack::StudyPack;
use crate::study::quiz::{self, QuizQuestion};
use crate::study::summary;
use crate::text::keywords::{self, FrequencyExtractor};
use crate::text::sentences;
use crate::text::traits::KeywordExtractor;

/// The configured text-to-study-pack pipeline.
pub struct Pipeline {
    config: PipelineConfig,
    extractor: Box<dyn KeywordExtractor>,
}

impl Pipeline {
    /// Build a pipeline with the frequency extractor sized from the config.
    pub fn new(config: PipelineConfig) -> Self {
        let extractor = FrequencyExtractor::new(config.max_keywords, config.min_keyword_count);
        Self::with_extractor(config, Box::new(extractor))
    }

    /// Build a pipeline around a different keyword extractor.
    pub fn with_extractor(config: PipelineConfig, extractor: Box<dyn KeywordExtractor>) -> Self {
        Self { config, extractor }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Segment and extract keywords once.
    pub fn analyze(&self, text: &str) -> Document {
        Document::analyze(text, self.extractor.as_ref())
    }

    /// Produce all three artifacts for `text`. The RNG only drives the quiz.
    pub fn run<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> StudyPack {
        let doc = self.analyze(text);
        self.build(&doc, rng)
    }

    /// Produce all three artifacts from an existing analysis.
    pub fn build<R: Rng + ?Sized>(&self, doc: &Document, rng: &mut R) -> StudyPack {
        let summary = summary::summarize_sentences(
            doc.sentences(),
            doc.vocabulary(),
            self.config.summary_sentences,
        );
        let quizzes = quiz::generate_questions(
            doc.sentences(),
            doc.vocabulary(),
            self.config.quiz_questions,
            rng,
        );
        let flashcards =
            flashcards::generate_cards(doc.sentences(), doc.vocabulary(), self.config.flashcards);

        info!(
            summary_chars = summary.chars().count(),
            quizzes = quizzes.len(),
            flashcards = flashcards.len(),
            "Built study pack"
        );

        StudyPack {
            summary,
            quizzes,
            flashcards,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

// Single-artifact entry points with the default vocabulary limits. Each one
// analyzes the text on its own; use `Pipeline` to share one analysis.

/// Split text into sentences longer than 20 characters.
pub fn segment(text: &str) -> Vec<String> {
    sentences::segment(text)
}

/// Ranked keywords of the text.
pub fn extract_keywords(text: &str) -> Vec<String> {
    keywords::extract_keywords(text)
}

/// Extractive summary of at most `n` sentences.
pub fn summarize(text: &str, n: usize) -> String {
    let doc = Pipeline::default().analyze(text);
    summary::summarize_sentences(doc.sentences(), doc.vocabulary(), n)
}

/// Up to `n` fill-in-the-blank questions.
pub fn generate_quiz<R: Rng + ?Sized>(text: &str, n: usize, rng: &mut R) -> Vec<QuizQuestion> {
    let doc = Pipeline::default().analyze(text);
    quiz::generate_questions(doc.sentences(), doc.vocabulary(), n, rng)
}

/// Up to `n` definition flashcards.
pub fn generate_flashcards(text: &str, n: usize) -> Vec<Flashcard> {
    let doc = Pipeline::default().analyze(text);
    flashcards::generate_cards(doc.sentences(), doc.vocabulary(), n)
}
