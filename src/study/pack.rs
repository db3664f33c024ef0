// StudyPack: the three artifacts produced from one document.

use serde::{Deserialize, Serialize};

use super::flashcards::Flashcard;
use super::quiz::QuizQuestion;

/// Summary, quiz, and flashcards derived from the same document text.
///
/// Serializes to `{"summary": ..., "quizzes": [...], "flashcards": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPack {
    pub summary: String,
    pub quizzes: Vec<QuizQuestion>,
    pub flashcards: Vec<Flashcard>,
}
