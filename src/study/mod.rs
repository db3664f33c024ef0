// Study artifacts: summary, quiz, and flashcards built from a shared
// sentence list and keyword vocabulary.

pub mod flashcards;
pub mod pack;
pub mod quiz;
pub mod summary;
