// Colored terminal output for study packs and keyword vocabularies.
//
// main.rs delegates all terminal formatting here; the JSON output path
// bypasses this module entirely.

use colored::Colorize;

use crate::study::flashcards::Flashcard;
use crate::study::pack::StudyPack;
use crate::study::quiz::QuizQuestion;
use crate::text::keywords::Vocabulary;

/// Display a full study pack: summary, quiz, then flashcards.
pub fn display_study_pack(pack: &StudyPack) {
    println!("\n{}", "=== Summary ===".bold());
    println!();
    if pack.summary.is_empty() {
        println!("  {}", "No sentences long enough to summarize.".dimmed());
    } else {
        println!("  {}", pack.summary);
    }

    display_quiz(&pack.quizzes);
    display_flashcards(&pack.flashcards);
}

/// Display quiz questions with the correct option highlighted.
pub fn display_quiz(quizzes: &[QuizQuestion]) {
    println!(
        "\n{}",
        format!("=== Quiz ({} questions) ===", quizzes.len()).bold()
    );
    println!();

    if quizzes.is_empty() {
        println!("  {}", "No sentences mention a keyword.".dimmed());
        return;
    }

    for (i, quiz) in quizzes.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, quiz.question);
        let correct = quiz.correct_index();
        for (j, option) in quiz.options.iter().enumerate() {
            if Some(j) == correct {
                println!("      {}", option.bright_green());
            } else {
                println!("      {}", option.dimmed());
            }
        }
        println!();
    }
}

/// Display flashcards as front / back pairs.
pub fn display_flashcards(cards: &[Flashcard]) {
    println!(
        "\n{}",
        format!("=== Flashcards ({} cards) ===", cards.len()).bold()
    );
    println!();

    if cards.is_empty() {
        println!("  {}", "No keyword has an explaining sentence.".dimmed());
        return;
    }

    for card in cards {
        println!("  {}", card.front.bold().bright_blue());
        println!("      {}", card.back);
        println!();
    }
}

/// Display the keyword vocabulary as a bar chart of counts.
pub fn display_vocabulary(vocab: &Vocabulary) {
    println!(
        "\n{}",
        format!("=== Keywords ({} terms) ===", vocab.len()).bold()
    );
    println!();

    let Some(max_count) = vocab.terms().iter().map(|(_, c)| *c).max() else {
        println!("  {}", "No words survived stopword and frequency filtering.".dimmed());
        return;
    };

    let bar_width: usize = 20;

    for (i, (word, count)) in vocab.terms().iter().enumerate() {
        let ratio = *count as f64 / max_count as f64;
        let filled = (ratio * bar_width as f64).round() as usize;
        let empty = bar_width.saturating_sub(filled);
        let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

        // Color the bar by relative frequency
        let colored_bar = if ratio >= 0.5 {
            bar.bright_green()
        } else if ratio >= 0.25 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!("  {:>2}. {:<24} {} {}", i + 1, word.bold(), colored_bar, count);
    }
    println!();
}
