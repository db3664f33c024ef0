// Fill-in-the-blank quiz generation.
//
// For each sentence containing at least one keyword, one of those keywords is
// blanked out and offered alongside randomly sampled keywords as
// multiple-choice options. All randomness comes from the caller's RNG so a
// seeded generator reproduces the same quiz.

use rand::seq::{index, IndexedRandom, SliceRandom};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::capitalize;
use crate::text::keywords::Vocabulary;

/// Marker that replaces the answer in the question text.
pub const BLANK: &str = "______";

/// Options per question, when the vocabulary has that many keywords.
pub const MAX_OPTIONS: usize = 4;

/// A multiple-choice question with a single blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizQuestion {
    /// The source sentence with one keyword occurrence replaced by `BLANK`
    pub question: String,
    /// Rendered options, e.g. `"A) Enzyme"`
    pub options: Vec<String>,
    /// Letter of the correct option
    pub correct: String,
}

impl QuizQuestion {
    /// Index of the correct option in `options`.
    pub fn correct_index(&self) -> Option<usize> {
        let letter = self.correct.chars().next()?;
        let index = (letter as usize).checked_sub('A' as usize)?;
        (index < self.options.len()).then_some(index)
    }

    /// The option text after its `"X) "` label.
    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index)?.split_once(") ").map(|(_, text)| text)
    }
}

/// Build up to `n` questions from sentences in document order.
pub fn generate_questions<R: Rng + ?Sized>(
    sentences: &[String],
    vocab: &Vocabulary,
    n: usize,
    rng: &mut R,
) -> Vec<QuizQuestion> {
    let keywords: Vec<&str> = vocab.keywords().collect();
    let mut quizzes = Vec::new();

    for sentence in sentences {
        if quizzes.len() >= n {
            break;
        }

        let lower = sentence.to_lowercase();
        let hits: Vec<&str> = keywords
            .iter()
            .copied()
            .filter(|k| lower.contains(k))
            .collect();

        let Some(&answer) = hits.choose(rng) else {
            continue;
        };
        let Some(question) = blank_first(sentence, answer) else {
            continue;
        };

        let options = pick_options(&keywords, answer, rng);
        let Some(correct) = options.iter().position(|o| *o == answer) else {
            continue;
        };

        quizzes.push(QuizQuestion {
            question,
            options: options
                .iter()
                .enumerate()
                .map(|(i, o)| format!("{}) {}", option_label(i), capitalize(o)))
                .collect(),
            correct: option_label(correct).to_string(),
        });
    }

    debug!(
        sentences = sentences.len(),
        questions = quizzes.len(),
        "Generated quiz questions"
    );

    quizzes
}

/// Replace the first occurrence of `keyword` in `sentence` with `BLANK`.
///
/// Prefers an exact-case match. When the keyword only appears with other
/// casing (say, capitalized at the start of the sentence) the first
/// case-insensitive occurrence is blanked instead. Keywords are ASCII, so
/// ASCII lowercasing keeps byte offsets aligned with the original.
pub fn blank_first(sentence: &str, keyword: &str) -> Option<String> {
    let start = sentence
        .find(keyword)
        .or_else(|| sentence.to_ascii_lowercase().find(keyword))?;
    let end = start + keyword.len();
    Some(format!("{}{}{}", &sentence[..start], BLANK, &sentence[end..]))
}

/// Sample `min(MAX_OPTIONS, |keywords|)` distinct keywords and make sure the
/// answer is among them.
///
/// When the sample misses the answer it overwrites the first sampled option
/// rather than resampling, then the whole set is shuffled.
fn pick_options<'a, R: Rng + ?Sized>(
    keywords: &[&'a str],
    answer: &'a str,
    rng: &mut R,
) -> Vec<&'a str> {
    let amount = keywords.len().min(MAX_OPTIONS);
    let mut options: Vec<&str> = index::sample(rng, keywords.len(), amount)
        .iter()
        .map(|i| keywords[i])
        .collect();

    if !options.contains(&answer) {
        if let Some(first) = options.first_mut() {
            *first = answer;
        }
    }

    options.shuffle(rng);
    options
}

fn option_label(index: usize) -> char {
    char::from(b'A' + index as u8)
}
