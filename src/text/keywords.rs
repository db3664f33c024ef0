// Frequency-ranked keyword vocabulary.
//
// The vocabulary is the only "semantic" signal the generators use. It is a
// plain frequency count over lowercase alphabetic words with stopwords
// removed, cut to the most frequent words and then to words seen more than
// twice. The cut happens in that order: the count threshold is applied to the
// top-ranked words, not to the whole vocabulary.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::stopwords;
use super::traits::KeywordExtractor;

/// Shortest word, in letters, that can become a keyword.
pub const MIN_WORD_LEN: usize = 3;

/// A ranked keyword vocabulary: unique lowercase words with their counts,
/// ordered by count descending, ties in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<(String, usize)>,
}

impl Vocabulary {
    /// Build a vocabulary from already-ranked `(word, count)` pairs.
    pub fn from_ranked(terms: Vec<(String, usize)>) -> Self {
        Self { terms }
    }

    /// Keywords in rank order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(w, _)| w.as_str())
    }

    /// Keywords paired with their occurrence counts, in rank order.
    pub fn terms(&self) -> &[(String, usize)] {
        &self.terms
    }

    pub fn contains(&self, word: &str) -> bool {
        self.terms.iter().any(|(w, _)| w == word)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Frequency-based keyword extractor.
///
/// Counts every non-stopword token, keeps the `max_keywords` most frequent,
/// then drops any of those seen fewer than `min_count` times.
pub struct FrequencyExtractor {
    /// How many top-ranked words survive the first cut
    pub max_keywords: usize,
    /// Minimum occurrences for a top-ranked word to become a keyword
    pub min_count: usize,
    stopwords: HashSet<&'static str>,
}

impl FrequencyExtractor {
    pub fn new(max_keywords: usize, min_count: usize) -> Self {
        Self {
            max_keywords,
            min_count,
            stopwords: stopwords::ENGLISH.iter().copied().collect(),
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }
}

impl Default for FrequencyExtractor {
    fn default() -> Self {
        Self::new(40, 3)
    }
}

impl KeywordExtractor for FrequencyExtractor {
    fn extract(&self, text: &str) -> Vocabulary {
        let lower = text.to_lowercase();

        // Count in first-seen order so the stable sort below keeps ties in
        // the order the words first appeared.
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        for word in words(&lower).filter(|w| !self.is_stopword(w)) {
            match index.get(word) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(word, counts.len());
                    counts.push((word.to_string(), 1));
                }
            }
        }

        let distinct = counts.len();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(self.max_keywords);
        counts.retain(|(_, c)| *c >= self.min_count);

        debug!(
            distinct_words = distinct,
            keywords = counts.len(),
            "Extracted keyword vocabulary"
        );

        Vocabulary::from_ranked(counts)
    }
}

/// Iterate the word tokens of lowercase text.
///
/// A token is a maximal run of word characters (alphanumeric or `_`) made up
/// entirely of ASCII letters and at least `MIN_WORD_LEN` long. Runs that mix
/// in digits or other letters, like `abc123` or `café`, are not tokens.
pub fn words(lower: &str) -> impl Iterator<Item = &str> {
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|w| w.len() >= MIN_WORD_LEN && w.bytes().all(|b| b.is_ascii_alphabetic()))
}

/// Extract the keyword vocabulary with the default limits.
pub fn extract_keywords(text: &str) -> Vec<String> {
    FrequencyExtractor::default()
        .extract(text)
        .keywords()
        .map(str::to_string)
        .collect()
}
