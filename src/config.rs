use std::env;

use anyhow::{Context, Result};

/// Output sizes and vocabulary limits for the text pipeline.
///
/// Immutable once built; each pipeline binds its own copy at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Sentences kept in the extractive summary (default 8)
    pub summary_sentences: usize,
    /// Maximum quiz questions generated (default 12)
    pub quiz_questions: usize,
    /// Maximum flashcards generated (default 12)
    pub flashcards: usize,
    /// Most-frequent words considered for the vocabulary (default 40)
    pub max_keywords: usize,
    /// Minimum occurrences for a word to become a keyword (default 3)
    pub min_keyword_count: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            summary_sentences: 8,
            quiz_questions: 12,
            flashcards: 12,
            max_keywords: 40,
            min_keyword_count: 3,
        }
    }
}

/// Limits applied to source text before it reaches the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLimits {
    /// Pages read from the source, at most (default 200)
    pub max_pages: usize,
    /// Reading stops once this many characters are collected (default 300,000)
    pub max_chars: usize,
    /// Text shorter than this is rejected as insufficient (default 1000)
    pub min_chars: usize,
}

impl Default for SourceLimits {
    fn default() -> Self {
        Self {
            max_pages: 200,
            max_chars: 300_000,
            min_chars: 1000,
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// Every value has a default. The .env file is loaded automatically at
/// startup via dotenvy.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub pipeline: PipelineConfig,
    pub limits: SourceLimits,
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset.
    pub fn load() -> Result<Self> {
        let pipeline_defaults = PipelineConfig::default();
        let limit_defaults = SourceLimits::default();

        Ok(Self {
            pipeline: PipelineConfig {
                summary_sentences: env_usize(
                    "STUDYPACK_SUMMARY_SENTENCES",
                    pipeline_defaults.summary_sentences,
                )?,
                quiz_questions: env_usize(
                    "STUDYPACK_QUIZ_QUESTIONS",
                    pipeline_defaults.quiz_questions,
                )?,
                flashcards: env_usize("STUDYPACK_FLASHCARDS", pipeline_defaults.flashcards)?,
                ..pipeline_defaults
            },
            limits: SourceLimits {
                max_pages: env_usize("STUDYPACK_MAX_PAGES", limit_defaults.max_pages)?,
                max_chars: env_usize("STUDYPACK_MAX_CHARS", limit_defaults.max_chars)?,
                min_chars: env_usize("STUDYPACK_MIN_CHARS", limit_defaults.min_chars)?,
            },
        })
    }
}

/// Read a non-negative integer from the environment, or use the default when unset.
fn env_usize(name: &str, default: usize) -> Result<usize> {
    match env::var(name) {
        Ok(raw) => parse_usize(name, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_usize(name: &str, raw: &str) -> Result<usize> {
    raw.trim()
        .parse()
        .with_context(|| format!("{name} must be a non-negative integer, got {raw:?}"))
}
