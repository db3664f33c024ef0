// Source text acquisition.
//
// Reads page-separated plain text (form feeds between pages, as `pdftotext`
// emits) and applies the page and character caps before the text reaches the
// pipeline. The minimum-length check lives here too: callers reject short
// text up front, the pipeline itself never does.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::config::SourceLimits;

/// Page separator in extracted text.
pub const PAGE_BREAK: char = '\x0c';

/// Collect pages from `raw` until either cap is reached.
///
/// Blank pages are skipped and don't count toward the character cap. The page
/// that crosses `max_chars` is kept whole; reading stops after it. Kept pages
/// are joined with a single space.
pub fn read_pages(raw: &str, limits: &SourceLimits) -> String {
    let mut pages: Vec<&str> = Vec::new();
    let mut char_count = 0;

    for (i, page) in raw.split(PAGE_BREAK).enumerate() {
        if i >= limits.max_pages {
            info!(max_pages = limits.max_pages, "Page cap reached");
            break;
        }
        if page.trim().is_empty() {
            continue;
        }

        pages.push(page);
        char_count += page.chars().count();

        if char_count >= limits.max_chars {
            info!(chars = char_count, max_chars = limits.max_chars, "Character cap reached");
            break;
        }
    }

    pages.join(" ")
}

/// Read a UTF-8 text file and apply the source caps.
pub fn load_text(path: &Path, limits: &SourceLimits) -> Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read text from {}", path.display()))?;
    Ok(read_pages(&raw, limits))
}

/// Reject text too short to produce anything useful.
pub fn ensure_sufficient(text: &str, limits: &SourceLimits) -> Result<()> {
    let chars = text.chars().count();
    if chars < limits.min_chars {
        warn!(chars, min_chars = limits.min_chars, "Insufficient text");
        anyhow::bail!(
            "Document has too little extractable text ({chars} characters, need at least {})",
            limits.min_chars
        );
    }
    Ok(())
}
