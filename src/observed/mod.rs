//! Observed labels captured from the rendered menu.
//!
//! The capture itself (screenshot plus OCR) happens outside this crate; what
//! arrives here is the recognizer's text output, top to bottom.

use std::path::Path;

use tracing::debug;

use crate::context::ServiceContext;

/// Splits recognizer output into observed labels, in display order.
///
/// Lines without any ASCII letter or digit are recognition noise (rules,
/// separators, stray punctuation) and are dropped. Surrounding whitespace is
/// trimmed; nothing else is corrected.
#[must_use]
pub fn parse_labels(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| line.chars().any(|c| c.is_ascii_alphanumeric()))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Reads observed labels from a recognizer output file.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn load_labels(ctx: &ServiceContext, path: &Path) -> Result<Vec<String>, String> {
    let text = ctx
        .fs
        .read_to_string(path)
        .map_err(|e| format!("Failed to read observed labels {}: {e}", path.display()))?;
    let labels = parse_labels(&text);
    debug!(count = labels.len(), path = %path.display(), "loaded observed labels");
    Ok(labels)
}
