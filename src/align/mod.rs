//! Label aligner: maps noisy observed labels onto canonical identifiers.
//!
//! Each observed label is compared against every canonical label using the
//! Levenshtein edit distance. The canonical pool is never reduced between
//! matches, so two observed labels may land on the same identifier; see
//! [`duplicate_identifiers`] for detecting that.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{Error, Result};
use crate::menu::{AlignedEntry, CanonicalEntry, CanonicalMenu};

/// Aligns every observed label to its closest canonical entry.
///
/// Output order follows `observed`. Both sequences must have the same length;
/// two empty sequences align to an empty result.
///
/// # Errors
///
/// Returns [`Error::CardinalityMismatch`] when the lengths differ.
pub fn align<S: AsRef<str>>(
    canonical: &CanonicalMenu,
    observed: &[S],
) -> Result<Vec<AlignedEntry>> {
    if canonical.len() != observed.len() {
        return Err(Error::CardinalityMismatch {
            canonical: canonical.len(),
            observed: observed.len(),
        });
    }

    let mut aligned = Vec::with_capacity(observed.len());
    for label in observed {
        let label = label.as_ref();
        // Lengths are equal, so a non-empty `observed` means a non-empty pool.
        let Some((entry, distance)) = best_match(canonical.entries(), label) else {
            break;
        };
        debug!(
            observed = label,
            identifier = %entry.identifier,
            canonical = %entry.label,
            distance,
            "aligned label"
        );
        aligned.push(AlignedEntry {
            identifier: entry.identifier.clone(),
            observed_label: label.to_string(),
            canonical_label: entry.label.clone(),
            match_distance: distance,
        });
    }
    Ok(aligned)
}

/// Finds the canonical entry whose label is closest to `observed`.
///
/// Entries are scanned in the given order and only a strictly smaller
/// distance replaces the current best, so ties go to the first entry seen.
/// Returns `None` for an empty slice.
#[must_use]
pub fn best_match<'a>(
    canonical: &'a [CanonicalEntry],
    observed: &str,
) -> Option<(&'a CanonicalEntry, usize)> {
    let mut best: Option<(&CanonicalEntry, usize)> = None;
    for entry in canonical {
        let distance = strsim::levenshtein(&entry.label, observed);
        match best {
            Some((_, smallest)) if distance >= smallest => {}
            _ => best = Some((entry, distance)),
        }
    }
    best
}

/// Identifiers that more than one observed label aligned to, in first-seen order.
#[must_use]
pub fn duplicate_identifiers(aligned: &[AlignedEntry]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for entry in aligned {
        let id = entry.identifier.as_str();
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }
    duplicates
}
