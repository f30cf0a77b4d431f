//! Rank reconciler: turns an observed display order into position values.
//!
//! Items are processed from the bottom of the display upwards. Each item's
//! position is the number of already-processed items whose canonical rank is
//! strictly smaller, i.e. the index at which it must be inserted into the
//! items placed so far to keep them in canonical order. A consumer that
//! creates items in processing order and inserts each one at its position
//! ends up with the canonical order restricted to the items present.
//!
//! Positions are insertion indices, not a permutation: distinct items may
//! share a value (an already-ordered display yields all zeros).

use std::collections::HashMap;

use tracing::trace;

use crate::error::{Error, Result};
use crate::menu::PositionAssignment;

/// Computes new position values for `aligned`, given in display order (top first).
///
/// A duplicated identifier is processed once per occurrence; the topmost
/// occurrence is processed last and its value wins.
///
/// # Errors
///
/// Returns [`Error::UnknownIdentifier`] if an identifier has no entry in
/// `ranks`. No partial assignment is returned.
pub fn reconcile<S: AsRef<str>>(
    aligned: &[S],
    ranks: &HashMap<String, usize>,
) -> Result<PositionAssignment> {
    let mut visited: Vec<usize> = Vec::with_capacity(aligned.len());
    let mut positions = PositionAssignment::new();

    for identifier in aligned.iter().rev() {
        let identifier = identifier.as_ref();
        let rank = *ranks
            .get(identifier)
            .ok_or_else(|| Error::UnknownIdentifier(identifier.to_string()))?;

        let position = visited.iter().filter(|&&r| r < rank).count();
        trace!(identifier, rank, position, "placed item");

        positions.assign(identifier, position);
        visited.push(rank);
    }

    Ok(positions)
}

/// Rebuilds the order a consumer produces from `positions`.
///
/// Takes identifiers in processing order (bottom of `aligned` first) and
/// inserts each at index `position` of a growing list. Positions past the
/// end append.
///
/// # Errors
///
/// Returns [`Error::UnknownIdentifier`] if an identifier has no position.
pub fn replay_insertions<S: AsRef<str>>(
    aligned: &[S],
    positions: &PositionAssignment,
) -> Result<Vec<String>> {
    let mut order: Vec<String> = Vec::with_capacity(aligned.len());
    for identifier in aligned.iter().rev() {
        let identifier = identifier.as_ref();
        let position = positions
            .get(identifier)
            .ok_or_else(|| Error::UnknownIdentifier(identifier.to_string()))?;
        order.insert(position.min(order.len()), identifier.to_string());
    }
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(ids: &[&str]) -> HashMap<String, usize> {
        ids.iter().enumerate().map(|(i, id)| ((*id).to_string(), i)).collect()
    }

    /// All orderings of `items`, generated recursively.
    fn permutations(items: &[&'static str]) -> Vec<Vec<&'static str>> {
        if items.len() <= 1 {
            return vec![items.to_vec()];
        }
        let mut out = Vec::new();
        for i in 0..items.len() {
            let mut rest = items.to_vec();
            let head = rest.remove(i);
            for mut tail in permutations(&rest) {
                tail.insert(0, head);
                out.push(tail);
            }
        }
        out
    }

    #[test]
    fn bottom_up_counts_smaller_visited_ranks() {
        let ranks = ranks(&["a", "b", "c"]);
        let positions = reconcile(&["c", "a", "b"], &ranks).unwrap();

        // Reversed: b (visited {}) -> 0, a (visited {1}) -> 0, c (visited {1, 0}) -> 2.
        assert_eq!(positions.get("b"), Some(0));
        assert_eq!(positions.get("a"), Some(0));
        assert_eq!(positions.get("c"), Some(2));
        assert_eq!(positions.len(), 3);
    }

    #[test]
    fn bottom_up_example_replays_to_canonical_order() {
        let ranks = ranks(&["a", "b", "c"]);
        let aligned = ["c", "a", "b"];
        let positions = reconcile(&aligned, &ranks).unwrap();
        assert_eq!(replay_insertions(&aligned, &positions).unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn canonical_display_order_needs_no_reordering() {
        let ranks = ranks(&["a", "b", "c"]);
        let positions = reconcile(&["a", "b", "c"], &ranks).unwrap();
        assert!(positions.iter().all(|(_, p)| p == 0));
    }

    #[test]
    fn reversed_display_order_yields_ascending_positions() {
        let ranks = ranks(&["a", "b", "c", "d"]);
        let positions = reconcile(&["d", "c", "b", "a"], &ranks).unwrap();
        assert_eq!(positions.get("a"), Some(0));
        assert_eq!(positions.get("b"), Some(1));
        assert_eq!(positions.get("c"), Some(2));
        assert_eq!(positions.get("d"), Some(3));
    }

    #[test]
    fn every_permutation_replays_to_canonical_order() {
        let canonical = ["a", "b", "c", "d", "e"];
        let ranks = ranks(&canonical);
        for display in permutations(&canonical) {
            let positions = reconcile(&display, &ranks).unwrap();
            assert_eq!(positions.len(), canonical.len());
            let rebuilt = replay_insertions(&display, &positions).unwrap();
            assert_eq!(rebuilt, canonical, "display order {display:?}");
        }
    }

    #[test]
    fn positions_never_exceed_items_already_placed() {
        let canonical = ["a", "b", "c", "d"];
        let ranks = ranks(&canonical);
        for display in permutations(&canonical) {
            let positions = reconcile(&display, &ranks).unwrap();
            for (placed, id) in display.iter().rev().enumerate() {
                assert!(positions.get(id).unwrap() <= placed);
            }
        }
    }

    #[test]
    fn subset_reproduces_restricted_canonical_order() {
        // Only three of five canonical items are on display.
        let ranks = ranks(&["a", "b", "c", "d", "e"]);
        let aligned = ["e", "b", "d"];
        let positions = reconcile(&aligned, &ranks).unwrap();
        assert_eq!(replay_insertions(&aligned, &positions).unwrap(), vec!["b", "d", "e"]);
    }

    #[test]
    fn unknown_identifier_fails() {
        let ranks = ranks(&["a", "b"]);
        let err = reconcile(&["a", "ghost"], &ranks).unwrap_err();
        assert_eq!(err, Error::UnknownIdentifier("ghost".into()));
    }

    #[test]
    fn duplicate_takes_topmost_occurrence() {
        let ranks = ranks(&["a", "b", "c"]);
        // Reversed: b -> 0, c -> 1, a -> 0, then the topmost c -> 2 overwrites 1.
        let positions = reconcile(&["c", "a", "c", "b"], &ranks).unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions.get("a"), Some(0));
        assert_eq!(positions.get("b"), Some(0));
        assert_eq!(positions.get("c"), Some(2));
    }

    #[test]
    fn empty_input_is_empty_mapping() {
        let aligned: [&str; 0] = [];
        let positions = reconcile(&aligned, &HashMap::new()).unwrap();
        assert!(positions.is_empty());
    }
}
