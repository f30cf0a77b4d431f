//! Menu data model shared by the aligner and the reconciler.
//!
//! The canonical sequence is loaded once per run and never mutated. Aligned
//! entries and position assignments are computed from it and handed back to
//! the caller.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One entry of the desired (canonical) order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalEntry {
    /// Unique identifier of the item (the resource's action name).
    pub identifier: String,
    /// Label as written in the configuration.
    pub label: String,
    /// Zero-based index in the canonical sequence.
    pub rank: usize,
}

/// The canonical sequence, in desired display order.
///
/// Construction validates that identifiers are unique; ranks are the entry
/// indices, so they form a strict total order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CanonicalMenu {
    entries: Vec<CanonicalEntry>,
}

impl CanonicalMenu {
    /// Builds a canonical menu from ordered `(identifier, label)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIdentifier`] if an identifier repeats.
    pub fn new<I, S, L>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, L)>,
        S: Into<String>,
        L: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();
        for (rank, (identifier, label)) in pairs.into_iter().enumerate() {
            let identifier = identifier.into();
            if !seen.insert(identifier.clone()) {
                return Err(Error::DuplicateIdentifier(identifier));
            }
            entries.push(CanonicalEntry { identifier, label: label.into(), rank });
        }
        Ok(Self { entries })
    }

    /// Entries in rank order.
    #[must_use]
    pub fn entries(&self) -> &[CanonicalEntry] {
        &self.entries
    }

    /// Number of canonical entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the menu has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up an entry by identifier.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&CanonicalEntry> {
        self.entries.iter().find(|e| e.identifier == identifier)
    }

    /// Identifier to rank mapping, as consumed by [`crate::rank::reconcile`].
    #[must_use]
    pub fn ranks(&self) -> HashMap<String, usize> {
        self.entries.iter().map(|e| (e.identifier.clone(), e.rank)).collect()
    }
}

/// An observed label paired with the canonical entry it aligned to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignedEntry {
    /// Identifier of the best-matching canonical entry.
    pub identifier: String,
    /// The raw label as captured from the noisy channel.
    pub observed_label: String,
    /// Label of the chosen canonical entry.
    pub canonical_label: String,
    /// Edit distance between the observed and canonical labels.
    pub match_distance: usize,
}

/// New position values keyed by identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct PositionAssignment {
    positions: BTreeMap<String, usize>,
}

impl PositionAssignment {
    /// Creates an empty assignment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the position for an identifier, replacing any earlier value.
    pub fn assign(&mut self, identifier: impl Into<String>, position: usize) {
        self.positions.insert(identifier.into(), position);
    }

    /// Position assigned to `identifier`, if any.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<usize> {
        self.positions.get(identifier).copied()
    }

    /// Number of identifiers with a position.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` when no positions were assigned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterates `(identifier, position)` pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.positions.iter().map(|(id, pos)| (id.as_str(), *pos))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for PositionAssignment {
    fn from_iter<T: IntoIterator<Item = (S, usize)>>(iter: T) -> Self {
        let mut assignment = Self::new();
        for (identifier, position) in iter {
            assignment.assign(identifier, position);
        }
        assignment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_input_order() {
        let menu = CanonicalMenu::new([("open", "Open"), ("copy", "Copy"), ("move", "Move")])
            .unwrap();
        assert_eq!(menu.len(), 3);
        assert_eq!(menu.get("copy").unwrap().rank, 1);
        let ranks = menu.ranks();
        assert_eq!(ranks["open"], 0);
        assert_eq!(ranks["move"], 2);
    }

    #[test]
    fn duplicate_identifier_is_rejected() {
        let err = CanonicalMenu::new([("open", "Open"), ("open", "Open again")]).unwrap_err();
        assert_eq!(err, Error::DuplicateIdentifier("open".into()));
    }

    #[test]
    fn empty_menu_is_valid() {
        let menu = CanonicalMenu::new(Vec::<(String, String)>::new()).unwrap();
        assert!(menu.is_empty());
        assert!(menu.ranks().is_empty());
    }

    #[test]
    fn later_assignment_overwrites_earlier() {
        let mut positions = PositionAssignment::new();
        positions.assign("open", 3);
        positions.assign("open", 1);
        assert_eq!(positions.get("open"), Some(1));
        assert_eq!(positions.len(), 1);
    }

    #[test]
    fn assignment_serializes_as_flat_map() {
        let positions: PositionAssignment = [("b", 0), ("a", 2)].into_iter().collect();
        let yaml = serde_yaml::to_string(&positions).unwrap();
        assert_eq!(yaml, "a: 2\nb: 0\n");
    }
}
