//! Alignment diagnostics: a printable table and a YAML run report.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::align::duplicate_identifiers;
use crate::context::ServiceContext;
use crate::menu::{AlignedEntry, PositionAssignment};

/// Everything one reconciliation run decided, for later inspection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlignmentReport {
    /// Identifier of this run.
    pub run_id: String,
    /// When the report was produced.
    pub generated_at: DateTime<Utc>,
    /// Resource file the canonical menu came from.
    pub resources: String,
    /// One entry per observed label, in display order.
    pub aligned: Vec<AlignedEntry>,
    /// Identifiers matched by more than one observed label.
    pub duplicates: Vec<String>,
    /// Computed position values.
    pub positions: PositionAssignment,
}

impl AlignmentReport {
    /// Assembles a report, taking the run ID and timestamp from the context.
    #[must_use]
    pub fn new(
        ctx: &ServiceContext,
        resources: &Path,
        aligned: &[AlignedEntry],
        positions: &PositionAssignment,
    ) -> Self {
        Self {
            run_id: ctx.id_gen.generate_id(),
            generated_at: ctx.clock.now(),
            resources: resources.display().to_string(),
            aligned: aligned.to_vec(),
            duplicates: duplicate_identifiers(aligned).into_iter().map(String::from).collect(),
            positions: positions.clone(),
        }
    }

    /// Writes the report as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn save(&self, ctx: &ServiceContext, path: &Path) -> Result<(), String> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize report {}: {e}", self.run_id))?;
        ctx.fs
            .write(path, &yaml)
            .map_err(|e| format!("Failed to write report {}: {e}", path.display()))
    }
}

/// Formats aligned entries as a table: observed label, matched label, identifier, distance.
#[must_use]
pub fn format_alignment(aligned: &[AlignedEntry]) -> String {
    if aligned.is_empty() {
        return "No labels observed.".to_string();
    }

    let observed_width = column_width("OBSERVED", aligned.iter().map(|a| &a.observed_label));
    let label_width = column_width("LABEL", aligned.iter().map(|a| &a.canonical_label));
    let id_width = column_width("IDENTIFIER", aligned.iter().map(|a| &a.identifier));

    let mut lines = vec![
        format!(
            "{:<observed_width$}  {:<label_width$}  {:<id_width$}  DIST",
            "OBSERVED", "LABEL", "IDENTIFIER"
        ),
        format!("{:-<observed_width$}  {:-<label_width$}  {:-<id_width$}  ----", "", "", ""),
    ];
    for a in aligned {
        lines.push(format!(
            "{:<observed_width$}  {:<label_width$}  {:<id_width$}  {}",
            a.observed_label, a.canonical_label, a.identifier, a.match_distance
        ));
    }
    lines.join("\n")
}

/// Formats positions as `identifier: position` lines, lowest position first.
#[must_use]
pub fn format_positions(positions: &PositionAssignment) -> String {
    let mut rows: Vec<(&str, usize)> = positions.iter().collect();
    rows.sort_by_key(|&(id, pos)| (pos, id));
    rows.iter().map(|(id, pos)| format!("{id}: {pos}")).collect::<Vec<_>>().join("\n")
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a String>) -> usize {
    values.map(|v| v.chars().count()).max().unwrap_or(0).max(header.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(observed: &str, label: &str, id: &str, distance: usize) -> AlignedEntry {
        AlignedEntry {
            identifier: id.into(),
            observed_label: observed.into(),
            canonical_label: label.into(),
            match_distance: distance,
        }
    }

    #[test]
    fn table_has_header_and_one_row_per_label() {
        let table = format_alignment(&[
            entry("Termina1", "Terminal", "terminal", 1),
            entry("Copy To", "Copy To", "copy", 0),
        ]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("OBSERVED"));
        assert!(lines[2].contains("Termina1") && lines[2].contains("terminal"));
        assert!(lines[3].ends_with('0'));
    }

    #[test]
    fn empty_table_message() {
        assert_eq!(format_alignment(&[]), "No labels observed.");
    }

    #[test]
    fn positions_listed_lowest_first() {
        let positions: PositionAssignment =
            [("c", 2), ("b", 0), ("a", 0)].into_iter().collect();
        assert_eq!(format_positions(&positions), "a: 0\nb: 0\nc: 2");
    }
}
