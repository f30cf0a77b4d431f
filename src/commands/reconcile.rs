//! `menusort reconcile` command.
//!
//! Loads the canonical menu and the observed labels, aligns them, computes
//! position values, and writes them back unless this is a dry run.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{info, warn};

use crate::align::{align, duplicate_identifiers};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::observed::load_labels;
use crate::rank::reconcile;
use crate::report::{format_positions, AlignmentReport};
use crate::resources::ResourceStore;

/// Options for a reconcile run.
#[derive(Debug, Default)]
pub struct Options<'a> {
    /// Compute and print only; leave the resource file unchanged.
    pub dry_run: bool,
    /// Where to write a YAML report, if anywhere.
    pub report: Option<&'a Path>,
}

/// Execute the `reconcile` command.
///
/// # Errors
///
/// Returns an error string if loading, alignment, reconciliation, or writing
/// fails. Nothing is written when alignment or reconciliation fails.
pub fn run(
    ctx: &ServiceContext,
    settings: &Settings,
    observed: &Path,
    options: &Options<'_>,
) -> Result<String, String> {
    let store = ResourceStore::new(ctx, settings);
    let menu = store.load_menu()?;
    let labels = load_labels(ctx, observed)?;

    let aligned = align(&menu, &labels).map_err(|e| e.to_string())?;
    let duplicates = duplicate_identifiers(&aligned);
    for id in &duplicates {
        warn!(identifier = id, "several observed labels matched the same entry");
    }

    let order: Vec<&str> = aligned.iter().map(|a| a.identifier.as_str()).collect();
    let positions = reconcile(&order, &menu.ranks()).map_err(|e| e.to_string())?;

    let mut output = format_positions(&positions);
    for id in &duplicates {
        let _ = write!(output, "\nwarning: {id} matched more than one observed label");
    }

    if let Some(path) = options.report {
        AlignmentReport::new(ctx, &settings.resources, &aligned, &positions).save(ctx, path)?;
        let _ = write!(output, "\nReport written to {}", path.display());
    }

    if options.dry_run {
        output.push_str("\nDry run: resource file not modified.");
    } else {
        store.write_positions(&positions)?;
        info!(entries = positions.len(), "positions applied");
        let _ = write!(
            output,
            "\nUpdated {}. Changes take effect in a new window.",
            settings.resources.display()
        );
    }
    Ok(output)
}
