//! `menusort align` command.

use std::fmt::Write as _;
use std::path::Path;

use tracing::warn;

use crate::align::{align, duplicate_identifiers};
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::observed::load_labels;
use crate::report::format_alignment;
use crate::resources::ResourceStore;

/// Align observed labels to the menu and show the mapping table.
///
/// # Errors
///
/// Returns an error string if either input cannot be loaded or the label
/// counts differ.
pub fn run(ctx: &ServiceContext, settings: &Settings, observed: &Path) -> Result<String, String> {
    let menu = ResourceStore::new(ctx, settings).load_menu()?;
    let labels = load_labels(ctx, observed)?;
    let aligned = align(&menu, &labels).map_err(|e| e.to_string())?;

    let mut output = format_alignment(&aligned);
    for id in duplicate_identifiers(&aligned) {
        warn!(identifier = id, "several observed labels matched the same entry");
        let _ = write!(output, "\nwarning: {id} matched more than one observed label");
    }
    Ok(output)
}
