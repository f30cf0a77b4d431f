//! `menusort labels` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::resources::ResourceStore;

/// List the canonical menu: rank, identifier, and label.
///
/// # Errors
///
/// Returns an error string if the resource file cannot be loaded.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<String, String> {
    let menu = ResourceStore::new(ctx, settings).load_menu()?;
    if menu.is_empty() {
        return Ok(format!(
            "No {}.{} entries found in {}.",
            settings.app_class,
            settings.menu,
            settings.resources.display()
        ));
    }

    let id_width = menu.entries().iter().map(|e| e.identifier.len()).max().unwrap_or(0).max(10);
    let mut lines = vec![format!("RANK  {:<id_width$}  LABEL", "IDENTIFIER")];
    for entry in menu.entries() {
        lines.push(format!("{:>4}  {:<id_width$}  {}", entry.rank, entry.identifier, entry.label));
    }
    Ok(lines.join("\n"))
}
