//! `menusort reset` command.

use crate::config::Settings;
use crate::context::ServiceContext;
use crate::resources::ResourceStore;

/// Zero every position value of the menu, so the rendered order falls back
/// to the toolkit's default before the menu is captured.
///
/// # Errors
///
/// Returns an error string if the resource file cannot be read or written.
pub fn run(ctx: &ServiceContext, settings: &Settings) -> Result<String, String> {
    let count = ResourceStore::new(ctx, settings).reset_positions()?;
    Ok(format!("Reset {count} position values in {}.", settings.resources.display()))
}
