//! Runtime settings resolved from the environment.
//!
//! `main` loads a `.env` file first (via `dotenvy`), so values may come from
//! either source. Command-line flags override the resource path.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the resource file.
pub const RESOURCES_VAR: &str = "MENUSORT_RESOURCES";
/// Environment variable naming the application class that prefixes resources.
pub const APP_CLASS_VAR: &str = "MENUSORT_APP_CLASS";
/// Environment variable naming the menu widget whose entries are sorted.
pub const MENU_VAR: &str = "MENUSORT_MENU";
/// Environment variable that enables cassette recording to the given file.
pub const RECORD_VAR: &str = "MENUSORT_RECORD";

const DEFAULT_APP_CLASS: &str = "XFile";
const DEFAULT_MENU: &str = "toolsMenu";
const DEFAULT_RESOURCES: &str = ".app-defaults/XFile";

/// Where the menu lives and how its resources are named.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Resource file holding `labelString` and `positionIndex` entries.
    pub resources: PathBuf,
    /// Application class at the start of each resource line.
    pub app_class: String,
    /// Menu widget name preceding each item identifier.
    pub menu: String,
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// The resource path defaults to `$HOME/.app-defaults/XFile`, or to the
    /// relative `.app-defaults/XFile` when `HOME` is unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let resources = non_empty(RESOURCES_VAR).map_or_else(
            || match non_empty("HOME") {
                Some(home) => PathBuf::from(home).join(DEFAULT_RESOURCES),
                None => PathBuf::from(DEFAULT_RESOURCES),
            },
            PathBuf::from,
        );

        Self {
            resources,
            app_class: non_empty(APP_CLASS_VAR).unwrap_or_else(|| DEFAULT_APP_CLASS.to_string()),
            menu: non_empty(MENU_VAR).unwrap_or_else(|| DEFAULT_MENU.to_string()),
        }
    }

    /// Replaces the resource path when `path` is given.
    #[must_use]
    pub fn with_resources(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.resources = path;
        }
        self
    }
}
