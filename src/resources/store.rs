//! Resource store: reads the canonical menu from, and writes positions to,
//! the resource file.
//!
//! All I/O goes through `ctx.fs` so the store works with live, recording,
//! and replaying adapters.

use tracing::info;

use super::MenuResources;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::menu::{CanonicalMenu, PositionAssignment};

/// Access to one menu inside one resource file.
pub struct ResourceStore<'a> {
    ctx: &'a ServiceContext,
    settings: &'a Settings,
}

impl<'a> ResourceStore<'a> {
    /// Creates a store for the file and menu named in `settings`.
    #[must_use]
    pub fn new(ctx: &'a ServiceContext, settings: &'a Settings) -> Self {
        Self { ctx, settings }
    }

    fn names(&self) -> MenuResources<'a> {
        MenuResources { app_class: &self.settings.app_class, menu: &self.settings.menu }
    }

    fn read(&self) -> Result<String, String> {
        let path = &self.settings.resources;
        if !self.ctx.fs.exists(path) {
            return Err(format!("Resource file not found: {}", path.display()));
        }
        self.ctx
            .fs
            .read_to_string(path)
            .map_err(|e| format!("Failed to read resource file {}: {e}", path.display()))
    }

    fn write(&self, contents: &str) -> Result<(), String> {
        let path = &self.settings.resources;
        self.ctx
            .fs
            .write(path, contents)
            .map_err(|e| format!("Failed to write resource file {}: {e}", path.display()))
    }

    /// Loads the canonical menu from the file's `labelString` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or an identifier repeats.
    pub fn load_menu(&self) -> Result<CanonicalMenu, String> {
        let contents = self.read()?;
        let menu = CanonicalMenu::new(self.names().labels(&contents))
            .map_err(|e| format!("Invalid menu in {}: {e}", self.settings.resources.display()))?;
        info!(entries = menu.len(), path = %self.settings.resources.display(), "loaded menu");
        Ok(menu)
    }

    /// Writes `positions` into the file's `positionIndex` lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written, or if an
    /// assigned identifier has no `positionIndex` line (the file is then left
    /// unchanged).
    pub fn write_positions(&self, positions: &PositionAssignment) -> Result<(), String> {
        let contents = self.read()?;
        let updated = self.names().apply_positions(&contents, positions).map_err(|e| {
            format!("Cannot update {}: {e}", self.settings.resources.display())
        })?;
        self.write(&updated)?;
        info!(entries = positions.len(), "wrote position values");
        Ok(())
    }

    /// Resets every `positionIndex` of the menu to zero.
    ///
    /// Returns the number of lines changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn reset_positions(&self) -> Result<usize, String> {
        let contents = self.read()?;
        let (updated, count) = self.names().reset_positions(&contents);
        self.write(&updated)?;
        info!(count, "reset position values");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::*;
    use crate::ports::filesystem::FileSystem;

    /// In-memory filesystem for testing the store without touching disk.
    #[derive(Default)]
    struct MemFs {
        files: Mutex<HashMap<PathBuf, String>>,
    }

    impl MemFs {
        fn with_file(path: &str, contents: &str) -> Self {
            let fs = Self::default();
            fs.files.lock().unwrap().insert(PathBuf::from(path), contents.to_string());
            fs
        }
    }

    impl FileSystem for MemFs {
        fn read_to_string(
            &self,
            path: &Path,
        ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
            let files = self.files.lock().unwrap();
            files
                .get(path)
                .cloned()
                .ok_or_else(|| format!("File not found: {}", path.display()).into())
        }

        fn write(
            &self,
            path: &Path,
            contents: &str,
        ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    const PATH: &str = "/home/rob/.app-defaults/XFile";

    fn context(fs: MemFs) -> ServiceContext {
        let mut ctx = ServiceContext::live();
        ctx.fs = Box::new(fs);
        ctx
    }

    fn settings() -> Settings {
        Settings {
            resources: PathBuf::from(PATH),
            app_class: "XFile".into(),
            menu: "toolsMenu".into(),
        }
    }

    const CONTENTS: &str = "\
XFile*toolsMenu.copy.labelString: Copy To
XFile*toolsMenu.copy.positionIndex: 0
XFile*toolsMenu.link.labelString: Link To
XFile*toolsMenu.link.positionIndex: 0
";

    #[test]
    fn load_menu_ranks_by_file_order() {
        let ctx = context(MemFs::with_file(PATH, CONTENTS));
        let settings = settings();
        let menu = ResourceStore::new(&ctx, &settings).load_menu().unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.get("link").unwrap().rank, 1);
        assert_eq!(menu.get("copy").unwrap().label, "Copy To");
    }

    #[test]
    fn load_menu_rejects_duplicate_identifiers() {
        let contents = "XFile*toolsMenu.copy.labelString: A\nXFile*toolsMenu.copy.labelString: B\n";
        let ctx = context(MemFs::with_file(PATH, contents));
        let settings = settings();
        let err = ResourceStore::new(&ctx, &settings).load_menu().unwrap_err();
        assert!(err.contains("duplicate canonical identifier"));
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let ctx = context(MemFs::default());
        let settings = settings();
        let err = ResourceStore::new(&ctx, &settings).load_menu().unwrap_err();
        assert!(err.contains("Resource file not found"));
        assert!(err.contains(PATH));
    }

    #[test]
    fn write_positions_updates_file() {
        let ctx = context(MemFs::with_file(PATH, CONTENTS));
        let settings = settings();
        let store = ResourceStore::new(&ctx, &settings);
        let positions: PositionAssignment = [("copy", 1), ("link", 0)].into_iter().collect();
        store.write_positions(&positions).unwrap();

        let written = ctx.fs.read_to_string(Path::new(PATH)).unwrap();
        assert!(written.contains("copy.positionIndex: 1"));
        assert!(written.contains("link.positionIndex: 0"));
    }

    #[test]
    fn write_positions_leaves_file_alone_on_missing_resource() {
        let ctx = context(MemFs::with_file(PATH, CONTENTS));
        let settings = settings();
        let positions: PositionAssignment = [("copy", 1), ("move", 0)].into_iter().collect();
        let err = ResourceStore::new(&ctx, &settings).write_positions(&positions).unwrap_err();
        assert!(err.contains("move"));
        assert_eq!(ctx.fs.read_to_string(Path::new(PATH)).unwrap(), CONTENTS);
    }

    #[test]
    fn reset_zeroes_positions() {
        let contents = "XFile*toolsMenu.copy.positionIndex: 5\nXFile*toolsMenu.link.positionIndex: 2\n";
        let ctx = context(MemFs::with_file(PATH, contents));
        let settings = settings();
        let count = ResourceStore::new(&ctx, &settings).reset_positions().unwrap();
        assert_eq!(count, 2);
        let written = ctx.fs.read_to_string(Path::new(PATH)).unwrap();
        assert!(!written.contains(": 5") && !written.contains(": 2"));
    }
}
