//! Recording adapter for the `FileSystem` port.

use std::path::Path;

use serde_json::{json, Value};

use super::{outcome, record, SharedRecorder};
use crate::ports::FileSystem;

/// Passes filesystem calls through to `inner` and records each outcome.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    recorder: SharedRecorder,
}

impl RecordingFileSystem {
    /// Creates a recording filesystem wrapping `inner`.
    pub fn new(inner: Box<dyn FileSystem>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }

    fn record(&self, method: &str, input: Value, output: Value) {
        record(&self.recorder, "fs", method, input, output);
    }
}

fn path_input(path: &Path) -> Value {
    json!({ "path": path.display().to_string() })
}

impl FileSystem for RecordingFileSystem {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let contents = self.inner.read_to_string(path);
        self.record("read_to_string", path_input(path), outcome(&contents));
        contents
    }

    fn write(
        &self,
        path: &Path,
        contents: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let written = self.inner.write(path, contents);
        let input = json!({ "path": path.display().to_string(), "contents": contents });
        self.record("write", input, outcome(&written));
        written
    }

    fn exists(&self, path: &Path) -> bool {
        let found = self.inner.exists(path);
        self.record("exists", path_input(path), Value::Bool(found));
        found
    }
}
