//! Replaying adapter for the `FileSystem` port.

use std::path::Path;
use std::sync::Mutex;

use serde::de::DeserializeOwned;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::filesystem::FileSystem;

type PortResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Answers filesystem calls with their recorded outcomes.
///
/// Nothing touches the disk: reads return recorded contents and writes only
/// report how the recorded write went.
pub struct ReplayingFileSystem {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingFileSystem {
    /// Creates a replaying filesystem from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }

    fn replay<T: DeserializeOwned>(&self, method: &str) -> PortResult<T> {
        let output =
            self.replayer.lock().expect("replayer lock poisoned").next_output("fs", method);
        extract_result(&output, &format!("fs::{method}"))
    }
}

impl FileSystem for ReplayingFileSystem {
    fn read_to_string(&self, _path: &Path) -> PortResult<String> {
        self.replay("read_to_string")
    }

    fn write(&self, _path: &Path, _contents: &str) -> PortResult<()> {
        self.replay("write")
    }

    fn exists(&self, _path: &Path) -> bool {
        self.replay("exists").unwrap_or_else(|e| panic!("replayed fs::exists: {e}"))
    }
}
