//! Recording session shared by all recording adapters of one run.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::recorder::CassetteRecorder;
use crate::adapters::recording::SharedRecorder;

/// Owns the recorder for a run started with `MENUSORT_RECORD`.
///
/// Recording adapters hold clones of [`RecordingSession::recorder`]; the
/// service context must be dropped before [`RecordingSession::finish`] so the
/// session is the last owner.
pub struct RecordingSession {
    recorder: SharedRecorder,
}

impl RecordingSession {
    /// Start a session that writes its cassette to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let recorder = CassetteRecorder::new(path, "menusort-session", env!("CARGO_PKG_VERSION"));
        Self { recorder: Arc::new(Mutex::new(recorder)) }
    }

    /// Handle for recording adapters.
    #[must_use]
    pub fn recorder(&self) -> SharedRecorder {
        Arc::clone(&self.recorder)
    }

    /// Write the cassette and return its path.
    ///
    /// # Errors
    ///
    /// Returns an error if an adapter still holds the recorder, or if the
    /// cassette cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapters still hold the recorder".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}
