//! Builds a cassette in memory and writes it out as YAML.

use std::io;
use std::path::PathBuf;

use chrono::Utc;

use super::format::{Cassette, Interaction};

/// Accumulates port calls for one cassette file.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    cassette: Cassette,
}

impl CassetteRecorder {
    /// Starts an empty cassette named `name`, to be written to `path`.
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        commit: impl Into<String>,
    ) -> Self {
        let cassette = Cassette {
            name: name.into(),
            recorded_at: Utc::now(),
            commit: commit.into(),
            interactions: Vec::new(),
        };
        Self { path: path.into(), cassette }
    }

    /// Appends a call; `seq` is its index in the cassette.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.cassette.interactions.len() as u64;
        self.cassette.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn interactions(&self) -> &[Interaction] {
        &self.cassette.interactions
    }

    /// Writes the cassette, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be produced or written.
    pub fn finish(self) -> io::Result<PathBuf> {
        let yaml = serde_yaml::to_string(&self.cassette).map_err(io::Error::other)?;
        if let Some(dir) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(&self.path, yaml)?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sequence_numbers_follow_call_order() {
        let dir = std::env::temp_dir().join("menusort_recorder_test");
        let path = dir.join("run.cassette.yaml");

        let mut recorder = CassetteRecorder::new(&path, "reconcile-run", "0.1.0");
        recorder.record("clock", "now", json!(null), json!("2025-11-14T09:15:00Z"));
        recorder.record("fs", "read_to_string", json!({"path": "/a"}), json!({"ok": "b"}));
        recorder.record("id_gen", "generate_id", json!(null), json!("run-1"));
        assert_eq!(recorder.interactions().len(), 3);

        let written = recorder.finish().expect("finish should succeed");
        assert_eq!(written, path);

        let cassette: Cassette =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(cassette.name, "reconcile-run");
        let seqs: Vec<u64> = cassette.interactions.iter().map(|i| i.seq).collect();
        assert_eq!(seqs, vec![0, 1, 2]);
        assert_eq!(cassette.interactions[2].port, "id_gen");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
