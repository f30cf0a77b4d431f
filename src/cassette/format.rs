//! Cassette data structures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded call on a port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number, assigned by the recorder.
    pub seq: u64,
    /// Port name (`fs`, `clock`, `id_gen`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Arguments of the call.
    pub input: serde_json::Value,
    /// Returned value, using the `{"ok": ..}` / `{"err": ..}` shape for fallible calls.
    pub output: serde_json::Value,
}

/// A named, ordered list of interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Crate version (or other build marker) that produced the recording.
    pub commit: String,
    /// Interactions in call order.
    pub interactions: Vec<Interaction>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_cassette() {
        let yaml = r#"
name: reset-run
recorded_at: 2025-11-14T09:15:00Z
commit: 0.1.0
interactions:
  - seq: 0
    port: fs
    method: read_to_string
    input: { path: /home/user/.app-defaults/XFile }
    output: { ok: "XFile*toolsMenu.open.positionIndex: 3\n" }
  - seq: 1
    port: fs
    method: write
    input: { path: /home/user/.app-defaults/XFile, contents: "XFile*toolsMenu.open.positionIndex: 0\n" }
    output: { ok: null }
"#;
        let cassette: Cassette = serde_yaml::from_str(yaml).expect("parse");
        assert_eq!(cassette.name, "reset-run");
        assert_eq!(cassette.interactions.len(), 2);
        assert_eq!(cassette.interactions[1].method, "write");
        assert_eq!(cassette.interactions[1].output, json!({"ok": null}));
    }
}
