//! Hands recorded port calls back to the replaying adapters.

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::path::Path;

use serde_json::Value;

use super::format::{Cassette, Interaction};

/// Outputs of one cassette, queued per `port::method`.
///
/// Calls to the same method come back in recorded order. Calls to different
/// methods may interleave differently from the recording.
pub struct CassetteReplayer {
    name: String,
    pending: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Queues every interaction of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut pending: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for call in &cassette.interactions {
            pending
                .entry((call.port.clone(), call.method.clone()))
                .or_default()
                .push_back(call.clone());
        }
        Self { name: cassette.name.clone(), pending }
    }

    /// Loads a YAML cassette written by a recording run.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a cassette.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read cassette {}: {e}", path.display()))?;
        let cassette: Cassette = serde_yaml::from_str(&yaml)
            .map_err(|e| format!("Invalid cassette {}: {e}", path.display()))?;
        Ok(Self::new(&cassette))
    }

    /// Takes the next recorded output of `port::method`.
    ///
    /// # Panics
    ///
    /// Panics when the replayed run makes a call the cassette has no output
    /// left for, meaning it has diverged from the recorded run.
    pub fn next_output(&mut self, port: &str, method: &str) -> Value {
        let key = (port.to_string(), method.to_string());
        match self.pending.get_mut(&key).and_then(VecDeque::pop_front) {
            Some(call) => call.output,
            None => panic!(
                "cassette {:?} has no {port}::{method} call left to replay (remaining: {})",
                self.name,
                self.remaining()
            ),
        }
    }

    /// Unreplayed calls per `port::method`, for diagnostics.
    fn remaining(&self) -> String {
        let counts: BTreeMap<String, usize> = self
            .pending
            .iter()
            .filter(|(_, queue)| !queue.is_empty())
            .map(|((port, method), queue)| (format!("{port}::{method}"), queue.len()))
            .collect();
        if counts.is_empty() {
            return "none".to_string();
        }
        counts.iter().map(|(call, n)| format!("{call} x{n}")).collect::<Vec<_>>().join(", ")
    }
}
