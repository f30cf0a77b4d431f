//! Replaying adapter for the `IdGenerator` port.

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::id_gen::IdGenerator;

/// Serves recorded run IDs from a cassette.
pub struct ReplayingIdGenerator {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingIdGenerator {
    /// Creates a replaying ID generator from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl IdGenerator for ReplayingIdGenerator {
    fn generate_id(&self) -> String {
        let output =
            self.replayer.lock().expect("replayer lock poisoned").next_output("id_gen", "generate_id");
        match output {
            serde_json::Value::String(id) => id,
            other => panic!("replayed id_gen::generate_id is not a string: {other}"),
        }
    }
}
