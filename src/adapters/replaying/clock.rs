//! Replaying adapter for the `Clock` port.

use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::clock::Clock;

/// Serves recorded clock readings from a cassette.
pub struct ReplayingClock {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingClock {
    /// Creates a replaying clock from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl Clock for ReplayingClock {
    fn now(&self) -> DateTime<Utc> {
        let output =
            self.replayer.lock().expect("replayer lock poisoned").next_output("clock", "now");
        serde_json::from_value(output)
            .unwrap_or_else(|e| panic!("replayed clock::now is not a timestamp: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use serde_json::json;

    #[test]
    fn serves_recorded_time() {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            commit: "abc".into(),
            interactions: vec![Interaction {
                seq: 0,
                port: "clock".into(),
                method: "now".into(),
                input: json!(null),
                output: json!("2025-11-14T09:15:00Z"),
            }],
        };
        let clock = ReplayingClock::new(CassetteReplayer::new(&cassette));
        assert_eq!(clock.now().to_rfc3339(), "2025-11-14T09:15:00+00:00");
    }
}
