//! Recording adapter for the `Clock` port.

use chrono::{DateTime, Utc};

use serde_json::Value;

use super::{record, to_json, SharedRecorder};
use crate::ports::Clock;

/// Records clock readings while delegating to an inner implementation.
pub struct RecordingClock {
    inner: Box<dyn Clock>,
    recorder: SharedRecorder,
}

impl RecordingClock {
    /// Creates a recording clock wrapping `inner`.
    pub fn new(inner: Box<dyn Clock>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl Clock for RecordingClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.inner.now();
        record(&self.recorder, "clock", "now", Value::Null, to_json(&now));
        now
    }
}
