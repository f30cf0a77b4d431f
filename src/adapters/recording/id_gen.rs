//! Recording adapter for the `IdGenerator` port.

use serde_json::Value;

use super::{record, SharedRecorder};
use crate::ports::IdGenerator;

/// Records generated IDs while delegating to an inner implementation.
pub struct RecordingIdGenerator {
    inner: Box<dyn IdGenerator>,
    recorder: SharedRecorder,
}

impl RecordingIdGenerator {
    /// Creates a recording ID generator wrapping `inner`.
    pub fn new(inner: Box<dyn IdGenerator>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl IdGenerator for RecordingIdGenerator {
    fn generate_id(&self) -> String {
        let id = self.inner.generate_id();
        record(&self.recorder, "id_gen", "generate_id", Value::Null, Value::String(id.clone()));
        id
    }
}
