//! Recording adapters that capture port interactions to a cassette.
//!
//! Each adapter delegates to an inner implementation and appends the call's
//! input and output to a shared [`CassetteRecorder`].

pub mod clock;
pub mod filesystem;
pub mod id_gen;

pub use clock::RecordingClock;
pub use filesystem::RecordingFileSystem;
pub use id_gen::RecordingIdGenerator;

use std::fmt::Display;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde_json::{json, Value};

use crate::cassette::recorder::CassetteRecorder;

/// Shared handle to the recorder used by every recording adapter of a session.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Appends one port call to the session's cassette.
pub(crate) fn record(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: Value,
    output: Value,
) {
    recorder.lock().expect("recorder lock poisoned").record(port, method, input, output);
}

/// Encodes a fallible call as `{"ok": value}` or `{"err": message}`, the shape
/// [`crate::adapters::replaying`] decodes.
pub(crate) fn outcome<T: Serialize, E: Display>(result: &Result<T, E>) -> Value {
    match result {
        Ok(value) => json!({ "ok": to_json(value) }),
        Err(e) => json!({ "err": e.to_string() }),
    }
}

/// Port values are plain data and always serialize.
pub(crate) fn to_json<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("port value serializes to JSON")
}
