//! Cassettes: recorded port interactions for deterministic replay.
//!
//! A cassette is a YAML file listing every call made through a port during
//! one command run. Tests replay them to drive commands without a real
//! resource file or OCR output.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
