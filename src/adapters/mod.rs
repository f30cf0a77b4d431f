//! Adapter implementations of the port traits.
//!
//! - `live`: real disk, system clock, random UUIDs.
//! - `recording`: wraps another adapter and logs every call to a cassette.
//! - `replaying`: serves calls from a previously recorded cassette.

pub mod live;
pub mod recording;
pub mod replaying;
