//! Port traits defining external boundaries.
//!
//! The alignment and reconciliation core never performs I/O. Everything that
//! touches the outside world (the resource file, the OCR output, the clock,
//! run IDs) goes through one of these traits. Implementations live in
//! `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod id_gen;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
