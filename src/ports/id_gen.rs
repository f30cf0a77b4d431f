//! ID generator port for run identifiers.

/// Generates unique identifiers.
///
/// Each reconciliation run gets an ID so reports from repeated capture
/// attempts can be told apart.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
