//! ID generator port for producing unique identifiers.

/// Produces identifiers that are unique across calls and processes.
///
/// Kept behind a trait so a recorded sequence can stand in for random
/// UUIDs during tests and replayed sessions.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier string.
    fn generate_id(&self) -> String;
}
