//! Port traits defining external boundaries.
//!
//! The store reaches outside the process only to mint identifiers.
//! Implementations live in `src/adapters/`.

pub mod id_gen;

pub use id_gen::IdGenerator;
