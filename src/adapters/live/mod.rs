//! Live adapters for real external interactions.

pub mod id_gen;

pub use id_gen::LiveIdGenerator;
