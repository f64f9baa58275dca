//! Adapters implementing the port traits.
//!
//! `live` talks to the real world, `recording` wraps a live adapter and
//! captures its results, `replaying` serves results back from a cassette.

pub mod live;
pub mod recording;
pub mod replaying;
