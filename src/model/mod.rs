//! Data model for router bits and CNC tooling.
//!
//! `RouterBit` is the record held by the store. `Tool` and `BitCoordinate`
//! are richer schemas that describe machining tools; they carry no
//! behavior beyond (de)serialization.

mod coordinate;
mod router_bit;
mod tool;

pub use coordinate::BitCoordinate;
pub use router_bit::{NewRouterBit, RouterBit};
pub use tool::{ParseToolFieldError, Tool, ToolType, ToolUnit};
