//! Named Z-axis coordinate attached to a tool.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named Z coordinate that belongs to a [`Tool`](super::Tool).
///
/// `bit_id` names the owning tool by identifier only; the coordinate does
/// not hold the tool itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BitCoordinate {
    /// Identifier of the tool this coordinate belongs to.
    pub bit_id: Uuid,
    /// Label for the coordinate (e.g., "touch-off").
    pub name: String,
    /// Z-axis value.
    pub z: f64,
}
