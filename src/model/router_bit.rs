//! Router-bit record held by the collection store.

use serde::{Deserialize, Serialize};

/// A router bit as stored in the collection.
///
/// `id` is minted by the store on `add` and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouterBit {
    /// Globally unique identifier.
    pub id: String,
    /// Free-text display name (e.g., "1/4 End Mill").
    pub name: String,
    /// Free-text bit type. Not restricted to a fixed set at this layer.
    #[serde(rename = "type")]
    pub bit_type: String,
    /// Cutting diameter.
    pub diameter: f64,
    /// Free-text description.
    pub description: String,
}

/// A router bit before an identifier has been assigned.
///
/// This is the input accepted by `RouterBitStore::add`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRouterBit {
    /// Free-text display name.
    pub name: String,
    /// Free-text bit type.
    #[serde(rename = "type")]
    pub bit_type: String,
    /// Cutting diameter.
    pub diameter: f64,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl NewRouterBit {
    /// Creates a new unidentified router bit from its fields.
    pub fn new(
        name: impl Into<String>,
        bit_type: impl Into<String>,
        diameter: f64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            bit_type: bit_type.into(),
            diameter,
            description: description.into(),
        }
    }

    /// Merges the given identifier with these fields into a full record.
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> RouterBit {
        RouterBit {
            id: id.into(),
            name: self.name,
            bit_type: self.bit_type,
            diameter: self.diameter,
            description: self.description,
        }
    }
}
