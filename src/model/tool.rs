//! Machining tool schema with feed, speed and geometry parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::coordinate::BitCoordinate;

/// The kind of cutter a [`Tool`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolType {
    /// Flat-bottomed end mill.
    #[serde(rename = "flat end mill")]
    FlatEndMill,
    /// Face mill for surfacing.
    #[serde(rename = "face mill")]
    FaceMill,
    /// Chamfer mill.
    #[serde(rename = "chamfer mill")]
    ChamferMill,
    /// Dovetail mill.
    #[serde(rename = "dovetail mill")]
    DovetailMill,
}

impl ToolType {
    /// All tool types in declaration order.
    pub const ALL: [Self; 4] =
        [Self::FlatEndMill, Self::FaceMill, Self::ChamferMill, Self::DovetailMill];

    /// Returns the wire name (e.g., `"flat end mill"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FlatEndMill => "flat end mill",
            Self::FaceMill => "face mill",
            Self::ChamferMill => "chamfer mill",
            Self::DovetailMill => "dovetail mill",
        }
    }
}

/// Unit system for a tool's linear dimensions and feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolUnit {
    /// Imperial inches.
    Inches,
    /// Metric millimeters.
    Millimeters,
}

impl ToolUnit {
    /// Returns the wire name (e.g., `"inches"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inches => "inches",
            Self::Millimeters => "millimeters",
        }
    }
}

/// Error returned when a tool type or unit string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseToolFieldError {
    /// The string is not one of the known tool types.
    #[error("unknown tool type: {0:?}")]
    UnknownType(String),
    /// The string is not one of the known units.
    #[error("unknown tool unit: {0:?}")]
    UnknownUnit(String),
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolType {
    type Err = ParseToolFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseToolFieldError::UnknownType(s.to_string()))
    }
}

impl fmt::Display for ToolUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolUnit {
    type Err = ParseToolFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inches" => Ok(Self::Inches),
            "millimeters" => Ok(Self::Millimeters),
            other => Err(ParseToolFieldError::UnknownUnit(other.to_string())),
        }
    }
}

/// A machining tool with its cutting parameters.
///
/// Field names match the tool-library format used by CAM exports, so a
/// record can be read straight from JSON or YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    /// Tool identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Cutter kind.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
    /// Cutting diameter.
    pub diameter: f64,
    /// Free-text description.
    pub description: String,
    /// Slot number in the tool changer.
    pub tool_number: u32,
    /// Unit system for all dimensions below.
    pub tool_unit: ToolUnit,
    /// Gauge length of the tool assembly.
    pub tool_assembly_gauge_length: f64,
    /// Body length.
    pub tool_body_length: f64,
    /// Cutting feed rate.
    pub tool_feed_cutting: f64,
    /// Entry feed rate.
    pub tool_feed_entry: f64,
    /// Exit feed rate.
    pub tool_feed_exit: f64,
    /// Feed per spindle revolution.
    pub tool_feed_per_revolution: f64,
    /// Feed per tooth (chip load).
    pub tool_feed_per_tooth: f64,
    /// Plunge feed rate.
    pub tool_feed_plunge: f64,
    /// Ramp feed rate.
    pub tool_feed_ramp: f64,
    /// Transition feed rate.
    pub tool_feed_transition: f64,
    /// Flute length.
    pub tool_flute_length: f64,
    /// Number of flutes.
    pub tool_number_of_flutes: u32,
    /// Overall length.
    pub tool_overall_length: f64,
    /// Vendor product identifier, if known.
    pub tool_product_id: Option<String>,
    /// Vendor product page, if known.
    pub tool_product_link: Option<String>,
    /// Spindle speed while ramping.
    pub tool_ramp_spindle_speed: f64,
    /// Shaft (shank) diameter.
    pub tool_shaft_diameter: f64,
    /// Shoulder diameter.
    pub tool_shoulder_diameter: f64,
    /// Shoulder length.
    pub tool_shoulder_length: f64,
    /// Spindle speed.
    pub tool_spindle_speed: f64,
    /// Surface speed.
    pub tool_surface_speed: f64,
    /// Vendor name, if known.
    pub tool_vendor: Option<String>,
    /// Z coordinates recorded against this tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Vec<BitCoordinate>>,
}
