//! Responsive box sizing for the widget container
//!
//! Width is a plain CSS length. Height either becomes a direct `height`
//! (percentage of the parent) or is expressed through `padding-bottom`, which
//! browsers resolve against the element's own width and therefore keeps an
//! aspect ratio as the container resizes.

use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WidthUnit {
    #[default]
    Percentage,
    Pixels,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeightUnit {
    #[default]
    PercentageOfWidth,
    Pixels,
    PercentageOfParent,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DimensionSpec {
    pub width: f64,
    pub height: f64,
    pub width_unit: WidthUnit,
    pub height_unit: HeightUnit,
}

impl DimensionSpec {
    pub fn new(width: f64, height: f64, width_unit: WidthUnit, height_unit: HeightUnit) -> Self {
        Self {
            width,
            height,
            width_unit,
            height_unit,
        }
    }

    pub fn resolve(&self) -> BoxStyle {
        resolve_dimensions(self)
    }
}

impl Default for DimensionSpec {
    fn default() -> Self {
        Self::new(
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            WidthUnit::default(),
            HeightUnit::default(),
        )
    }
}

/// Inline style values for the widget wrapper
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxStyle {
    pub width: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<String>,
}

impl BoxStyle {
    /// Renders the style as a CSS declaration list
    pub fn to_css(&self) -> String {
        let mut declarations = vec![format!("width: {}", self.width)];
        if let Some(height) = &self.height {
            declarations.push(format!("height: {}", height));
        }
        if let Some(padding) = &self.padding_bottom {
            declarations.push(format!("padding-bottom: {}", padding));
        }
        declarations.join("; ")
    }
}

/// Maps a width/height/unit configuration to concrete style values
pub fn resolve_dimensions(spec: &DimensionSpec) -> BoxStyle {
    let width = match spec.width_unit {
        WidthUnit::Percentage => format!("{}%", spec.width),
        WidthUnit::Pixels => format!("{}px", spec.width),
    };

    let (height, padding_bottom) = match spec.height_unit {
        HeightUnit::PercentageOfWidth => (None, Some(format!("{}%", spec.height))),
        HeightUnit::Pixels => (None, Some(format!("{}px", spec.height))),
        HeightUnit::PercentageOfParent => (Some(format!("{}%", spec.height)), None),
    };

    BoxStyle {
        width,
        height,
        padding_bottom,
    }
}
