//! Widget configuration surface
//!
//! Mirrors the properties a host application sets on the widget. Apart from
//! locations, the default-center address and the dimensions, everything here
//! is passed through to the mapping provider untouched.

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        constants::DEFAULT_ZOOM_LEVEL,
        dimensions::{BoxStyle, DimensionSpec},
        location::Location,
    },
    MapError, Result,
};

/// Interaction toggles and display options forwarded to the map provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapOptions {
    pub zoom_level: u8,
    pub auto_zoom: bool,
    pub option_drag: bool,
    pub option_scroll: bool,
    pub option_street_view: bool,
    pub option_zoom_control: bool,
    pub option_map_control: bool,
    /// Provider-specific style JSON, empty for the provider default
    pub map_styles: String,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            zoom_level: DEFAULT_ZOOM_LEVEL,
            auto_zoom: true,
            option_drag: true,
            option_scroll: true,
            option_street_view: true,
            option_zoom_control: true,
            option_map_control: true,
            map_styles: String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub api_key: Option<String>,
    pub locations: Vec<Location>,
    pub default_center_address: Option<String>,
    #[serde(flatten)]
    pub dimensions: DimensionSpec,
    #[serde(flatten)]
    pub options: MapOptions,
}

impl WidgetConfig {
    pub fn new(locations: Vec<Location>) -> Self {
        Self {
            locations,
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Rejects sizes no container can take
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.dimensions.width), ("height", self.dimensions.height)] {
            if !value.is_finite() || value < 0.0 {
                return Err(MapError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    pub fn with_default_center_address(mut self, address: impl Into<String>) -> Self {
        self.default_center_address = Some(address.into());
        self
    }

    pub fn with_dimensions(mut self, dimensions: DimensionSpec) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Key used to bootstrap the provider, `None` selects its default key path
    pub fn bootstrap_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// The default-center address when it is set and not blank
    pub fn center_address(&self) -> Option<&str> {
        self.default_center_address
            .as_deref()
            .filter(|address| !address.trim().is_empty())
    }

    pub fn box_style(&self) -> BoxStyle {
        self.dimensions.resolve()
    }

    /// Whether switching to `other` needs a new resolution cycle
    ///
    /// Auto zoom counts because the fitted bounds are produced by the cycle.
    pub fn needs_resolution(&self, other: &WidgetConfig) -> bool {
        self.locations != other.locations
            || self.center_address() != other.center_address()
            || self.options.auto_zoom != other.options.auto_zoom
    }
}
