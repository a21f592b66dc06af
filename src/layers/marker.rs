use serde::{Deserialize, Serialize};

use crate::core::{geo::LatLng, location::ResolvedLocation};

/// A marker requested from the map surface
///
/// Styling is left entirely to the surface; the engine only decides where
/// markers go and in which order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    id: String,
    position: LatLng,
    title: Option<String>,
}

impl Marker {
    pub fn new(id: String, position: LatLng) -> Self {
        Self {
            id,
            position,
            title: None,
        }
    }

    /// Builds the marker for the location at input index `slot`
    ///
    /// Failed or coordinate-less locations have no marker.
    pub fn for_location(slot: usize, location: &ResolvedLocation) -> Option<Self> {
        let position = location.position()?;
        let marker = Self::new(format!("marker-{}", slot), position);
        Some(match location.location.lookup_address() {
            Some(address) => marker.with_title(address.to_string()),
            None => marker,
        })
    }

    pub fn with_title(mut self, title: String) -> Self {
        self.title = Some(title);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
