//! Location inputs and their classification
//!
//! A widget receives a heterogeneous list of locations: some carry explicit
//! coordinates, some only a free-text address, and some carry neither. The
//! normalizer splits them into those groups while remembering each entry's
//! input slot so resolved results can be merged back in input order.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// One configured location entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Location {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// How a location will be handled by the resolution engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    /// Carries usable coordinates, never geocoded
    CoordinateGiven,
    /// Carries a non-blank address that needs a lookup
    AddressGiven,
    /// Neither renders nor resolves
    Inert,
}

impl Location {
    pub fn from_address(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            ..Default::default()
        }
    }

    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            address: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// Coordinates when both are present, finite and within range
    pub fn coordinates(&self) -> Option<LatLng> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)).filter(LatLng::is_valid),
            _ => None,
        }
    }

    /// The address as configured, `None` when missing or blank
    pub fn lookup_address(&self) -> Option<&str> {
        self.address
            .as_deref()
            .filter(|address| !address.trim().is_empty())
    }

    pub fn kind(&self) -> LocationKind {
        if self.coordinates().is_some() {
            LocationKind::CoordinateGiven
        } else if self.lookup_address().is_some() {
            LocationKind::AddressGiven
        } else {
            LocationKind::Inert
        }
    }

    fn has_partial_coordinates(&self) -> bool {
        self.latitude.is_some() || self.longitude.is_some()
    }
}

/// A location after a resolution cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLocation {
    #[serde(flatten)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub failed: bool,
}

impl ResolvedLocation {
    /// Attaches looked-up coordinates, keeping the entry's other fields
    pub fn resolved(location: Location, position: LatLng) -> Self {
        Self {
            location: Location {
                latitude: Some(position.lat),
                longitude: Some(position.lng),
                ..location
            },
            failed: false,
        }
    }

    /// Passes a coordinate-given entry through unchanged
    pub fn passthrough(location: Location) -> Self {
        Self {
            location,
            failed: false,
        }
    }

    pub fn failed(location: Location) -> Self {
        Self {
            location,
            failed: true,
        }
    }

    /// Where a marker belongs, `None` for failed entries
    pub fn position(&self) -> Option<LatLng> {
        if self.failed {
            None
        } else {
            self.location.coordinates()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failed
    }
}

/// A value tagged with the index of the input entry it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Slotted<T = Location> {
    pub slot: usize,
    pub value: T,
}

impl<T> Slotted<T> {
    pub fn new(slot: usize, value: T) -> Self {
        Self { slot, value }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Slotted<U> {
        Slotted {
            slot: self.slot,
            value: f(self.value),
        }
    }
}

/// Input locations split by kind, each group in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationPartition {
    pub coordinate_given: Vec<Slotted>,
    pub address_given: Vec<Slotted>,
    pub inert: Vec<Slotted>,
}

impl LocationPartition {
    pub fn len(&self) -> usize {
        self.coordinate_given.len() + self.address_given.len() + self.inert.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits locations into coordinate-given, address-given and inert groups
///
/// Relative order is preserved within every group. Malformed entries are
/// never an error; they land in `inert`.
pub fn classify(locations: &[Location]) -> LocationPartition {
    let mut partition = LocationPartition::default();

    for (slot, location) in locations.iter().enumerate() {
        let entry = Slotted::new(slot, location.clone());
        match location.kind() {
            LocationKind::CoordinateGiven => partition.coordinate_given.push(entry),
            LocationKind::AddressGiven => partition.address_given.push(entry),
            LocationKind::Inert => {
                if location.has_partial_coordinates() {
                    log::warn!(
                        "location #{} has unusable coordinates ({:?}, {:?}), ignoring it",
                        slot,
                        location.latitude,
                        location.longitude
                    );
                }
                partition.inert.push(entry);
            }
        }
    }

    partition
}
