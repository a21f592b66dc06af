//! Prelude module for common mapframe types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use mapframe::prelude::*;`

pub use crate::core::{
    center::{location_center, resolve_center},
    config::{MapOptions, WidgetConfig},
    constants::FALLBACK_CENTER,
    dimensions::{resolve_dimensions, BoxStyle, DimensionSpec, HeightUnit, WidthUnit},
    geo::{LatLng, LatLngBounds},
    location::{classify, Location, LocationKind, LocationPartition, ResolvedLocation, Slotted},
};

pub use crate::geocoding::{
    resolve_all, GeocodeError, Geocoder, LookupFailure, ResolutionBatch, TableGeocoder,
};

#[cfg(feature = "http-geocoder")]
pub use crate::geocoding::NominatimGeocoder;

pub use crate::layers::marker::Marker;

pub use crate::widget::{
    ChannelNotifier, CycleOutcome, LogNotifier, MapProvider, MapSession, MapSurface,
    MemorySurface, Notifier, Phase, PreparedProvider, ResolutionCycle, ViewState,
    WidgetController,
};

pub use crate::runtime::{spawn, AsyncHandle};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;
