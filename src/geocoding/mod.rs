//! Address lookup
//!
//! The mapping provider owns the actual geocoding service; the engine only
//! sees it through the [`Geocoder`] trait so tests and hosts can inject their
//! own implementation.

pub mod orchestrator;
pub mod table;

#[cfg(feature = "http-geocoder")]
pub mod nominatim;

use async_trait::async_trait;

use crate::core::geo::LatLng;

pub use orchestrator::{resolve_all, LookupFailure, ResolutionBatch};
pub use table::TableGeocoder;

#[cfg(feature = "http-geocoder")]
pub use nominatim::NominatimGeocoder;

/// Reasons a single address lookup can fail
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeocodeError {
    #[error("no results for address")]
    ZeroResults,

    #[error("provider error: {0}")]
    Provider(String),

    #[error("network error: {0}")]
    Network(String),
}

/// Resolves free-text addresses to coordinates
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<LatLng, GeocodeError>;
}
