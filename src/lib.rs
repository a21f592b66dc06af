//! # mapframe
//!
//! Location resolution and responsive layout engine for embeddable map
//! widgets.
//!
//! Given a list of locations (free-text addresses or explicit coordinates) the
//! engine geocodes the addresses through an injected provider, merges the
//! results back in input order, picks a map center, places markers and
//! reports lookup failures. The container size is computed independently from
//! a width/height/unit configuration.

pub mod core;
pub mod geocoding;
pub mod layers;
pub mod prelude;
pub mod runtime;
pub mod widget;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{MapOptions, WidgetConfig},
    dimensions::{resolve_dimensions, BoxStyle, DimensionSpec, HeightUnit, WidthUnit},
    geo::{LatLng, LatLngBounds},
    location::{classify, Location, LocationKind, LocationPartition, ResolvedLocation},
};

pub use geocoding::{resolve_all, GeocodeError, Geocoder, TableGeocoder};

pub use layers::marker::Marker;

pub use widget::{
    CycleOutcome, MapProvider, MapSession, MapSurface, Notifier, Phase, ViewState,
    WidgetController,
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "http-geocoder")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Map provider error: {0}")]
    Provider(String),

    #[error("Map provider is not ready")]
    NotReady,

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger` as the `log` backend, honouring `RUST_LOG`
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
