//! Engine-wide defaults for the map widget.
//! Keeping them in a single place makes it easier to tweak widget magic numbers.

use crate::core::geo::LatLng;

/// Latitude of the center used when nothing else resolves.
pub const FALLBACK_CENTER_LAT: f64 = 51.9107963;

/// Longitude of the center used when nothing else resolves.
pub const FALLBACK_CENTER_LNG: f64 = 4.4789878;

/// Center the map falls back to when no location and no default address resolve.
pub const FALLBACK_CENTER: LatLng = LatLng {
    lat: FALLBACK_CENTER_LAT,
    lng: FALLBACK_CENTER_LNG,
};

/// Zoom level applied when the configuration does not specify one.
pub const DEFAULT_ZOOM_LEVEL: u8 = 7;

/// Default widget width (percentage of the container).
pub const DEFAULT_WIDTH: f64 = 100.0;

/// Default widget height (percentage of the rendered width).
pub const DEFAULT_HEIGHT: f64 = 75.0;

/// Prefix of the alert raised for an address that could not be geocoded.
pub const ADDRESS_NOT_FOUND_PREFIX: &str = "Can not find address";
