//! Map center selection

use crate::{
    core::{constants::FALLBACK_CENTER, geo::LatLng, location::ResolvedLocation},
    geocoding::Geocoder,
};

/// Center derived from locations alone
///
/// The first non-failed location wins; with none the fixed fallback keeps the
/// map renderable.
pub fn location_center(resolved: &[ResolvedLocation]) -> LatLng {
    resolved
        .iter()
        .find_map(ResolvedLocation::position)
        .unwrap_or(FALLBACK_CENTER)
}

/// Picks the map center, preferring a geocoded default-center address
///
/// A failing default-center lookup degrades to [`location_center`] and is
/// only logged.
pub async fn resolve_center(
    resolved: &[ResolvedLocation],
    default_center_address: Option<&str>,
    geocoder: &dyn Geocoder,
) -> LatLng {
    match default_center_address.filter(|a| !a.trim().is_empty()) {
        Some(address) => match geocode_default_center(address, geocoder).await {
            Some(center) => center,
            None => location_center(resolved),
        },
        None => location_center(resolved),
    }
}

/// Looks up the default-center address on its own
pub(crate) async fn geocode_default_center(address: &str, geocoder: &dyn Geocoder) -> Option<LatLng> {
    match geocoder.geocode(address).await {
        Ok(center) if center.is_valid() => {
            log::debug!("default center '{}' resolved to {}", address, center);
            Some(center)
        }
        Ok(center) => {
            log::warn!("default center '{}' resolved to invalid {}", address, center);
            None
        }
        Err(e) => {
            log::warn!("default center '{}' could not be resolved: {}", address, e);
            None
        }
    }
}
