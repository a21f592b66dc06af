//! Fan-out/fan-in resolution of address-given locations

use futures::future::join_all;

use super::{GeocodeError, Geocoder};
use crate::core::{
    constants::ADDRESS_NOT_FOUND_PREFIX,
    location::{ResolvedLocation, Slotted},
};

/// A lookup that did not produce coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct LookupFailure {
    pub slot: usize,
    pub address: String,
    pub error: GeocodeError,
}

impl LookupFailure {
    /// The user-facing alert text for this failure
    pub fn message(&self) -> String {
        format!("{} {}", ADDRESS_NOT_FOUND_PREFIX, self.address)
    }
}

/// Outcome of resolving one batch of address-given locations
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolutionBatch {
    /// One entry per attempted lookup, in input order
    pub resolved: Vec<Slotted<ResolvedLocation>>,
    pub failures: Vec<LookupFailure>,
}

impl ResolutionBatch {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Alert for the batch: the last failure in input order wins
    pub fn alert_message(&self) -> Option<String> {
        self.failures.last().map(LookupFailure::message)
    }
}

/// Geocodes every address-given location concurrently
///
/// Failures are recorded per entry and never abort sibling lookups. Entries
/// whose address is blank are skipped without calling the geocoder.
pub async fn resolve_all(address_given: &[Slotted], geocoder: &dyn Geocoder) -> ResolutionBatch {
    let lookups = address_given.iter().filter_map(move |entry| {
        let address = entry.value.lookup_address()?;
        Some(async move { (entry, address, geocoder.geocode(address).await) })
    });

    let mut batch = ResolutionBatch::default();

    // join_all yields results in the order the futures were supplied
    for (entry, address, outcome) in join_all(lookups).await {
        let resolved = match outcome {
            Ok(position) if position.is_valid() => {
                log::debug!("geocoded '{}' to {}", address, position);
                ResolvedLocation::resolved(entry.value.clone(), position)
            }
            Ok(position) => {
                log::warn!("geocoder returned invalid position {} for '{}'", position, address);
                batch.failures.push(LookupFailure {
                    slot: entry.slot,
                    address: address.to_string(),
                    error: GeocodeError::Provider(format!("invalid position {}", position)),
                });
                ResolvedLocation::failed(entry.value.clone())
            }
            Err(error) => {
                log::warn!("failed to geocode '{}': {}", address, error);
                batch.failures.push(LookupFailure {
                    slot: entry.slot,
                    address: address.to_string(),
                    error,
                });
                ResolvedLocation::failed(entry.value.clone())
            }
        };
        batch.resolved.push(Slotted::new(entry.slot, resolved));
    }

    batch
}
