use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{GeocodeError, Geocoder};
use crate::core::geo::LatLng;

/// In-memory geocoder answering from a fixed address table
///
/// Unknown addresses resolve to [`GeocodeError::ZeroResults`]. Every lookup
/// is recorded so callers can check which addresses were actually queried.
#[derive(Debug, Default)]
pub struct TableGeocoder {
    entries: HashMap<String, Result<LatLng, GeocodeError>>,
    calls: Mutex<Vec<String>>,
}

impl TableGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, LatLng)>,
        S: Into<String>,
    {
        entries
            .into_iter()
            .fold(Self::new(), |table, (address, position)| {
                table.with_entry(address, position)
            })
    }

    pub fn with_entry(mut self, address: impl Into<String>, position: LatLng) -> Self {
        self.entries.insert(address.into(), Ok(position));
        self
    }

    /// Makes lookups of `address` fail with `error`
    pub fn with_error(mut self, address: impl Into<String>, error: GeocodeError) -> Self {
        self.entries.insert(address.into(), Err(error));
        self
    }

    /// Addresses looked up so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Geocoder for TableGeocoder {
    async fn geocode(&self, address: &str) -> Result<LatLng, GeocodeError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(address.to_string());
        }

        self.entries
            .get(address)
            .cloned()
            .unwrap_or(Err(GeocodeError::ZeroResults))
    }
}
