//! Geocoder backed by a Nominatim-compatible HTTP search endpoint

use async_trait::async_trait;
use serde::Deserialize;

use super::{GeocodeError, Geocoder};
use crate::{core::geo::LatLng, Result};

/// Public OpenStreetMap search endpoint
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org";

/// A custom User-Agent is required by public Nominatim servers
const USER_AGENT: &str = concat!("mapframe/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: None,
        })
    }

    /// Sends `key=<api_key>` with every request (LocationIQ-style hosts)
    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.endpoint)
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> std::result::Result<LatLng, GeocodeError> {
        let mut query = vec![("q", address), ("format", "json"), ("limit", "1")];
        if let Some(key) = self.api_key.as_deref() {
            query.push(("key", key));
        }

        log::debug!("searching '{}' at {}", address, self.endpoint);
        let response = self
            .client
            .get(self.search_url())
            .query(&query)
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(GeocodeError::Provider(format!("HTTP {}", response.status())));
        }

        let hits: Vec<SearchHit> = response
            .json()
            .await
            .map_err(|e| GeocodeError::Provider(e.to_string()))?;

        let hit = hits.into_iter().next().ok_or(GeocodeError::ZeroResults)?;
        parse_hit(&hit)
    }
}

fn parse_hit(hit: &SearchHit) -> std::result::Result<LatLng, GeocodeError> {
    let lat = hit
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Provider(format!("bad latitude '{}': {}", hit.lat, e)))?;
    let lng = hit
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Provider(format!("bad longitude '{}': {}", hit.lon, e)))?;
    Ok(LatLng::new(lat, lng))
}
