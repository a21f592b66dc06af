//! Collaborators injected by the host application
//!
//! The engine never reaches for ambient globals: the mapping provider, the
//! map surface it hands out and the user notification channel are all passed
//! in explicitly, which also lets tests substitute in-memory doubles.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::{
    core::{
        config::MapOptions,
        geo::{LatLng, LatLngBounds},
    },
    geocoding::Geocoder,
    layers::marker::Marker,
    Result,
};

/// A mounted map, available once the provider signalled readiness
pub trait MapSurface: Send + Sync {
    fn set_center(&self, center: LatLng);

    fn clear_markers(&self);

    fn place_marker(&self, marker: &Marker);

    fn fit_bounds(&self, bounds: &LatLngBounds);
}

/// What a ready provider hands over: the map and its geocoding service
#[derive(Clone)]
pub struct MapSession {
    pub surface: Arc<dyn MapSurface>,
    pub geocoder: Arc<dyn Geocoder>,
}

impl MapSession {
    pub fn new(surface: Arc<dyn MapSurface>, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { surface, geocoder }
    }
}

impl std::fmt::Debug for MapSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapSession").finish_non_exhaustive()
    }
}

/// Bootstraps the mapping SDK
///
/// The returned future is the readiness signal: it completes once the map
/// and geocoder can be used.
#[async_trait]
pub trait MapProvider: Send + Sync {
    async fn load(&self, api_key: Option<&str>, options: &MapOptions) -> Result<MapSession>;
}

/// Provider whose session already exists, e.g. a headless surface
pub struct PreparedProvider {
    session: MapSession,
}

impl PreparedProvider {
    pub fn new(session: MapSession) -> Self {
        Self { session }
    }
}

#[async_trait]
impl MapProvider for PreparedProvider {
    async fn load(&self, api_key: Option<&str>, options: &MapOptions) -> Result<MapSession> {
        log::debug!(
            "prepared provider loading (key configured: {}, zoom {})",
            api_key.is_some(),
            options.zoom_level
        );
        Ok(self.session.clone())
    }
}

/// Fire-and-forget channel for user-visible errors
pub trait Notifier: Send + Sync {
    fn error(&self, message: &str);
}

/// Reports errors through the `log` facade only
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn error(&self, message: &str) {
        log::error!("{}", message);
    }
}

/// Forwards errors to a receiver owned by the host UI loop
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<String>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, Receiver<String>) {
        let (tx, rx) = unbounded();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn error(&self, message: &str) {
        if self.tx.send(message.to_string()).is_err() {
            log::warn!("notification dropped, receiver gone: {}", message);
        }
    }
}

/// Headless map surface that keeps what it was asked to show
#[derive(Debug, Default)]
pub struct MemorySurface {
    center: Mutex<Option<LatLng>>,
    markers: Mutex<Vec<Marker>>,
    bounds: Mutex<Option<LatLngBounds>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn center(&self) -> Option<LatLng> {
        self.center.lock().ok().and_then(|center| *center)
    }

    pub fn markers(&self) -> Vec<Marker> {
        self.markers
            .lock()
            .map(|markers| markers.clone())
            .unwrap_or_default()
    }

    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.bounds.lock().ok().and_then(|bounds| bounds.clone())
    }
}

impl MapSurface for MemorySurface {
    fn set_center(&self, center: LatLng) {
        if let Ok(mut current) = self.center.lock() {
            *current = Some(center);
        }
    }

    fn clear_markers(&self) {
        if let Ok(mut markers) = self.markers.lock() {
            markers.clear();
        }
        if let Ok(mut bounds) = self.bounds.lock() {
            *bounds = None;
        }
    }

    fn place_marker(&self, marker: &Marker) {
        if let Ok(mut markers) = self.markers.lock() {
            markers.push(marker.clone());
        }
    }

    fn fit_bounds(&self, bounds: &LatLngBounds) {
        if let Ok(mut current) = self.bounds.lock() {
            *current = Some(bounds.clone());
        }
    }
}
