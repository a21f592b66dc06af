//! Widget state controller
//!
//! Owns the observable view state and drives resolution cycles. Inputs that
//! affect resolution (locations, default-center address) bump a monotonic
//! generation token; a cycle captures the token when it starts and only
//! commits its results if the token is still current when it finishes. Stale
//! cycles are dropped on arrival, so the last input always wins without
//! cancelling in-flight lookups.
//!
//! Once the provider is ready, every input change that needs resolution
//! starts a cycle by itself. Before that the controller is `Uninitialized`:
//! inputs are buffered and the box style is kept current, but nothing is
//! geocoded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::{
    core::{
        center::{geocode_default_center, location_center},
        config::WidgetConfig,
        constants::FALLBACK_CENTER,
        dimensions::{BoxStyle, DimensionSpec},
        geo::{LatLng, LatLngBounds},
        location::{classify, Location, ResolvedLocation, Slotted},
    },
    geocoding::resolve_all,
    layers::marker::Marker,
    runtime::{self, AsyncHandle},
    widget::host::{MapProvider, MapSession, Notifier},
    Result,
};

/// Lifecycle of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Provider not ready yet, inputs are buffered
    Uninitialized,
    /// State reflects the latest inputs
    Idle,
    /// Inputs changed and their resolution has not been committed yet
    Resolving,
}

/// Everything the widget renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    /// Coordinate-given and geocoded locations in input order, failures included
    pub locations: Vec<ResolvedLocation>,
    pub markers: Vec<Marker>,
    pub center: LatLng,
    /// Area covering all markers when auto zoom is on and there are several
    pub bounds: Option<LatLngBounds>,
    pub alert_message: Option<String>,
    pub style: BoxStyle,
}

impl ViewState {
    fn initial(style: BoxStyle) -> Self {
        Self {
            locations: Vec::new(),
            markers: Vec::new(),
            center: FALLBACK_CENTER,
            bounds: None,
            alert_message: None,
            style,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial(DimensionSpec::default().resolve())
    }
}

/// Result of running a resolution cycle
#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    /// The cycle was current and its results are now visible
    Committed(ViewState),
    /// Inputs changed while the cycle ran; its results were discarded
    Superseded { generation: u64, current: u64 },
}

impl CycleOutcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

struct Shared {
    config: Mutex<WidgetConfig>,
    session: Mutex<Option<MapSession>>,
    state: Mutex<ViewState>,
    generation: AtomicU64,
    applied: AtomicU64,
    notifier: Arc<dyn Notifier>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the view state of one widget instance
///
/// Cloning yields another handle to the same widget.
#[derive(Clone)]
pub struct WidgetController {
    shared: Arc<Shared>,
}

impl WidgetController {
    /// Creates an uninitialized controller, rejecting invalid configurations
    pub fn new(config: WidgetConfig, notifier: Arc<dyn Notifier>) -> Result<Self> {
        config.validate()?;
        let state = ViewState::initial(config.box_style());
        Ok(Self {
            shared: Arc::new(Shared {
                config: Mutex::new(config),
                session: Mutex::new(None),
                state: Mutex::new(state),
                generation: AtomicU64::new(0),
                applied: AtomicU64::new(0),
                notifier,
            }),
        })
    }

    /// Waits for the provider, attaches its session and runs the first cycle
    pub async fn initialize(&self, provider: &dyn MapProvider) -> Result<CycleOutcome> {
        let (api_key, options) = {
            let config = lock(&self.shared.config);
            (config.bootstrap_key().map(str::to_string), config.options.clone())
        };

        let session = provider.load(api_key.as_deref(), &options).await?;
        self.attach(session);

        // attach() guarantees a session, so a cycle is always available here
        match self.refresh().await {
            Some(outcome) => Ok(outcome),
            None => Err(crate::MapError::NotReady),
        }
    }

    /// Marks the provider ready; buffered inputs become eligible for resolution
    pub fn attach(&self, session: MapSession) {
        *lock(&self.shared.session) = Some(session);
        let generation = self.bump_generation();
        log::info!("map provider ready, resolution generation {}", generation);
    }

    pub fn is_ready(&self) -> bool {
        lock(&self.shared.session).is_some()
    }

    pub fn phase(&self) -> Phase {
        if !self.is_ready() {
            Phase::Uninitialized
        } else if self.shared.applied.load(Ordering::SeqCst) == self.generation() {
            Phase::Idle
        } else {
            Phase::Resolving
        }
    }

    /// The current generation token
    pub fn generation(&self) -> u64 {
        self.shared.generation.load(Ordering::SeqCst)
    }

    pub fn config(&self) -> WidgetConfig {
        lock(&self.shared.config).clone()
    }

    /// A copy of the current view state
    pub fn snapshot(&self) -> ViewState {
        lock(&self.shared.state).clone()
    }

    /// Replaces the whole configuration
    ///
    /// Returns whether the change needs a new resolution cycle. Once the
    /// provider is ready such a cycle is started right away through
    /// [`runtime::spawn`]; an invalid configuration is rejected and leaves the
    /// widget untouched.
    pub fn set_config(&self, config: WidgetConfig) -> Result<bool> {
        self.update_config(|current| *current = config)
    }

    pub fn set_locations(&self, locations: Vec<Location>) -> Result<bool> {
        self.update_config(|config| config.locations = locations)
    }

    pub fn set_default_center_address(&self, address: Option<String>) -> Result<bool> {
        self.update_config(|config| config.default_center_address = address)
    }

    pub fn set_dimensions(&self, dimensions: DimensionSpec) -> Result<bool> {
        self.update_config(|config| config.dimensions = dimensions)
    }

    fn update_config(&self, apply: impl FnOnce(&mut WidgetConfig)) -> Result<bool> {
        let needs_resolution = {
            let mut config = lock(&self.shared.config);
            let mut next = config.clone();
            apply(&mut next);
            next.validate()?;

            // The box style never waits for geocoding
            lock(&self.shared.state).style = next.box_style();

            let needs_resolution = config.needs_resolution(&next);
            *config = next;
            if needs_resolution {
                let generation = self.bump_generation();
                log::debug!("inputs changed, resolution generation {}", generation);
            }
            needs_resolution
        };

        // config lock released: an inline cycle takes it again
        if needs_resolution {
            self.schedule_refresh();
        }
        Ok(needs_resolution)
    }

    fn bump_generation(&self) -> u64 {
        self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Captures the current inputs for a resolution cycle
    ///
    /// Returns `None` while the provider is not ready.
    pub fn begin_cycle(&self) -> Option<ResolutionCycle> {
        let session = lock(&self.shared.session).clone()?;
        let config = lock(&self.shared.config).clone();
        let generation = self.generation();

        log::debug!(
            "starting resolution cycle {} for {} locations",
            generation,
            config.locations.len()
        );

        Some(ResolutionCycle {
            generation,
            locations: config.locations.clone(),
            center_address: config.center_address().map(str::to_string),
            auto_zoom: config.options.auto_zoom,
            session,
            shared: self.shared.clone(),
        })
    }

    /// Runs a cycle for the current inputs, `None` while not ready
    pub async fn refresh(&self) -> Option<CycleOutcome> {
        let cycle = self.begin_cycle()?;
        Some(cycle.run().await)
    }

    /// Starts a cycle without waiting for it, `None` while not ready
    ///
    /// Inside a Tokio runtime the cycle runs in the background; elsewhere it
    /// completes before this returns.
    pub fn schedule_refresh(&self) -> Option<Box<dyn AsyncHandle>> {
        let cycle = self.begin_cycle()?;
        Some(runtime::spawn(async move {
            cycle.run().await;
        }))
    }
}

impl std::fmt::Debug for WidgetController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetController")
            .field("phase", &self.phase())
            .field("generation", &self.generation())
            .finish()
    }
}

/// One pass of classifying, geocoding and merging for a fixed set of inputs
pub struct ResolutionCycle {
    generation: u64,
    locations: Vec<Location>,
    center_address: Option<String>,
    auto_zoom: bool,
    session: MapSession,
    shared: Arc<Shared>,
}

impl ResolutionCycle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub async fn run(self) -> CycleOutcome {
        let partition = classify(&self.locations);
        let geocoder = self.session.geocoder.as_ref();

        let (batch, default_center) = futures::join!(
            resolve_all(&partition.address_given, geocoder),
            async {
                match self.center_address.as_deref() {
                    Some(address) => geocode_default_center(address, geocoder).await,
                    None => None,
                }
            }
        );

        let alert_message = batch.alert_message();
        let mut merged: Vec<Slotted<ResolvedLocation>> = partition
            .coordinate_given
            .into_iter()
            .map(|entry| entry.map(ResolvedLocation::passthrough))
            .chain(batch.resolved)
            .collect();
        merged.sort_by_key(|entry| entry.slot);

        let markers: Vec<Marker> = merged
            .iter()
            .filter_map(|entry| Marker::for_location(entry.slot, &entry.value))
            .collect();
        let locations: Vec<ResolvedLocation> = merged.into_iter().map(|entry| entry.value).collect();
        let center = default_center.unwrap_or_else(|| location_center(&locations));
        let bounds = if self.auto_zoom && markers.len() > 1 {
            LatLngBounds::from_points(markers.iter().map(Marker::position))
        } else {
            None
        };

        self.commit(locations, markers, center, bounds, alert_message)
    }

    fn commit(
        self,
        locations: Vec<ResolvedLocation>,
        markers: Vec<Marker>,
        center: LatLng,
        bounds: Option<LatLngBounds>,
        alert_message: Option<String>,
    ) -> CycleOutcome {
        let committed = {
            let mut state = lock(&self.shared.state);

            let current = self.shared.generation.load(Ordering::SeqCst);
            if current != self.generation {
                log::warn!(
                    "discarding results of superseded cycle {} (current {})",
                    self.generation,
                    current
                );
                return CycleOutcome::Superseded {
                    generation: self.generation,
                    current,
                };
            }

            state.locations = locations;
            state.markers = markers;
            state.center = center;
            state.bounds = bounds;
            state.alert_message = alert_message;

            let surface = &self.session.surface;
            surface.clear_markers();
            for marker in &state.markers {
                surface.place_marker(marker);
            }
            surface.set_center(state.center);
            if let Some(bounds) = &state.bounds {
                surface.fit_bounds(bounds);
            }

            self.shared.applied.store(self.generation, Ordering::SeqCst);
            state.clone()
        };

        log::debug!(
            "committed cycle {}: {} markers, center {}",
            self.generation,
            committed.markers.len(),
            committed.center
        );

        if let Some(message) = &committed.alert_message {
            self.shared.notifier.error(message);
        }

        CycleOutcome::Committed(committed)
    }
}
