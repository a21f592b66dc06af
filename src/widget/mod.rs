pub mod controller;
pub mod host;

pub use controller::{CycleOutcome, Phase, ResolutionCycle, ViewState, WidgetController};
pub use host::{
    ChannelNotifier, LogNotifier, MapProvider, MapSession, MapSurface, MemorySurface, Notifier,
    PreparedProvider,
};
