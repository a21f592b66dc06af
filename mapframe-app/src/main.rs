use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use mapframe::prelude::*;
use serde::Deserialize;

/// Widget configuration plus the addresses the headless geocoder knows
#[derive(Debug, Deserialize)]
struct AppInput {
    #[serde(flatten)]
    widget: WidgetConfig,
    #[serde(default)]
    geocodes: HashMap<String, LatLng>,
}

/// Headless resolver: loads a widget configuration, resolves it once and
/// prints the resulting view state as JSON
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mapframe::init_logging();

    let path = std::env::args()
        .nth(1)
        .context("usage: mapframe-app <widget.json>")?;
    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
    let input: AppInput =
        serde_json::from_str(&json).with_context(|| format!("parsing {}", path))?;

    let surface = Arc::new(MemorySurface::new());
    let geocoder = Arc::new(TableGeocoder::from_entries(input.geocodes));
    let provider = PreparedProvider::new(MapSession::new(surface.clone(), geocoder));

    let (notifier, alerts) = ChannelNotifier::new();
    let controller = WidgetController::new(input.widget, Arc::new(notifier))
        .with_context(|| format!("invalid widget configuration in {}", path))?;

    match controller.initialize(&provider).await? {
        CycleOutcome::Committed(state) => {
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        CycleOutcome::Superseded { generation, current } => {
            anyhow::bail!("cycle {} superseded by {}", generation, current);
        }
    }

    for alert in alerts.try_iter() {
        eprintln!("alert: {}", alert);
    }
    log::debug!("{} markers placed on the surface", surface.markers().len());

    Ok(())
}
