use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use moka::future::Cache;
use serde::Deserialize;

use crate::schemas::AppState;
use crate::service::DataService;

/// Application configuration, layered from defaults, an optional `.env`
/// file, and `ARGOVIEW_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_address: String,
    /// Optional CSV resource to hydrate profiles from at startup
    pub csv_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .set_default("bind_address", "0.0.0.0:3000")?
            .add_source(config::Environment::with_prefix("ARGOVIEW"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Initialize application state: hydrate the data service once and set up
/// the cache for derived payloads.
pub fn initialize_app_state(csv_path: Option<&Path>) -> AppState {
    tracing::info!(csv = csv_path.is_some(), "initializing data service");
    let service = DataService::load(csv_path);

    // Derived payloads are cheap but requested on every poll tick.
    let cache = Cache::builder()
        .max_capacity(1000)
        .time_to_live(Duration::from_secs(300)) // 5 minutes
        .build();

    AppState {
        service: Arc::new(service),
        cache,
    }
}
