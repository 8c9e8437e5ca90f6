use std::path::Path;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing::{debug, error, info, trace};

use crate::config::{initialize_app_state, AppConfig};
use crate::router::create_router;

/// Start the web server. CLI arguments take precedence over the loaded
/// configuration.
pub async fn serve(bind_address: Option<&str>, csv_path: Option<&Path>) -> Result<()> {
    trace!("Entering serve function");
    info!("Argoview application starting up");

    let config = AppConfig::load()?;
    let bind_address = bind_address.unwrap_or(config.bind_address.as_str());
    let csv_path = csv_path.or(config.csv_path.as_deref());
    debug!("Bind address: {}", bind_address);
    debug!("CSV path: {:?}", csv_path);

    // Initialize application state
    trace!("Initializing application state");
    let state = initialize_app_state(csv_path);
    debug!("Application state initialized successfully");

    // Create router
    trace!("Creating application router");
    let app = create_router(state);
    debug!("Router created successfully");

    // Start server
    info!("Starting server on {}", bind_address);
    trace!("Attempting to bind TCP listener to {}", bind_address);
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => {
            debug!("Successfully bound to address: {}", bind_address);
            listener
        }
        Err(e) => {
            error!("Failed to bind to address {}: {}", bind_address, e);
            return Err(e.into());
        }
    };

    info!("Argoview API server running on http://{}", bind_address);
    info!("Swagger UI available at http://{}/swagger-ui", bind_address);
    debug!("Server is ready to accept connections");

    trace!("Starting axum server");
    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        return Err(e.into());
    }

    info!("Server shutdown gracefully");
    Ok(())
}
