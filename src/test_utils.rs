#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use crate::service::DataService;
    use axum::Router;
    use moka::future::Cache;
    use std::sync::Arc;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create AppState over the builtin sample fleet
    pub fn setup_test_app_state() -> AppState {
        AppState {
            service: Arc::new(DataService::builtin()),
            cache: Cache::new(100),
        }
    }

    /// Create AppState hydrated from CSV text
    pub fn setup_csv_app_state(csv: &str) -> AppState {
        AppState {
            service: Arc::new(DataService::from_csv_text(csv)),
            cache: Cache::new(100),
        }
    }

    /// Initialize tracing for tests, writing to STDERR so the harness
    /// captures it. RUST_LOG picks the level, WARN by default.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| level.to_uppercase().parse::<Level>().ok())
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub fn setup_test_app() -> Router {
        let _ = init_test_tracing();
        create_router(setup_test_app_state())
    }

    /// Create axum app backed by CSV text for testing
    pub fn setup_csv_test_app(csv: &str) -> Router {
        let _ = init_test_tracing();
        create_router(setup_csv_app_state(csv))
    }
}
