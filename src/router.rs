use crate::handlers::{
    charts::{get_chart_geometry, get_chart_svg},
    floats::{get_float, get_floats},
    health::health_check,
    panel::get_panel,
    profiles::get_profiles,
    statistics::get_statistics,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
#[cfg(not(test))]
use axum_prometheus::PrometheusMetricLayer;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(health_check))
        // Float fleet routes
        .route("/api/v1/floats", get(get_floats))
        .route("/api/v1/floats/:float_id", get(get_float))
        // Profile routes
        .route("/api/v1/profiles", get(get_profiles))
        // Panel statistics
        .route("/api/v1/statistics", get(get_statistics))
        // Chart geometry and rendered SVG
        .route("/api/v1/charts/:metric", get(get_chart_geometry))
        .route("/api/v1/charts/:metric/svg", get(get_chart_svg))
        // Combined panel snapshot
        .route("/api/v1/panel", get(get_panel))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    // The Prometheus recorder is a process-global singleton installed by
    // `PrometheusMetricLayer::pair()`. Wiring it (and the `/metrics` endpoint)
    // only outside `cfg(test)` keeps the production surface intact while
    // allowing the test suite to construct the router repeatedly without
    // panicking on a duplicate global recorder.
    #[cfg(not(test))]
    let router = {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router
            // Prometheus exposition
            .route("/metrics", get(move || async move { metric_handle.render() }))
            // Add middleware
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CompressionLayer::new())
                    .layer(prometheus_layer)
                    .layer(CorsLayer::permissive())
                    .layer(TimeoutLayer::new(Duration::from_secs(30))),
            )
    };

    #[cfg(test)]
    let router = router
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive())
                .layer(TimeoutLayer::new(Duration::from_secs(30))),
        );

    router.with_state(state)
}
