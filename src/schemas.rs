use std::sync::Arc;

use common::{AxisTick, ChartGeometry, ChartPoint, MetricKind, PanelSnapshot, PanelStatistics};
use moka::future::Cache;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

use crate::handlers::{floats::FloatResponse, profiles::ProfileResponse};
use crate::service::DataService;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// The in-memory data service, hydrated once at startup
    pub service: Arc<DataService>,
    /// Cache for derived payloads
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Statistics(PanelStatistics),
    Chart(ChartGeometry),
    Svg(String),
    Panel(PanelSnapshot),
}

/// Query parameters for the floats endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct FloatsQuery {
    /// Filter by status ("active" or "inactive")
    pub status: Option<String>,
}

/// Query parameters for the profiles endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProfilesQuery {
    /// Maximum number of profiles to return
    pub limit: Option<usize>,
}

/// API response wrapper
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Dataset backing the charts ("csv" or "builtin")
    pub dataset: String,
    /// Number of records behind the charts
    pub records: usize,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::floats::get_floats,
        crate::handlers::floats::get_float,
        crate::handlers::profiles::get_profiles,
        crate::handlers::statistics::get_statistics,
        crate::handlers::charts::get_chart_geometry,
        crate::handlers::charts::get_chart_svg,
        crate::handlers::panel::get_panel,
    ),
    components(
        schemas(
            ApiResponse<Vec<FloatResponse>>,
            ApiResponse<FloatResponse>,
            ApiResponse<Vec<ProfileResponse>>,
            ApiResponse<PanelStatistics>,
            ApiResponse<ChartGeometry>,
            ApiResponse<PanelSnapshot>,
            ErrorResponse,
            HealthResponse,
            FloatsQuery,
            ProfilesQuery,
            FloatResponse,
            ProfileResponse,
            PanelStatistics,
            PanelSnapshot,
            MetricKind,
            ChartGeometry,
            ChartPoint,
            AxisTick,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "floats", description = "Float fleet endpoints"),
        (name = "profiles", description = "CSV-sourced profile endpoints"),
        (name = "statistics", description = "Panel statistics endpoints"),
        (name = "charts", description = "Chart geometry and SVG endpoints"),
        (name = "panel", description = "Combined panel snapshot endpoints"),
    ),
    info(
        title = "Argoview API",
        description = "Argo float telemetry panel - oceanographic charts and statistics over an in-memory dataset",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
