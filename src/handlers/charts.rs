use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use common::{ChartGeometry, MetricKind};
use compute::{derive_geometry, svg::render_chart, ChartFrame};
use tracing::{instrument, warn};

use crate::schemas::{ApiResponse, AppState, CachedData};

/// Parse the metric path segment, rejecting anything but the charted metrics.
fn parse_metric(metric: &str) -> Result<MetricKind, StatusCode> {
    metric.parse::<MetricKind>().map_err(|err| {
        warn!(%err, "rejecting chart request");
        StatusCode::BAD_REQUEST
    })
}

/// Get the chart geometry for a metric
#[utoipa::path(
    get,
    path = "/api/v1/charts/{metric}",
    tag = "charts",
    params(
        ("metric" = String, Path, description = "Chart metric: temperature, salinity, or depth"),
    ),
    responses(
        (status = 200, description = "Chart geometry retrieved successfully", body = ApiResponse<ChartGeometry>),
        (status = 400, description = "Unknown metric", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_chart_geometry(
    Path(metric): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<ChartGeometry>>, StatusCode> {
    let metric = parse_metric(&metric)?;
    let cache_key = format!("chart_{}", metric);

    // Check cache first
    if let Some(CachedData::Chart(geometry)) = state.cache.get(&cache_key).await {
        return Ok(Json(ApiResponse {
            data: geometry,
            message: "Chart geometry retrieved from cache".to_string(),
            success: true,
        }));
    }

    let samples = state.service.metric_series(metric);
    let geometry = derive_geometry(metric, &samples, ChartFrame::PROFILE);

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Chart(geometry.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: geometry,
        message: "Chart geometry retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get the rendered SVG chart for a metric
#[utoipa::path(
    get,
    path = "/api/v1/charts/{metric}/svg",
    tag = "charts",
    params(
        ("metric" = String, Path, description = "Chart metric: temperature, salinity, or depth"),
    ),
    responses(
        (status = 200, description = "SVG chart rendered successfully", body = String, content_type = "image/svg+xml"),
        (status = 400, description = "Unknown metric", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_chart_svg(
    Path(metric): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, StatusCode> {
    let metric = parse_metric(&metric)?;
    let cache_key = format!("chart_svg_{}", metric);

    // Check cache first
    if let Some(CachedData::Svg(document)) = state.cache.get(&cache_key).await {
        return Ok(([(header::CONTENT_TYPE, "image/svg+xml")], document));
    }

    let samples = state.service.metric_series(metric);
    let geometry = derive_geometry(metric, &samples, ChartFrame::PROFILE);
    let document = render_chart(&geometry, ChartFrame::PROFILE);

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Svg(document.clone()))
        .await;

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], document))
}
