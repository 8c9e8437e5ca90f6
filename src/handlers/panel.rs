use axum::{extract::State, response::Json};
use common::{MetricKind, PanelSnapshot};
use compute::{derive_geometry, ChartFrame};
use tracing::instrument;

use crate::helpers::stats::panel_statistics;
use crate::schemas::{ApiResponse, AppState, CachedData};

/// Get one combined panel snapshot: statistics plus all three chart
/// geometries. This is what a polling panel reads per refresh tick.
#[utoipa::path(
    get,
    path = "/api/v1/panel",
    tag = "panel",
    responses(
        (status = 200, description = "Panel snapshot retrieved successfully", body = ApiResponse<PanelSnapshot>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_panel(State(state): State<AppState>) -> Json<ApiResponse<PanelSnapshot>> {
    let cache_key = "panel".to_string();

    // Check cache first
    if let Some(CachedData::Panel(snapshot)) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: snapshot,
            message: "Panel snapshot retrieved from cache".to_string(),
            success: true,
        });
    }

    let charts = MetricKind::ALL
        .iter()
        .map(|&metric| {
            let samples = state.service.metric_series(metric);
            derive_geometry(metric, &samples, ChartFrame::PROFILE)
        })
        .collect();

    let snapshot = PanelSnapshot {
        statistics: panel_statistics(&state.service),
        charts,
    };

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Panel(snapshot.clone()))
        .await;

    Json(ApiResponse {
        data: snapshot,
        message: "Panel snapshot retrieved successfully".to_string(),
        success: true,
    })
}
