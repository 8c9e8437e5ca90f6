use axum::{extract::State, response::Json};
use common::PanelStatistics;
use tracing::instrument;

use crate::helpers::stats::panel_statistics;
use crate::schemas::{ApiResponse, AppState, CachedData};

/// Get the panel statistics
#[utoipa::path(
    get,
    path = "/api/v1/statistics",
    tag = "statistics",
    responses(
        (status = 200, description = "Panel statistics retrieved successfully", body = ApiResponse<PanelStatistics>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_statistics(State(state): State<AppState>) -> Json<ApiResponse<PanelStatistics>> {
    let cache_key = "statistics".to_string();

    // Check cache first
    if let Some(CachedData::Statistics(statistics)) = state.cache.get(&cache_key).await {
        return Json(ApiResponse {
            data: statistics,
            message: "Panel statistics retrieved from cache".to_string(),
            success: true,
        });
    }

    let statistics = panel_statistics(&state.service);

    // Cache the result
    state
        .cache
        .insert(cache_key, CachedData::Statistics(statistics.clone()))
        .await;

    Json(ApiResponse {
        data: statistics,
        message: "Panel statistics retrieved successfully".to_string(),
        success: true,
    })
}
