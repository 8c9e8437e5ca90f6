use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use model::Float;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState, FloatsQuery};

/// Float response model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FloatResponse {
    /// Platform identifier, e.g. "F001"
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    /// Last reported temperature (°C)
    pub temperature: f64,
    /// Last reported salinity (PSU)
    pub salinity: f64,
    /// Last reported depth (m)
    pub depth: f64,
    /// Operational status ("active" or "inactive")
    pub status: String,
}

impl From<&Float> for FloatResponse {
    fn from(float: &Float) -> Self {
        Self {
            id: float.id.clone(),
            lat: float.lat,
            lng: float.lng,
            temperature: float.temperature,
            salinity: float.salinity,
            depth: float.depth,
            status: float.status.as_str().to_string(),
        }
    }
}

/// Get the float fleet
#[utoipa::path(
    get,
    path = "/api/v1/floats",
    tag = "floats",
    responses(
        (status = 200, description = "Floats retrieved successfully", body = ApiResponse<Vec<FloatResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_floats(
    Query(query): Query<FloatsQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<FloatResponse>>> {
    trace!("Entering get_floats function");

    let floats: Vec<FloatResponse> = state
        .service
        .floats()
        .iter()
        .filter(|f| match &query.status {
            Some(status) => f.status.as_str() == status,
            None => true,
        })
        .map(FloatResponse::from)
        .collect();

    debug!("Returning {} floats", floats.len());
    Json(ApiResponse {
        data: floats,
        message: "Floats retrieved successfully".to_string(),
        success: true,
    })
}

/// Get a single float by its platform identifier
#[utoipa::path(
    get,
    path = "/api/v1/floats/{float_id}",
    tag = "floats",
    params(
        ("float_id" = String, Path, description = "Platform identifier, e.g. F001"),
    ),
    responses(
        (status = 200, description = "Float retrieved successfully", body = ApiResponse<FloatResponse>),
        (status = 404, description = "Float not found", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_float(
    Path(float_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<FloatResponse>>, StatusCode> {
    let float = match state.service.float(&float_id) {
        Some(float) => float,
        None => return Err(StatusCode::NOT_FOUND),
    };

    Ok(Json(ApiResponse {
        data: FloatResponse::from(float),
        message: "Float retrieved successfully".to_string(),
        success: true,
    }))
}
