use axum::{
    extract::{Query, State},
    response::Json,
};
use model::Profile;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
use utoipa::ToSchema;

use crate::schemas::{ApiResponse, AppState, ProfilesQuery};

/// Profile response model. Non-validated measurements may be null when the
/// source column was missing or not a number.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub latitude: f64,
    pub longitude: f64,
    /// Water temperature (°C)
    pub temperature: f64,
    /// Practical salinity (PSU)
    pub salinity: f64,
    /// Pressure (dbar)
    pub pressure: f64,
    /// Measurement depth (m)
    pub depth: f64,
    /// Measurement date, as sourced
    pub date: String,
    /// Reporting platform identifier
    pub platform: String,
}

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            latitude: profile.latitude,
            longitude: profile.longitude,
            temperature: profile.temperature,
            salinity: profile.salinity,
            pressure: profile.pressure,
            depth: profile.depth,
            date: profile.date.clone(),
            platform: profile.platform.clone(),
        }
    }
}

/// Get the CSV-sourced profiles
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    tag = "profiles",
    responses(
        (status = 200, description = "Profiles retrieved successfully", body = ApiResponse<Vec<ProfileResponse>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument]
pub async fn get_profiles(
    Query(query): Query<ProfilesQuery>,
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<ProfileResponse>>> {
    let limit = query.limit.unwrap_or(usize::MAX);
    let profiles: Vec<ProfileResponse> = state
        .service
        .profiles()
        .iter()
        .take(limit)
        .map(ProfileResponse::from)
        .collect();

    debug!("Returning {} profiles", profiles.len());
    Json(ApiResponse {
        data: profiles,
        message: "Profiles retrieved successfully".to_string(),
        success: true,
    })
}
