use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Breakdown of the float fleet by operational status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FloatCategories {
    /// Floats currently reporting
    pub active: usize,
    /// Floats that have stopped reporting
    pub inactive: usize,
    /// Number of status categories (active and inactive)
    pub total: usize,
}

impl FloatCategories {
    /// The fleet is always partitioned into the same two categories.
    pub const CATEGORY_COUNT: usize = 2;

    pub fn new(active: usize, inactive: usize) -> Self {
        Self {
            active,
            inactive,
            total: Self::CATEGORY_COUNT,
        }
    }
}

/// Snapshot of the numbers shown in the dashboard panel header.
///
/// Averages are taken over the charted series and pre-rounded to what the
/// panel displays: temperature and salinity to one decimal, depth to whole
/// meters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PanelStatistics {
    /// Number of status categories
    pub categories: usize,
    /// Records behind the charts: CSV rows when a file was loaded, floats otherwise
    pub processed: usize,
    /// Active floats in the fleet
    pub active: usize,
    /// Inactive floats in the fleet
    pub inactive: usize,
    /// Number of CSV-sourced profile rows currently held
    pub csv_count: usize,
    /// Mean temperature over the charted series (°C)
    pub avg_temperature: f64,
    /// Mean salinity over the charted series (PSU)
    pub avg_salinity: f64,
    /// Mean depth over the charted series (m)
    pub avg_depth: f64,
}
