use std::fmt;

/// Operational status of a float platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloatStatus {
    /// The float is reporting measurements
    Active,
    /// The float has stopped reporting
    Inactive,
}

impl FloatStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FloatStatus::Active => "active",
            FloatStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for FloatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sensor platform with its last-known position and readings.
#[derive(Debug, Clone, PartialEq)]
pub struct Float {
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
    pub status: FloatStatus,
}

impl Float {
    pub fn new(
        id: &str,
        lat: f64,
        lng: f64,
        temperature: f64,
        salinity: f64,
        depth: f64,
        status: FloatStatus,
    ) -> Self {
        Self {
            id: id.to_string(),
            lat,
            lng,
            temperature,
            salinity,
            depth,
            status,
        }
    }

    /// The builtin sample fleet the service falls back to when no CSV data
    /// is available: ten floats spread over the Indian Ocean.
    pub fn sample_fleet() -> Vec<Float> {
        use FloatStatus::{Active, Inactive};

        vec![
            Float::new("F001", 18.9750, 72.8258, 28.5, 35.2, 100.0, Active),
            Float::new("F002", 13.0878, 80.2785, 29.1, 35.8, 150.0, Active),
            Float::new("F003", 22.5675, 88.3700, 27.8, 34.9, 200.0, Inactive),
            Float::new("F004", 8.0883, 77.0595, 26.3, 35.1, 180.0, Active),
            Float::new("F005", 15.4909, 73.8278, 28.9, 35.5, 120.0, Active),
            Float::new("F006", 11.0000, 85.0000, 27.2, 35.0, 140.0, Active),
            Float::new("F007", 6.9271, 79.8612, 28.7, 35.3, 110.0, Inactive),
            Float::new("F008", 12.0000, 68.0000, 29.5, 35.7, 95.0, Active),
            Float::new("F009", 4.2105, 73.5074, 28.1, 35.4, 160.0, Active),
            Float::new("F010", 16.0000, 94.0000, 27.9, 34.8, 130.0, Inactive),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_fleet_has_ten_floats() {
        let fleet = Float::sample_fleet();
        assert_eq!(fleet.len(), 10);
        assert_eq!(fleet[0].id, "F001");
        assert_eq!(fleet[9].id, "F010");
    }

    #[test]
    fn sample_fleet_status_split() {
        let fleet = Float::sample_fleet();
        let active = fleet
            .iter()
            .filter(|f| f.status == FloatStatus::Active)
            .count();
        assert_eq!(active, 7);
        assert_eq!(fleet.len() - active, 3);
    }
}
