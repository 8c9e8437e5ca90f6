/// A single CSV-sourced measurement row.
///
/// Only latitude and longitude are validated at parse time; the remaining
/// numeric fields may be NaN when the source column was missing or not a
/// number.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
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
    /// Measurement date, kept as the raw source text
    pub date: String,
    /// Reporting platform identifier
    pub platform: String,
}
