use std::path::Path;

use common::MetricKind;
use model::{csv, Float, Profile};
use tracing::{info, warn};

/// Where the charted records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    /// Profiles hydrated from a CSV resource at startup
    Csv,
    /// The builtin sample fleet
    Builtin,
}

impl DatasetSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetSource::Csv => "csv",
            DatasetSource::Builtin => "builtin",
        }
    }
}

/// In-memory data service backing the panel.
///
/// Hydrated once at startup; handlers read snapshots through the getters and
/// never mutate it.
#[derive(Debug)]
pub struct DataService {
    floats: Vec<Float>,
    profiles: Vec<Profile>,
}

impl DataService {
    /// Service over the builtin sample fleet only.
    pub fn builtin() -> Self {
        Self {
            floats: Float::sample_fleet(),
            profiles: Vec::new(),
        }
    }

    /// Hydrate profiles from a CSV file when one is configured and readable.
    /// An unreadable file leaves the service on the builtin fleet.
    pub fn load(csv_path: Option<&Path>) -> Self {
        let mut service = Self::builtin();

        if let Some(path) = csv_path {
            match std::fs::read_to_string(path) {
                Ok(text) => {
                    service.profiles = csv::parse_profiles(&text);
                    info!(
                        path = %path.display(),
                        profiles = service.profiles.len(),
                        "loaded CSV profiles"
                    );
                }
                Err(err) => {
                    warn!(path = %path.display(), %err, "CSV data not available, using float data");
                }
            }
        }

        service
    }

    /// Service over already-fetched CSV text, builtin fleet as fallback.
    pub fn from_csv_text(text: &str) -> Self {
        let mut service = Self::builtin();
        service.profiles = csv::parse_profiles(text);
        service
    }

    pub fn floats(&self) -> &[Float] {
        &self.floats
    }

    pub fn float(&self, id: &str) -> Option<&Float> {
        self.floats.iter().find(|f| f.id == id)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Number of CSV-sourced profile rows currently held.
    pub fn csv_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn source(&self) -> DatasetSource {
        if self.profiles.is_empty() {
            DatasetSource::Builtin
        } else {
            DatasetSource::Csv
        }
    }

    /// Records behind the charts: CSV rows when a file was loaded, floats
    /// otherwise.
    pub fn record_count(&self) -> usize {
        match self.source() {
            DatasetSource::Csv => self.profiles.len(),
            DatasetSource::Builtin => self.floats.len(),
        }
    }

    /// The charted series for a metric (see [`compute::metric_series`]).
    pub fn metric_series(&self, metric: MetricKind) -> Vec<f64> {
        compute::metric_series(metric, &self.profiles, &self.floats)
    }
}
