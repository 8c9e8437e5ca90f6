//! Metric series selection over a data-service snapshot.

use common::MetricKind;
use model::{Float, Profile};

/// Number of samples charted per metric.
pub const SERIES_LEN: usize = 7;

/// Project the charted series for a metric: the first [`SERIES_LEN`] values
/// from the CSV profiles when any were loaded, otherwise from the builtin
/// fleet.
pub fn metric_series(metric: MetricKind, profiles: &[Profile], floats: &[Float]) -> Vec<f64> {
    if !profiles.is_empty() {
        profiles
            .iter()
            .take(SERIES_LEN)
            .map(|p| profile_value(metric, p))
            .collect()
    } else {
        floats
            .iter()
            .take(SERIES_LEN)
            .map(|f| float_value(metric, f))
            .collect()
    }
}

fn profile_value(metric: MetricKind, profile: &Profile) -> f64 {
    match metric {
        MetricKind::Temperature => profile.temperature,
        MetricKind::Salinity => profile.salinity,
        MetricKind::Depth => profile.depth,
    }
}

fn float_value(metric: MetricKind, float: &Float) -> f64 {
    match metric {
        MetricKind::Temperature => float.temperature,
        MetricKind::Salinity => float.salinity,
        MetricKind::Depth => float.depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(temperature: f64) -> Profile {
        Profile {
            latitude: 10.0,
            longitude: 75.0,
            temperature,
            salinity: 35.0,
            pressure: 10.0,
            depth: 100.0,
            date: "2024-07-01".to_string(),
            platform: "2902746".to_string(),
        }
    }

    #[test]
    fn prefers_profiles_over_floats() {
        let profiles = vec![profile(20.0), profile(21.0)];
        let floats = Float::sample_fleet();

        let series = metric_series(MetricKind::Temperature, &profiles, &floats);
        assert_eq!(series, vec![20.0, 21.0]);
    }

    #[test]
    fn falls_back_to_the_fleet_without_profiles() {
        let floats = Float::sample_fleet();

        let series = metric_series(MetricKind::Temperature, &[], &floats);
        assert_eq!(series.len(), SERIES_LEN);
        assert_eq!(series[0], 28.5);
    }

    #[test]
    fn caps_the_series_length() {
        let profiles: Vec<Profile> = (0..20).map(|i| profile(i as f64)).collect();

        let series = metric_series(MetricKind::Temperature, &profiles, &[]);
        assert_eq!(series.len(), SERIES_LEN);
    }
}
