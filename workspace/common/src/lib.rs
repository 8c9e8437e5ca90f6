//! Common transport-layer types shared between the backend and the compute
//! member. These structs mirror the backend handlers' response payloads so
//! chart geometry and panel statistics have one canonical shape.

mod chart;
mod statistics;

pub use chart::{AxisTick, ChartGeometry, ChartPoint, MetricKind, PanelSnapshot, ParseMetricError};
pub use statistics::{FloatCategories, PanelStatistics};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_kind_serializes_lowercase() {
        let json = serde_json::to_string(&MetricKind::Temperature).unwrap();
        assert_eq!(json, "\"temperature\"");

        let parsed: MetricKind = serde_json::from_str("\"depth\"").unwrap();
        assert_eq!(parsed, MetricKind::Depth);
    }

    #[test]
    fn metric_kind_rejects_unknown_names() {
        assert!(serde_json::from_str::<MetricKind>("\"pressure\"").is_err());
    }

    #[test]
    fn metric_kind_parses_from_path_segments() {
        assert_eq!("salinity".parse::<MetricKind>(), Ok(MetricKind::Salinity));

        let err = "pressure".parse::<MetricKind>().unwrap_err();
        assert_eq!(err, ParseMetricError("pressure".to_string()));
    }

    #[test]
    fn float_categories_total_is_category_count() {
        let categories = FloatCategories::new(7, 3);
        assert_eq!(categories.active, 7);
        assert_eq!(categories.inactive, 3);
        // Total counts categories, not floats.
        assert_eq!(categories.total, 2);
    }
}
