use common::{MetricKind, PanelStatistics};
use compute::stats::{categorize, mean, round1};

use crate::service::DataService;

/// Assemble the panel statistics from a data-service snapshot.
///
/// Averages are pre-rounded to what the panel displays: temperature and
/// salinity to one decimal, depth to whole meters.
pub fn panel_statistics(service: &DataService) -> PanelStatistics {
    let categories = categorize(service.floats());
    let temperature = service.metric_series(MetricKind::Temperature);
    let salinity = service.metric_series(MetricKind::Salinity);
    let depth = service.metric_series(MetricKind::Depth);

    PanelStatistics {
        categories: categories.total,
        processed: service.record_count(),
        active: categories.active,
        inactive: categories.inactive,
        csv_count: service.csv_count(),
        avg_temperature: round1(mean(&temperature)),
        avg_salinity: round1(mean(&salinity)),
        avg_depth: mean(&depth).round(),
    }
}
