use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::PanelStatistics;

/// Telemetry metric charted by the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    Temperature,
    Salinity,
    Depth,
}

impl MetricKind {
    /// All charted metrics, in panel order.
    pub const ALL: [MetricKind; 3] = [
        MetricKind::Temperature,
        MetricKind::Salinity,
        MetricKind::Depth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "temperature",
            MetricKind::Salinity => "salinity",
            MetricKind::Depth => "depth",
        }
    }

    /// Display unit used in tooltips and axis captions.
    pub fn unit(&self) -> &'static str {
        match self {
            MetricKind::Temperature => "°C",
            MetricKind::Salinity => "PSU",
            MetricKind::Depth => "m",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a metric name that is not one of the charted metrics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown metric `{0}`; expected temperature, salinity, or depth")]
pub struct ParseMetricError(pub String);

impl FromStr for MetricKind {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temperature" => Ok(MetricKind::Temperature),
            "salinity" => Ok(MetricKind::Salinity),
            "depth" => Ok(MetricKind::Depth),
            other => Err(ParseMetricError(other.to_string())),
        }
    }
}

/// One chart sample mapped into pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartPoint {
    /// Horizontal pixel coordinate inside the viewport
    pub x: f64,
    /// Vertical pixel coordinate inside the viewport
    pub y: f64,
    /// The sample value the point was derived from
    pub value: f64,
}

/// A tick mark on a chart axis: label plus pixel offset along that axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AxisTick {
    pub label: String,
    /// Pixel coordinate along the axis (x for the x-axis, y for the y-axis)
    pub position: f64,
}

impl AxisTick {
    pub fn new(label: impl Into<String>, position: f64) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// Geometry derived from one metric series, ready to be rendered as an SVG
/// line/area chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartGeometry {
    /// Metric the series was projected from
    pub metric: MetricKind,
    /// Viewport width in pixels
    pub width: f64,
    /// Viewport height in pixels
    pub height: f64,
    /// Pixel-space sample points, in series order
    pub points: Vec<ChartPoint>,
    /// SVG polyline path (`M x0 y0 L x1 y1 ...`)
    pub line_path: String,
    /// Line path closed down to the baseline for the area fill
    pub area_path: String,
    /// Evenly spaced value labels, maximum first
    pub y_ticks: Vec<AxisTick>,
    /// One tick per sample, labelled by platform ordinal
    pub x_ticks: Vec<AxisTick>,
}

impl ChartGeometry {
    /// True when the series had no samples and there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything the panel needs for one refresh tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PanelSnapshot {
    pub statistics: PanelStatistics,
    /// One geometry per metric, in panel order
    pub charts: Vec<ChartGeometry>,
}
