//! Chart-geometry derivation: min/max normalization of a sample series into
//! a fixed pixel frame, plus the polyline/area paths and axis ticks an SVG
//! line chart is drawn from.

use std::fmt::Write;

use common::{AxisTick, ChartGeometry, ChartPoint, MetricKind};
use tracing::trace;

/// Fixed pixel frame a chart is drawn into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    /// Viewport width
    pub width: f64,
    /// Viewport height
    pub height: f64,
    /// Left edge of the plot area
    pub left: f64,
    /// Top edge of the plot area
    pub top: f64,
    /// Plot area width
    pub plot_width: f64,
    /// Plot area height
    pub plot_height: f64,
}

impl ChartFrame {
    /// The frame used by the panel's profile charts.
    pub const PROFILE: ChartFrame = ChartFrame {
        width: 380.0,
        height: 170.0,
        left: 60.0,
        top: 15.0,
        plot_width: 280.0,
        plot_height: 110.0,
    };

    /// Vertical pixel coordinate of the plot's bottom edge.
    pub fn baseline(&self) -> f64 {
        self.top + self.plot_height
    }
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self::PROFILE
    }
}

/// Number of y-axis intervals; the axis carries one more label than that.
const Y_TICK_INTERVALS: usize = 5;

/// Derive the chart geometry for a sample series.
///
/// The minimum value maps to the plot's bottom edge and the maximum to its
/// top edge. A constant series falls back to a range of 1, which pins every
/// point to the bottom edge. An empty series yields empty geometry.
pub fn derive_geometry(metric: MetricKind, samples: &[f64], frame: ChartFrame) -> ChartGeometry {
    trace!(metric = %metric, samples = samples.len(), "deriving chart geometry");

    if samples.is_empty() {
        return ChartGeometry {
            metric,
            width: frame.width,
            height: frame.height,
            points: Vec::new(),
            line_path: String::new(),
            area_path: String::new(),
            y_ticks: Vec::new(),
            x_ticks: Vec::new(),
        };
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    // A lone sample sits on the left edge instead of dividing by zero.
    let intervals = samples.len().saturating_sub(1).max(1) as f64;

    let points: Vec<ChartPoint> = samples
        .iter()
        .enumerate()
        .map(|(i, &value)| ChartPoint {
            x: frame.left + i as f64 * frame.plot_width / intervals,
            y: frame.top + frame.plot_height - ((value - min) / range) * frame.plot_height,
            value,
        })
        .collect();

    let line_path = line_path(&points);
    let area_path = area_path(&line_path, &points, frame.baseline());

    let y_ticks = (0..=Y_TICK_INTERVALS)
        .map(|i| {
            let value = max - i as f64 * range / Y_TICK_INTERVALS as f64;
            let y = frame.top + i as f64 * frame.plot_height / Y_TICK_INTERVALS as f64;
            AxisTick::new(format_tick(metric, value), y)
        })
        .collect();

    let x_ticks = points
        .iter()
        .enumerate()
        .map(|(i, p)| AxisTick::new(format!("F{:03}", i + 1), p.x))
        .collect();

    ChartGeometry {
        metric,
        width: frame.width,
        height: frame.height,
        points,
        line_path,
        area_path,
        y_ticks,
        x_ticks,
    }
}

/// `M x0 y0 L x1 y1 ...` over the pixel points.
fn line_path(points: &[ChartPoint]) -> String {
    let mut path = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            path.push(' ');
        }
        let command = if i == 0 { 'M' } else { 'L' };
        let _ = write!(path, "{} {} {}", command, p.x, p.y);
    }
    path
}

/// The line path closed down to the baseline and back to the first sample.
fn area_path(line_path: &str, points: &[ChartPoint], baseline: f64) -> String {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            format!("{line_path} L {} {baseline} L {} {baseline} Z", last.x, first.x)
        }
        _ => String::new(),
    }
}

/// Tick labels match the panel: one decimal for temperature and salinity,
/// whole meters for depth.
fn format_tick(metric: MetricKind, value: f64) -> String {
    match metric {
        MetricKind::Depth => format!("{}", value.round()),
        MetricKind::Temperature | MetricKind::Salinity => format!("{value:.1}"),
    }
}
