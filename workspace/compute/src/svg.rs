//! Standalone SVG rendering of a derived chart geometry.
//!
//! The markup mirrors the dashboard panel's hand-drawn charts: gradient and
//! grid-pattern defs, plot axes with tick marks, a gradient-filled area under
//! a stroked polyline, and data-point circles carrying tooltip titles.

use std::fmt::Write;

use common::{ChartGeometry, MetricKind};

use crate::chart::ChartFrame;

/// Stroke/fill color of a metric's line and points.
fn color(metric: MetricKind) -> &'static str {
    match metric {
        MetricKind::Temperature => "#ff6b6b",
        MetricKind::Salinity => "#4ecdc4",
        MetricKind::Depth => "#6c5ce7",
    }
}

/// Rotated y-axis caption, e.g. "Temperature (°C)".
fn caption(metric: MetricKind) -> String {
    let name = match metric {
        MetricKind::Temperature => "Temperature",
        MetricKind::Salinity => "Salinity",
        MetricKind::Depth => "Depth",
    };
    format!("{} ({})", name, metric.unit())
}

/// Tooltip text for one data point, matching the panel's formatting per
/// metric.
fn tooltip(metric: MetricKind, ordinal: usize, value: f64) -> String {
    match metric {
        MetricKind::Temperature => format!("Float {}: {:.1}°C", ordinal, value),
        MetricKind::Salinity => format!("Float {}: {:.1} PSU", ordinal, value),
        MetricKind::Depth => format!("Float {}: {}m", ordinal, value),
    }
}

/// Render a chart geometry as a complete SVG document.
///
/// The frame must be the one the geometry was derived with. An empty
/// geometry renders the viewport and grid with nothing plotted, the way the
/// panel leaves a chart blank until data arrives.
pub fn render_chart(geometry: &ChartGeometry, frame: ChartFrame) -> String {
    let metric = geometry.metric;
    let stroke = color(metric);
    let baseline = frame.baseline();

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" class="chart-svg">"#,
        geometry.width, geometry.height
    );

    // Defs: vertical fade gradient for the area fill plus the grid pattern.
    let _ = writeln!(svg, "  <defs>");
    let _ = writeln!(
        svg,
        r#"    <linearGradient id="{metric}Gradient" x1="0%" y1="0%" x2="0%" y2="100%">"#
    );
    let _ = writeln!(
        svg,
        r#"      <stop offset="0%" stop-color="{stroke}" stop-opacity="0.6"/>"#
    );
    let _ = writeln!(
        svg,
        r#"      <stop offset="100%" stop-color="{stroke}" stop-opacity="0.1"/>"#
    );
    let _ = writeln!(svg, "    </linearGradient>");
    let _ = writeln!(
        svg,
        r#"    <pattern id="{metric}Grid" width="40" height="20" patternUnits="userSpaceOnUse">"#
    );
    let _ = writeln!(
        svg,
        r##"      <path d="M 40 0 L 0 0 0 20" fill="none" stroke="#f0f0f0" stroke-width="1"/>"##
    );
    let _ = writeln!(svg, "    </pattern>");
    let _ = writeln!(svg, "  </defs>");

    // Grid background over the plot area.
    let _ = writeln!(
        svg,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="url(#{metric}Grid)" opacity="0.5"/>"#,
        frame.left, frame.top, frame.plot_width, frame.plot_height
    );

    if !geometry.is_empty() {
        // Axes.
        let _ = writeln!(
            svg,
            r##"  <line x1="{0}" y1="{1}" x2="{0}" y2="{2}" stroke="#666" stroke-width="1"/>"##,
            frame.left, frame.top, baseline
        );
        let _ = writeln!(
            svg,
            r##"  <line x1="{0}" y1="{1}" x2="{2}" y2="{1}" stroke="#666" stroke-width="1"/>"##,
            frame.left,
            baseline,
            frame.left + frame.plot_width
        );

        // Y-axis tick marks and value labels.
        for tick in &geometry.y_ticks {
            let _ = writeln!(
                svg,
                r##"  <line x1="{0}" y1="{1}" x2="{2}" y2="{1}" stroke="#666" stroke-width="1"/>"##,
                frame.left - 5.0,
                tick.position,
                frame.left
            );
            let _ = writeln!(
                svg,
                r##"  <text x="{}" y="{}" font-size="9" fill="#666" text-anchor="end">{}</text>"##,
                frame.left - 10.0,
                tick.position + 3.0,
                tick.label
            );
        }

        // X-axis tick marks and platform labels.
        for tick in &geometry.x_ticks {
            let _ = writeln!(
                svg,
                r##"  <line x1="{0}" y1="{1}" x2="{0}" y2="{2}" stroke="#666" stroke-width="1"/>"##,
                tick.position,
                baseline,
                baseline + 5.0
            );
            let _ = writeln!(
                svg,
                r##"  <text x="{}" y="{}" font-size="9" fill="#666" text-anchor="middle">{}</text>"##,
                tick.position,
                baseline + 20.0,
                tick.label
            );
        }

        // Area fill under the line, then the line itself.
        let _ = writeln!(
            svg,
            r#"  <path d="{}" fill="url(#{metric}Gradient)"/>"#,
            geometry.area_path
        );
        let _ = writeln!(
            svg,
            r#"  <path d="{}" stroke="{stroke}" stroke-width="2" fill="none"/>"#,
            geometry.line_path
        );

        // Data points with tooltip titles.
        for (i, point) in geometry.points.iter().enumerate() {
            let _ = writeln!(
                svg,
                r#"  <circle cx="{}" cy="{}" r="3" fill="{stroke}"><title>{}</title></circle>"#,
                point.x,
                point.y,
                tooltip(metric, i + 1, point.value)
            );
        }

        // Axis captions.
        let _ = writeln!(
            svg,
            r##"  <text x="{}" y="{}" font-size="10" fill="#333" text-anchor="middle" font-weight="500">Float ID</text>"##,
            frame.left + frame.plot_width / 2.0,
            frame.height - 5.0
        );
        let caption_x = frame.left - 35.0;
        let caption_y = frame.top + frame.plot_height / 2.0;
        let _ = writeln!(
            svg,
            r##"  <text x="{0}" y="{1}" font-size="10" fill="#333" text-anchor="middle" font-weight="500" transform="rotate(-90 {0} {1})">{2}</text>"##,
            caption_x,
            caption_y,
            caption(metric)
        );
    }

    svg.push_str("</svg>\n");
    svg
}
