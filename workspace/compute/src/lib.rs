//! Presentation derivation over data-service snapshots: metric series
//! selection, panel statistics, chart geometry, and SVG rendering. Everything
//! here is a pure function over in-memory records; handlers read snapshots
//! and never write back.

pub mod chart;
pub mod series;
pub mod stats;
pub mod svg;

pub use chart::{derive_geometry, ChartFrame};
pub use series::{metric_series, SERIES_LEN};
