use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::helpers::stats::panel_statistics;
use crate::service::DataService;

/// Parse a profile CSV file and report what the service would load from it.
pub fn inspect_csv(path: &Path) -> Result<()> {
    info!(path = %path.display(), "inspecting profile CSV");

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let service = DataService::from_csv_text(&text);
    let kept = service.csv_count();

    // Everything after the header that is not blank was a candidate row.
    let candidates = text
        .split('\n')
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .count();
    let discarded = candidates.saturating_sub(kept);

    println!(
        "{}: {} candidate rows, {} profiles kept, {} discarded",
        path.display(),
        candidates,
        kept,
        discarded
    );

    let statistics = panel_statistics(&service);
    println!("dataset source: {}", service.source().as_str());
    println!("avg temperature: {} °C", statistics.avg_temperature);
    println!("avg salinity:    {} PSU", statistics.avg_salinity);
    println!("avg depth:       {} m", statistics.avg_depth);

    Ok(())
}
