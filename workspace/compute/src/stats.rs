//! Series statistics behind the panel header numbers.

use common::FloatCategories;
use model::{Float, FloatStatus};

/// Arithmetic mean of a series. An empty series yields 0.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Round to one decimal, the way the panel displays temperature and salinity.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Partition the fleet by operational status.
pub fn categorize(floats: &[Float]) -> FloatCategories {
    let active = floats
        .iter()
        .filter(|f| f.status == FloatStatus::Active)
        .count();
    let inactive = floats
        .iter()
        .filter(|f| f.status == FloatStatus::Inactive)
        .count();

    FloatCategories::new(active, inactive)
}
