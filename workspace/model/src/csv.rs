//! CSV-to-`Profile` parsing.
//!
//! The source files are small exports (at most a few hundred rows), so the
//! parser is a single pass over the text: split on newlines, split each data
//! line on commas respecting quoted segments, and map columns to fields by
//! header lookup with a fixed positional fallback.

use chrono::Utc;
use tracing::debug;

use crate::Profile;

/// Parse CSV text into profiles.
///
/// Rows with fewer fields than the header are skipped, and rows whose
/// latitude or longitude is not numeric are discarded. An input without at
/// least a header line and one data line yields an empty vector.
pub fn parse_profiles(input: &str) -> Vec<Profile> {
    let lines: Vec<&str> = input.split('\n').collect();
    if lines.len() < 2 {
        return Vec::new();
    }

    // The header row is split plainly; quoting only matters for data fields.
    let headers: Vec<&str> = lines[0].split(',').map(str::trim).collect();
    let mut profiles = Vec::new();

    for (line_no, line) in lines.iter().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }

        let values = split_line(line);
        if values.len() < headers.len() {
            debug!(line_no, "skipping row with fewer fields than the header");
            continue;
        }

        let latitude = numeric_field(&values, &headers, "Latitude", 0);
        let longitude = numeric_field(&values, &headers, "Longitude", 1);
        if latitude.is_nan() || longitude.is_nan() {
            debug!(line_no, "discarding row with non-numeric coordinates");
            continue;
        }

        profiles.push(Profile {
            latitude,
            longitude,
            temperature: numeric_field(&values, &headers, "Temperature", 2),
            salinity: numeric_field(&values, &headers, "Salinity", 3),
            pressure: numeric_field(&values, &headers, "Pressure", 4),
            depth: numeric_field(&values, &headers, "Depth", 5),
            date: field(&values, &headers, "Date", 6)
                .map(str::to_string)
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
            platform: field(&values, &headers, "Platform", 7)
                .unwrap_or("Unknown")
                .to_string(),
        });
    }

    profiles
}

/// Split one data line on commas, treating double quotes as segment
/// delimiters. Quotes toggle state and are not emitted; fields are trimmed.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

/// Look up a field by header name, falling back to a fixed position when the
/// header is absent or the named field is empty. Empty fields count as
/// missing.
fn field<'a>(values: &'a [String], headers: &[&str], name: &str, fallback: usize) -> Option<&'a str> {
    headers
        .iter()
        .position(|h| *h == name)
        .and_then(|i| values.get(i))
        .filter(|v| !v.is_empty())
        .or_else(|| values.get(fallback).filter(|v| !v.is_empty()))
        .map(String::as_str)
}

/// Numeric variant of [`field`]: a missing or unparseable value becomes NaN.
fn numeric_field(values: &[String], headers: &[&str], name: &str, fallback: usize) -> f64 {
    field(values, headers, name, fallback)
        .and_then(|v| v.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}
