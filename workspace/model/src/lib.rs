//! Domain records for the float telemetry panel: the builtin sample fleet
//! and the CSV-sourced profile rows, plus the parsing that produces them.

pub mod csv;
mod float;
mod profile;

pub use float::{Float, FloatStatus};
pub use profile::Profile;
