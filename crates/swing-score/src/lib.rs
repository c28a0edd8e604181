//! Golf swing scoring: per-item scores, an aggregate score and localized coaching
//! feedback computed from vendor motion-analysis measurements.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
