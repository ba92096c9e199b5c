//! Launch prediction service: scores road closures near launch sites and
//! exposes the active predictions over HTTP.

pub mod config;
pub mod error;
pub mod predictions;
pub mod telemetry;
