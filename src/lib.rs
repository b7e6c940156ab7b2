//! apt-trend-rs: comparison, ranking and chart-geometry engine for
//! apartment real-estate transaction histories.
//!
//! The crate groups transaction records by comparable unit, pairs each
//! group's latest transaction with a baseline, ranks the resulting change
//! metrics, and turns a group's price history into backend-agnostic render
//! geometry. Fetching, parsing and drawing live in the host application.

pub mod api;
pub mod chart;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{TrendEngine, TrendEngineConfig};
pub use error::{TrendError, TrendResult};
