//! Admin aggregation.

pub mod service;

pub use service::{CategoryBreakdown, StatsService, SystemStats};
