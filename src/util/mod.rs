//! Utility functions module
//!
//! Contains helpers for ratio formatting, chart scaling and
//! log-axis ticks.

pub mod units;

// Re-export commonly used functions
pub use units::{
    format_cell, format_log_tick, format_speedup,
    scale_linear, speedup_ratio, NOT_AVAILABLE,
};
