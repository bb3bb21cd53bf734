//! Units formatting and conversion utilities
//!
//! Provides the speed-up annotation used by the table, the bar scaling used
//! by the linear chart, and log-axis tick labels.

/// Placeholder rendered for missing (zero) measurements
pub const NOT_AVAILABLE: &str = "N/A";

/// Ratio of the Neo4j baseline to a Doublets time
///
/// Returns `None` when either side is zero, since no meaningful ratio exists.
///
/// # Examples
/// ```
/// use linkbench::util::units::speedup_ratio;
///
/// assert_eq!(speedup_ratio(500, 200), Some(2.5));
/// assert_eq!(speedup_ratio(500, 0), None);
/// ```
pub fn speedup_ratio(baseline_nanos: u64, nanos: u64) -> Option<f64> {
    if baseline_nanos == 0 || nanos == 0 {
        return None;
    }
    Some(baseline_nanos as f64 / nanos as f64)
}

/// Annotate a Doublets time with how much faster it is than Neo4j
///
/// # Examples
/// ```
/// use linkbench::util::units::format_speedup;
///
/// assert_eq!(format_speedup(200, Some(500)), "200 (2.5x faster)");
/// assert_eq!(format_speedup(200, None), "200");
/// assert_eq!(format_speedup(0, Some(500)), "N/A");
/// ```
pub fn format_speedup(nanos: u64, min_neo4j: Option<u64>) -> String {
    if nanos == 0 {
        return NOT_AVAILABLE.to_string();
    }
    match min_neo4j.and_then(|baseline| speedup_ratio(baseline, nanos)) {
        Some(ratio) => format!("{} ({:.1}x faster)", nanos, ratio),
        None => nanos.to_string(),
    }
}

/// Render a raw time, or `N/A` when it was not measured
///
/// # Examples
/// ```
/// use linkbench::util::units::format_cell;
///
/// assert_eq!(format_cell(3111053532), "3111053532");
/// assert_eq!(format_cell(0), "N/A");
/// ```
pub fn format_cell(nanos: u64) -> String {
    if nanos == 0 {
        NOT_AVAILABLE.to_string()
    } else {
        nanos.to_string()
    }
}

/// Scale a time for the linear chart, flooring at one so every bar is visible
///
/// # Examples
/// ```
/// use linkbench::util::units::scale_linear;
///
/// assert_eq!(scale_linear(0, 10_000_000), 1);
/// assert_eq!(scale_linear(25_000_000, 10_000_000), 2);
/// ```
pub fn scale_linear(nanos: u64, divisor: u64) -> u64 {
    if divisor == 0 {
        return nanos.max(1);
    }
    (nanos / divisor).max(1)
}

/// Tick label for a nanosecond log axis; only powers of ten are labelled
///
/// # Examples
/// ```
/// use linkbench::util::units::format_log_tick;
///
/// assert_eq!(format_log_tick(1_000.0), "1e3");
/// assert_eq!(format_log_tick(2_000.0), "");
/// ```
pub fn format_log_tick(nanos: f64) -> String {
    if nanos <= 0.0 {
        return String::new();
    }
    let log10 = nanos.log10();
    let exponent = log10.round();
    if (log10 - exponent).abs() < 1e-6 {
        format!("1e{}", exponent as i32)
    } else {
        String::new()
    }
}
