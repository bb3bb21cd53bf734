//! Bar chart renderer
//!
//! Draws the six series as grouped horizontal bars, one group per canonical
//! operation. The linear chart divides times down and floors them at one so
//! tiny Doublets figures stay visible next to Neo4j; the log chart plots raw
//! times and simply leaves out zero values.

use std::path::Path;

use plotters::coord::CoordTranslate;
use plotters::prelude::*;
use tracing::info;

use crate::config::ReportConfig;
use crate::models::{GroupKey, ResultSet, CANONICAL_OPERATIONS, OPERATION_COUNT};
use crate::util::units::{format_log_tick, scale_linear};
use crate::{LinkBenchError, Result};

const TITLE: &str = "Benchmark Comparison: Neo4j vs Doublets (Rust)";
const TITLE_FONT_SIZE: u32 = 28;
const LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 14;

/// Bar thickness in operation-axis units
const BAR_HEIGHT: f64 = 0.1;

/// Empty rows above the last operation, reserved for the legend
const LEGEND_HEADROOM: f64 = 2.0;

/// Axis scaling of a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartScale {
    /// Times divided by the configured divisor, floored at one
    Linear,
    /// Raw times on a logarithmic axis
    Log,
}

impl ChartScale {
    /// Time axis description
    pub fn axis_description(&self) -> &'static str {
        match self {
            ChartScale::Linear => "Time (ns) – scaled",
            ChartScale::Log => "Time (ns) – log scale",
        }
    }
}

/// Plotted values for one group, aligned to the canonical operations
pub type ChartSeries = (GroupKey, [f64; OPERATION_COUNT]);

fn group_color(key: GroupKey) -> RGBColor {
    match key {
        GroupKey::DoubletsUnitedVolatile => RGBColor(250, 128, 114), // salmon
        GroupKey::DoubletsUnitedNonVolatile => RGBColor(255, 0, 0),  // red
        GroupKey::DoubletsSplitVolatile => RGBColor(144, 238, 144),  // lightgreen
        GroupKey::DoubletsSplitNonVolatile => RGBColor(0, 128, 0),   // green
        GroupKey::Neo4jNonTransaction => RGBColor(173, 216, 230),    // lightblue
        GroupKey::Neo4jTransaction => RGBColor(0, 0, 255),           // blue
    }
}

fn chart_error<E: std::fmt::Display>(err: E) -> LinkBenchError {
    LinkBenchError::ChartError(err.to_string())
}

/// Vertical span `(bottom, top)` of one bar.
///
/// Series are stacked from two bars below the operation tick to three above.
pub fn bar_span(series_index: usize, operation_index: usize) -> (f64, f64) {
    let center = operation_index as f64 + (series_index as f64 - 2.0) * BAR_HEIGHT;
    (center - BAR_HEIGHT / 2.0, center + BAR_HEIGHT / 2.0)
}

/// Series values as they will be plotted for the given scale
pub fn chart_values(results: &ResultSet, scale: ChartScale, divisor: u64) -> Vec<ChartSeries> {
    GroupKey::PRESENTATION_ORDER
        .iter()
        .map(|&key| {
            let values = results.series(key).map(|nanos| match scale {
                ChartScale::Linear => scale_linear(nanos, divisor) as f64,
                ChartScale::Log => nanos as f64,
            });
            (key, values)
        })
        .collect()
}

/// Time-axis range for the log chart; always positive and non-empty
pub fn log_axis_range(series: &[ChartSeries]) -> (f64, f64) {
    let positive = series.iter().flat_map(|(_, values)| values.iter().copied()).filter(|&v| v > 0.0);
    let (min, max) = positive.fold((f64::MAX, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if max <= 0.0 {
        return (1.0, 10.0);
    }
    ((min / 2.0).max(1.0), max * 2.0)
}

/// Time-axis upper bound for the linear chart
pub fn linear_axis_max(series: &[ChartSeries]) -> f64 {
    let max = series
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .fold(0.0_f64, f64::max);
    (max * 1.1).max(1.0)
}

/// Operation-axis range: one row per operation plus the legend headroom
pub fn operation_axis_range() -> std::ops::Range<f64> {
    -0.5..(OPERATION_COUNT as f64 - 0.5 + LEGEND_HEADROOM)
}

fn operation_tick_count() -> usize {
    // one tick per row keeps the key points on whole operation indexes
    OPERATION_COUNT + LEGEND_HEADROOM as usize
}

fn operation_label(y: f64) -> String {
    let idx = y.round();
    if idx < 0.0 || (y - idx).abs() > 0.3 {
        return String::new();
    }
    CANONICAL_OPERATIONS
        .get(idx as usize)
        .map(|op| op.to_string())
        .unwrap_or_default()
}

fn draw_bars<'a, DB, CT>(
    chart: &mut ChartContext<'a, DB, CT>,
    series: &[ChartSeries],
    baseline: f64,
) -> Result<()>
where
    DB: DrawingBackend + 'a,
    CT: CoordTranslate<From = (f64, f64)>,
{
    for (series_index, (key, values)) in series.iter().enumerate() {
        let color = group_color(*key);
        let bars: Vec<Rectangle<(f64, f64)>> = values
            .iter()
            .enumerate()
            .filter(|(_, value)| **value > baseline)
            .map(|(operation_index, &value)| {
                let (bottom, top) = bar_span(series_index, operation_index);
                Rectangle::new([(baseline, bottom), (value, top)], color.filled())
            })
            .collect();

        chart
            .draw_series(bars)
            .map_err(chart_error)?
            .label(key.label())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(chart_error)?;

    Ok(())
}

/// PNG chart renderer
#[derive(Debug, Clone)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
    linear_divisor: u64,
}

impl ChartRenderer {
    /// Create a renderer from the report configuration
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            width: config.chart_width,
            height: config.chart_height,
            linear_divisor: config.linear_scale_divisor,
        }
    }

    /// Render one chart to `path`
    pub fn render(&self, results: &ResultSet, scale: ChartScale, path: &Path) -> Result<()> {
        let series = chart_values(results, scale, self.linear_divisor);
        let y_range = operation_axis_range();

        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(chart_error)?;

        match scale {
            ChartScale::Linear => {
                let mut chart = ChartBuilder::on(&root)
                    .caption(TITLE, ("sans-serif", TITLE_FONT_SIZE))
                    .margin(20)
                    .x_label_area_size(50)
                    .y_label_area_size(130)
                    .build_cartesian_2d(0.0..linear_axis_max(&series), y_range)
                    .map_err(chart_error)?;

                chart
                    .configure_mesh()
                    .disable_y_mesh()
                    .y_labels(operation_tick_count())
                    .y_label_formatter(&|y| operation_label(*y))
                    .x_desc(scale.axis_description())
                    .label_style(("sans-serif", LABEL_FONT_SIZE))
                    .axis_desc_style(("sans-serif", LABEL_FONT_SIZE))
                    .draw()
                    .map_err(chart_error)?;

                draw_bars(&mut chart, &series, 0.0)?;
            }
            ChartScale::Log => {
                let (lo, hi) = log_axis_range(&series);
                let mut chart = ChartBuilder::on(&root)
                    .caption(TITLE, ("sans-serif", TITLE_FONT_SIZE))
                    .margin(20)
                    .x_label_area_size(50)
                    .y_label_area_size(130)
                    .build_cartesian_2d((lo..hi).log_scale(), y_range)
                    .map_err(chart_error)?;

                chart
                    .configure_mesh()
                    .disable_y_mesh()
                    .y_labels(operation_tick_count())
                    .y_label_formatter(&|y| operation_label(*y))
                    .x_label_formatter(&|x| format_log_tick(*x))
                    .x_desc(scale.axis_description())
                    .label_style(("sans-serif", LABEL_FONT_SIZE))
                    .axis_desc_style(("sans-serif", LABEL_FONT_SIZE))
                    .draw()
                    .map_err(chart_error)?;

                draw_bars(&mut chart, &series, lo)?;
            }
        }

        root.present().map_err(chart_error)?;
        info!(path = %path.display(), "{} saved", scale.axis_description());
        Ok(())
    }
}
