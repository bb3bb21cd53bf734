//! Report pipeline
//!
//! read log -> extract -> aggregate -> table -> charts -> optional JSON.
//! Everything the run needs comes in through [`ReportConfig`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::persistence::{ArtifactWriter, SummaryFile};
use crate::config::ReportConfig;
use crate::extract::Extractor;
use crate::models::ResultSet;
use crate::render::{render_markdown_table, ChartRenderer, ChartScale};
use crate::{LinkBenchError, Result};

/// Everything produced by one report run
#[derive(Debug, Clone)]
pub struct ReportArtifacts {
    /// Aggregated groups
    pub results: ResultSet,
    /// Rendered markdown table
    pub table: String,
    /// Where the table was written
    pub table_path: PathBuf,
    /// Chart files written, linear first
    pub chart_paths: Vec<PathBuf>,
    /// JSON summary, when enabled
    pub json_path: Option<PathBuf>,
}

/// Read the benchmark log, mapping a missing file to `InputNotFound`
/// and any other read failure to `InputUnreadable`
pub fn read_input(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(text) => {
            info!("Loaded {}, length: {} characters", path.display(), text.chars().count());
            Ok(text)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            Err(LinkBenchError::InputNotFound(path.to_path_buf()))
        }
        Err(e) => Err(LinkBenchError::InputUnreadable(path.to_path_buf(), e)),
    }
}

/// Extract and aggregate all measurements in `text`
pub fn build_results(text: &str) -> Result<ResultSet> {
    let measurements = Extractor::new()?.extract(text)?;
    let results = ResultSet::from_measurements(measurements);

    debug!("Final groups (after parsing):");
    for (key, timings) in results.groups() {
        debug!("{}: {:?}", key, timings);
    }

    if results.is_empty() {
        warn!("No benchmark lines matched; every table cell will be N/A");
    }

    Ok(results)
}

/// Run the whole pipeline for `config`
pub fn generate_report(config: &ReportConfig) -> Result<ReportArtifacts> {
    config.validate()?;

    let text = read_input(&config.input_path)?;
    let results = build_results(&text)?;

    let table = render_markdown_table(&results);
    debug!("Generated Markdown Table:\n{}", table);

    let writer = ArtifactWriter::new(config);
    let table_path = writer.write_table(&table)?;

    let mut chart_paths = Vec::new();
    if config.render_charts {
        let renderer = ChartRenderer::new(config);
        for (scale, path) in [
            (ChartScale::Linear, config.linear_chart_path()),
            (ChartScale::Log, config.log_chart_path()),
        ] {
            renderer.render(&results, scale, &path)?;
            chart_paths.push(path);
        }
    }

    let json_path = if config.write_json {
        let summary = SummaryFile::new(&config.input_path, &results);
        Some(writer.write_summary(&summary)?)
    } else {
        None
    };

    Ok(ReportArtifacts {
        results,
        table,
        table_path,
        chart_paths,
        json_path,
    })
}
