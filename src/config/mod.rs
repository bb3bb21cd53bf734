//! Configuration management module
//!
//! Handles loading and validation of report configuration:
//! where the benchmark log lives, where artifacts go, and how charts look.

use std::path::{Path, PathBuf};
use std::fs;
use serde::{Deserialize, Serialize};
use crate::{
    LinkBenchError, Result, APP_NAME, CONFIG_FILE, DEFAULT_INPUT_FILE, JSON_FILE,
    LINEAR_CHART_FILE, LOG_CHART_FILE, TABLE_FILE,
};

pub mod persistence;

/// Report configuration passed explicitly into the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Benchmark log to read
    pub input_path: PathBuf,
    /// Directory receiving every artifact
    pub output_dir: PathBuf,
    /// Markdown table file name
    pub table_file: String,
    /// Linear-scaled chart file name
    pub linear_chart_file: String,
    /// Log-scaled chart file name
    pub log_chart_file: String,
    /// JSON summary file name
    pub json_file: String,
    /// Whether to write the JSON summary
    pub write_json: bool,
    /// Whether to render the two charts
    pub render_charts: bool,
    /// Verbose tracing of every extraction step
    pub debug: bool,
    /// Chart width in pixels
    pub chart_width: u32,
    /// Chart height in pixels
    pub chart_height: u32,
    /// Divisor applied to times on the linear chart
    pub linear_scale_divisor: u64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_FILE),
            output_dir: PathBuf::from("."),
            table_file: TABLE_FILE.to_string(),
            linear_chart_file: LINEAR_CHART_FILE.to_string(),
            log_chart_file: LOG_CHART_FILE.to_string(),
            json_file: JSON_FILE.to_string(),
            write_json: false,
            render_charts: true,
            debug: true,
            chart_width: 1200, // 12in at 100 dpi
            chart_height: 800,
            linear_scale_divisor: 10_000_000,
        }
    }
}

impl ReportConfig {
    /// Create a new report configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(LinkBenchError::ConfigError(
                "Input path must not be empty".to_string()
            ));
        }

        for (name, value) in [
            ("table_file", &self.table_file),
            ("linear_chart_file", &self.linear_chart_file),
            ("log_chart_file", &self.log_chart_file),
            ("json_file", &self.json_file),
        ] {
            if value.trim().is_empty() {
                return Err(LinkBenchError::ConfigError(
                    format!("{} must not be empty", name)
                ));
            }
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(LinkBenchError::ConfigError(
                format!("Output path is not a directory: {}", self.output_dir.display())
            ));
        }

        const MIN_CHART_SIZE: u32 = 200;
        const MAX_CHART_SIZE: u32 = 8000;
        for (name, value) in [("chart_width", self.chart_width), ("chart_height", self.chart_height)] {
            if !(MIN_CHART_SIZE..=MAX_CHART_SIZE).contains(&value) {
                return Err(LinkBenchError::ConfigError(
                    format!("{} must be between {} and {} pixels (got {})",
                        name, MIN_CHART_SIZE, MAX_CHART_SIZE, value)
                ));
            }
        }

        if self.linear_scale_divisor == 0 {
            return Err(LinkBenchError::ConfigError(
                "Linear scale divisor must be greater than 0".to_string()
            ));
        }

        Ok(())
    }

    /// Set the benchmark log path
    pub fn with_input_path(mut self, path: PathBuf) -> Self {
        self.input_path = path;
        self
    }

    /// Set the artifact output directory
    pub fn with_output_dir(mut self, dir: PathBuf) -> Self {
        self.output_dir = dir;
        self
    }

    /// Enable or disable the JSON summary
    pub fn with_json(mut self, write_json: bool) -> Self {
        self.write_json = write_json;
        self
    }

    /// Enable or disable chart rendering
    pub fn with_charts(mut self, render_charts: bool) -> Self {
        self.render_charts = render_charts;
        self
    }

    /// Enable or disable verbose tracing
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Full path of the markdown table artifact
    pub fn table_path(&self) -> PathBuf {
        self.output_dir.join(&self.table_file)
    }

    /// Full path of the linear chart artifact
    pub fn linear_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.linear_chart_file)
    }

    /// Full path of the log chart artifact
    pub fn log_chart_path(&self) -> PathBuf {
        self.output_dir.join(&self.log_chart_file)
    }

    /// Full path of the JSON summary artifact
    pub fn json_path(&self) -> PathBuf {
        self.output_dir.join(&self.json_file)
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .map_err(|e| LinkBenchError::ConfigError(
                format!("Failed to read config file {}: {}", config_path.display(), e)
            ))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| LinkBenchError::ConfigError(
                format!("Failed to parse config file {}: {}", config_path.display(), e)
            ))?;

        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/linkbench/linkbench.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LinkBenchError::ConfigError(
                "Unable to determine config directory".to_string()
            ))?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}
