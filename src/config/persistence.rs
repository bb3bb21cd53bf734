//! Report artifact persistence module
//!
//! Writes the markdown table and the optional JSON summary into the
//! configured output directory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::config::ReportConfig;
use crate::models::{ResultSet, CANONICAL_OPERATIONS};
use crate::models::result::GroupTimings;
use crate::{LinkBenchError, Result};

/// Writer for report artifacts
#[derive(Debug)]
pub struct ArtifactWriter {
    output_dir: PathBuf,
    table_path: PathBuf,
    json_path: PathBuf,
}

/// JSON summary structure for CI consumption
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryFile {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub source: PathBuf,
    pub operations: Vec<String>,
    pub groups: BTreeMap<String, GroupTimings>,
}

impl SummaryFile {
    /// Build a summary of the aggregated groups
    pub fn new(source: &Path, results: &ResultSet) -> Self {
        let groups = results
            .groups()
            .map(|(key, timings)| (format!("{:?}", key), timings.clone()))
            .collect();

        Self {
            version: 1,
            generated_at: Utc::now(),
            source: source.to_path_buf(),
            operations: CANONICAL_OPERATIONS.iter().map(|op| op.to_string()).collect(),
            groups,
        }
    }
}

impl ArtifactWriter {
    /// Create a writer targeting the configured artifact paths
    pub fn new(config: &ReportConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            table_path: config.table_path(),
            json_path: config.json_path(),
        }
    }

    /// Create the output directory if it doesn't exist
    pub fn ensure_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir)
            .map_err(|e| LinkBenchError::PersistenceError(
                format!("Failed to create output directory {}: {}", self.output_dir.display(), e)
            ))
    }

    /// Write the markdown table verbatim (no trailing newline is added)
    pub fn write_table(&self, table: &str) -> Result<PathBuf> {
        self.ensure_output_dir()?;

        fs::write(&self.table_path, table)
            .map_err(|e| LinkBenchError::PersistenceError(
                format!("Failed to write table {}: {}", self.table_path.display(), e)
            ))?;

        info!(path = %self.table_path.display(), "Markdown table saved");
        Ok(self.table_path.clone())
    }

    /// Write the JSON summary of all groups
    pub fn write_summary(&self, summary: &SummaryFile) -> Result<PathBuf> {
        self.ensure_output_dir()?;

        let content = serde_json::to_string_pretty(summary)
            .map_err(|e| LinkBenchError::PersistenceError(
                format!("Failed to serialize summary: {}", e)
            ))?;

        fs::write(&self.json_path, content)
            .map_err(|e| LinkBenchError::PersistenceError(
                format!("Failed to write summary {}: {}", self.json_path.display(), e)
            ))?;

        info!(path = %self.json_path.display(), "JSON summary saved");
        Ok(self.json_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GroupKey, Measurement};
    use tempfile::TempDir;

    fn create_test_results() -> ResultSet {
        ResultSet::from_measurements(vec![
            Measurement::new("Create", GroupKey::Neo4jTransaction, 500),
            Measurement::new("Each_All", GroupKey::DoubletsUnitedVolatile, 20),
        ])
    }

    fn writer_in(temp_dir: &TempDir) -> ArtifactWriter {
        let config = ReportConfig::default().with_output_dir(temp_dir.path().to_path_buf());
        ArtifactWriter::new(&config)
    }

    #[test]
    fn test_write_table_is_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let writer = writer_in(&temp_dir);

        let path = writer.write_table("| a |\n| b |").unwrap();
        assert_eq!(path, temp_dir.path().join("results.md"));
        assert_eq!(fs::read_to_string(path).unwrap(), "| a |\n| b |");
    }

    #[test]
    fn test_write_creates_missing_output_dir() {
        let temp_dir = TempDir::new().unwrap();
        let output_dir = temp_dir.path().join("reports").join("latest");
        let config = ReportConfig::default().with_output_dir(output_dir.clone());
        let writer = ArtifactWriter::new(&config);

        let path = writer.write_table("x").unwrap();
        assert!(path.exists());
        assert!(output_dir.is_dir());
    }

    #[test]
    fn test_write_uses_configured_file_names() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ReportConfig::default().with_output_dir(temp_dir.path().to_path_buf());
        config.table_file = "neo4j_vs_doublets.md".to_string();
        config.json_file = "summary.json".to_string();
        let writer = ArtifactWriter::new(&config);

        assert_eq!(writer.write_table("x").unwrap(), config.table_path());
        let summary = SummaryFile::new(Path::new("out.txt"), &create_test_results());
        assert_eq!(writer.write_summary(&summary).unwrap(), config.json_path());
    }

    #[test]
    fn test_summary_contents() {
        let temp_dir = TempDir::new().unwrap();
        let writer = writer_in(&temp_dir);
        let summary = SummaryFile::new(Path::new("out.txt"), &create_test_results());

        let path = writer.write_summary(&summary).unwrap();
        let loaded: SummaryFile = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.source, PathBuf::from("out.txt"));
        assert_eq!(loaded.operations.len(), 8);
        assert_eq!(loaded.groups.len(), 6);
        assert_eq!(loaded.groups["Neo4jTransaction"]["Create"], 500);
        assert_eq!(loaded.groups["DoubletsUnitedVolatile"]["Each All"], 20);
        assert!(loaded.groups["DoubletsSplitVolatile"].is_empty());
        assert_eq!(loaded.generated_at, summary.generated_at);
    }

    #[test]
    fn test_write_failure_keeps_path_in_error() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = ReportConfig::default().with_output_dir(temp_dir.path().to_path_buf());
        // a directory where the table file should go
        config.table_file = "taken".to_string();
        fs::create_dir(temp_dir.path().join("taken")).unwrap();

        match ArtifactWriter::new(&config).write_table("x") {
            Err(LinkBenchError::PersistenceError(msg)) => assert!(msg.contains("taken"), "{}", msg),
            other => panic!("expected persistence error, got {:?}", other),
        }
    }
}
