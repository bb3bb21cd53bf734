//! End-to-end tests for the report pipeline

use linkbench::config::ReportConfig;
use linkbench::models::GroupKey;
use linkbench::report::{build_results, generate_report};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn config_for(temp_dir: &TempDir) -> ReportConfig {
    ReportConfig::default()
        .with_input_path(fixture("out.txt"))
        .with_output_dir(temp_dir.path().to_path_buf())
        .with_charts(false)
        .with_debug(false)
}

#[test]
fn test_fixture_table_matches_reference() {
    let temp_dir = TempDir::new().unwrap();
    let artifacts = generate_report(&config_for(&temp_dir)).expect("report");

    let expected = fs::read_to_string(fixture("results.md")).unwrap();
    assert_eq!(artifacts.table, expected);
    assert_eq!(fs::read_to_string(temp_dir.path().join("results.md")).unwrap(), expected);
}

#[test]
fn test_fixture_group_sizes() {
    let text = fs::read_to_string(fixture("out.txt")).unwrap();
    let results = build_results(&text).unwrap();

    assert_eq!(results.group(GroupKey::Neo4jTransaction).len(), 8);
    assert_eq!(results.group(GroupKey::Neo4jNonTransaction).len(), 8);
    assert_eq!(results.group(GroupKey::DoubletsUnitedVolatile).len(), 8);
    assert_eq!(results.group(GroupKey::DoubletsSplitNonVolatile).len(), 7);
    assert_eq!(results.get(GroupKey::DoubletsSplitNonVolatile, "Each Incoming"), None);
    assert_eq!(results.get(GroupKey::Neo4jNonTransaction, "Create"), Some(1392851128));
}

#[test]
fn test_rerun_is_byte_identical() {
    let first_dir = TempDir::new().unwrap();
    let second_dir = TempDir::new().unwrap();

    generate_report(&config_for(&first_dir)).unwrap();
    generate_report(&config_for(&second_dir)).unwrap();

    let first = fs::read(first_dir.path().join("results.md")).unwrap();
    let second = fs::read(second_dir.path().join("results.md")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_unmatched_input_yields_all_na_table() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("out.txt");
    fs::write(&input, "error: could not compile `linksneo4j`\n").unwrap();

    let config = config_for(&temp_dir).with_input_path(input);
    let artifacts = generate_report(&config).unwrap();

    let rows: Vec<&str> = artifacts.table.lines().skip(2).collect();
    assert_eq!(rows.len(), 8);
    for row in rows {
        let cells: Vec<&str> = row.split('|').map(str::trim).filter(|c| !c.is_empty()).collect();
        assert!(cells[1..].iter().all(|c| *c == "N/A"), "row: {}", row);
    }
}

#[test]
fn test_json_summary_written_on_request() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir).with_json(true);
    let artifacts = generate_report(&config).unwrap();

    let json_path = artifacts.json_path.expect("json path");
    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(json_path).unwrap()).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["groups"]["Neo4jTransaction"]["Create"], 649892279);
    assert_eq!(value["operations"].as_array().unwrap().len(), 8);
}

#[test]
fn test_charts_rendered_as_png() {
    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    let temp_dir = TempDir::new().unwrap();
    let config = config_for(&temp_dir).with_charts(true);
    let artifacts = generate_report(&config).expect("report with charts");

    assert_eq!(
        artifacts.chart_paths,
        vec![
            temp_dir.path().join("bench_rust.png"),
            temp_dir.path().join("bench_rust_log_scale.png"),
        ]
    );
    for path in &artifacts.chart_paths {
        let bytes = fs::read(path).unwrap();
        assert!(bytes.len() > PNG_SIGNATURE.len(), "{} is empty", path.display());
        assert_eq!(bytes[..8], PNG_SIGNATURE, "{} is not a PNG", path.display());
    }
}

#[test]
fn test_charts_render_without_any_data() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("out.txt");
    fs::write(&input, "no benchmarks ran\n").unwrap();

    let config = config_for(&temp_dir).with_input_path(input).with_charts(true);
    let artifacts = generate_report(&config).expect("report with empty charts");
    assert_eq!(artifacts.chart_paths.len(), 2);
    assert!(artifacts.chart_paths.iter().all(|p| p.exists()));
}
