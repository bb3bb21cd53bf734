//! Line pattern extractor
//!
//! Two patterns are applied over the whole log: one for Neo4j results
//! (`test Create/Neo4j_Transaction ... bench: 500 ns/iter (+/- 10)`) and one
//! for Doublets results (`test Delete/Doublets_United_Volatile ... bench: ...`).
//! Text matching neither is skipped without complaint.

use regex::{Captures, Regex};
use tracing::{debug, info};

use crate::models::{GroupKey, Measurement, StorageMode, TransactionMode, TreeMode};
use crate::{LinkBenchError, Result};

// Timings are ASCII digit runs; `\d` would also accept other Unicode digits
const NEO4J_PATTERN: &str =
    r"test\s+(\w+)/(Neo4j)_(\w+)\s+\.\.\.\s+bench:\s+([0-9]+)\s+ns/iter\s+\(\+/-\s+[0-9]+\)";
const DOUBLETS_PATTERN: &str =
    r"test\s+(\w+)/(Doublets)_(\w+)_(\w+)\s+\.\.\.\s+bench:\s+([0-9]+)\s+ns/iter\s+\(\+/-\s+[0-9]+\)";

/// Compiled extraction patterns
#[derive(Debug, Clone)]
pub struct Extractor {
    neo4j: Regex,
    doublets: Regex,
}

impl Extractor {
    /// Compile both line patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            neo4j: Regex::new(NEO4J_PATTERN)?,
            doublets: Regex::new(DOUBLETS_PATTERN)?,
        })
    }

    /// Extract every measurement from `text`.
    ///
    /// Neo4j matches come first, then Doublets matches, each in text order.
    pub fn extract(&self, text: &str) -> Result<Vec<Measurement>> {
        let mut measurements = Vec::new();

        let mut neo4j_matches = 0usize;
        for caps in self.neo4j.captures_iter(text) {
            let operation = &caps[1];
            let mode = TransactionMode::from_token(&caps[3]);
            let nanos = parse_nanos(operation, &caps, 4)?;
            let measurement = Measurement::new(operation, GroupKey::neo4j(mode), nanos);
            debug!(
                "Neo4j {} - {}: {} ns",
                measurement.operation, &caps[3], measurement.nanos
            );
            measurements.push(measurement);
            neo4j_matches += 1;
        }
        info!(pattern = NEO4J_PATTERN, matches = neo4j_matches, "Neo4j pattern applied");

        let mut doublets_matches = 0usize;
        for caps in self.doublets.captures_iter(text) {
            let operation = &caps[1];
            let tree = TreeMode::from_token(&caps[3]);
            let storage = StorageMode::from_token(&caps[4]);
            let nanos = parse_nanos(operation, &caps, 5)?;
            let measurement = Measurement::new(operation, GroupKey::doublets(tree, storage), nanos);
            debug!(
                "Doublets {} - {} {}: {} ns",
                measurement.operation, &caps[3], &caps[4], measurement.nanos
            );
            measurements.push(measurement);
            doublets_matches += 1;
        }
        info!(
            pattern = DOUBLETS_PATTERN,
            matches = doublets_matches,
            "Doublets pattern applied"
        );

        Ok(measurements)
    }
}

/// Parse the captured digit run; only overflow can fail here
fn parse_nanos(operation: &str, caps: &Captures<'_>, index: usize) -> Result<u64> {
    let raw = &caps[index];
    raw.parse::<u64>().map_err(|_| LinkBenchError::ParseError {
        operation: operation.replace('_', " "),
        value: raw.to_string(),
    })
}

/// Convenience wrapper compiling the patterns and extracting in one call
pub fn extract_measurements(text: &str) -> Result<Vec<Measurement>> {
    Extractor::new()?.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
running 48 tests
test Create/Neo4j_NonTransaction ... bench: 3193148270 ns/iter (+/- 245618424)
test Create/Neo4j_Transaction ... bench: 3111053532 ns/iter (+/- 117018291)
test Create/Doublets_United_Volatile ... bench: 97049 ns/iter (+/- 2151)
test Create/Doublets_United_NonVolatile ... bench: 100545 ns/iter (+/- 1875)
test Create/Doublets_Split_Volatile ... bench: 84961 ns/iter (+/- 1105)
test Create/Doublets_Split_NonVolatile ... bench: 83621 ns/iter (+/- 6330)
test Each_All/Neo4j_Transaction ... bench: 31462 ns/iter (+/- 891)
warning: unrelated noise
test result: ok. 0 passed; 0 failed; 48 measured
";

    #[test]
    fn test_extracts_both_patterns() {
        let measurements = extract_measurements(SAMPLE).unwrap();
        assert_eq!(measurements.len(), 7);

        // Neo4j matches are emitted before Doublets matches
        assert!(measurements[..3].iter().all(|m| m.group.is_neo4j()));
        assert!(measurements[3..].iter().all(|m| !m.group.is_neo4j()));
    }

    #[test]
    fn test_neo4j_transaction_line() {
        let text = "test Create/Neo4j_Transaction ... bench: 500 ns/iter (+/- 10)";
        let measurements = extract_measurements(text).unwrap();
        assert_eq!(
            measurements,
            vec![Measurement {
                operation: "Create".to_string(),
                group: GroupKey::Neo4jTransaction,
                nanos: 500,
            }]
        );
    }

    #[test]
    fn test_doublets_united_volatile_line() {
        let text = "test Delete/Doublets_United_Volatile ... bench: 200 ns/iter (+/- 5)";
        let measurements = extract_measurements(text).unwrap();
        assert_eq!(measurements.len(), 1);
        assert_eq!(measurements[0].operation, "Delete");
        assert_eq!(measurements[0].group, GroupKey::DoubletsUnitedVolatile);
        assert_eq!(measurements[0].nanos, 200);
    }

    #[test]
    fn test_operation_underscores_become_spaces() {
        let text = "test Each_Outgoing/Doublets_Split_NonVolatile   ...   bench:   42 ns/iter (+/- 1)";
        let measurements = extract_measurements(text).unwrap();
        assert_eq!(measurements[0].operation, "Each Outgoing");
        assert_eq!(measurements[0].group, GroupKey::DoubletsSplitNonVolatile);
    }

    #[test]
    fn test_unknown_mode_tokens_fall_back() {
        let text = "\
test Update/Neo4j_Batched ... bench: 10 ns/iter (+/- 1)
test Update/Doublets_Merged_Durable ... bench: 20 ns/iter (+/- 1)
";
        let measurements = extract_measurements(text).unwrap();
        assert_eq!(measurements[0].group, GroupKey::Neo4jNonTransaction);
        assert_eq!(measurements[1].group, GroupKey::DoubletsSplitNonVolatile);
    }

    #[test]
    fn test_non_matching_lines_are_ignored() {
        let text = "\
test Create/Neo4j_Transaction ... bench: 1,234 ns/iter (+/- 10)
test Create/Postgres_Transaction ... bench: 500 ns/iter (+/- 10)
Benchmarking Create/Neo4j_Transaction: Warming up
";
        assert!(extract_measurements(text).unwrap().is_empty());
        assert!(extract_measurements("").unwrap().is_empty());
    }

    #[test]
    fn test_overflowing_value_is_parse_error() {
        let text = "test Each_All/Neo4j_Transaction ... bench: 99999999999999999999999 ns/iter (+/- 1)";
        match extract_measurements(text) {
            Err(LinkBenchError::ParseError { operation, value }) => {
                assert_eq!(operation, "Each All");
                assert_eq!(value, "99999999999999999999999");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        let text = "\
test Create/Neo4j_Transaction ... bench: \u{0665}\u{0660}\u{0660} ns/iter (+/- 10)
test Create/Doublets_United_Volatile ... bench: \u{FF15}\u{FF10} ns/iter (+/- 1)
test Delete/Neo4j_Transaction ... bench: 500 ns/iter (+/- \u{0661})
";
        assert!(extract_measurements(text).unwrap().is_empty());
    }
}
