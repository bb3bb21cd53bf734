//! Aggregated benchmark results
//!
//! Holds the six benchmark groups, each mapping an operation name to the
//! last measured `ns/iter` value seen for it.

use crate::models::measurement::{GroupKey, Measurement, CANONICAL_OPERATIONS, OPERATION_COUNT};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Operation name -> nanoseconds per iteration
pub type GroupTimings = BTreeMap<String, u64>;

/// All six groups extracted from one benchmark log
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    pub neo4j_transaction: GroupTimings,
    pub neo4j_non_transaction: GroupTimings,
    pub doublets_united_volatile: GroupTimings,
    pub doublets_united_non_volatile: GroupTimings,
    pub doublets_split_volatile: GroupTimings,
    pub doublets_split_non_volatile: GroupTimings,
}

impl ResultSet {
    /// Create an empty result set
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregate measurements in order; later values overwrite earlier ones
    pub fn from_measurements<I>(measurements: I) -> Self
    where
        I: IntoIterator<Item = Measurement>,
    {
        let mut results = Self::new();
        for measurement in measurements {
            results.insert(measurement);
        }
        results
    }

    /// Route a measurement into its group, replacing any previous value
    pub fn insert(&mut self, measurement: Measurement) -> Option<u64> {
        self.group_mut(measurement.group)
            .insert(measurement.operation, measurement.nanos)
    }

    /// Timings for one group
    pub fn group(&self, key: GroupKey) -> &GroupTimings {
        match key {
            GroupKey::Neo4jTransaction => &self.neo4j_transaction,
            GroupKey::Neo4jNonTransaction => &self.neo4j_non_transaction,
            GroupKey::DoubletsUnitedVolatile => &self.doublets_united_volatile,
            GroupKey::DoubletsUnitedNonVolatile => &self.doublets_united_non_volatile,
            GroupKey::DoubletsSplitVolatile => &self.doublets_split_volatile,
            GroupKey::DoubletsSplitNonVolatile => &self.doublets_split_non_volatile,
        }
    }

    fn group_mut(&mut self, key: GroupKey) -> &mut GroupTimings {
        match key {
            GroupKey::Neo4jTransaction => &mut self.neo4j_transaction,
            GroupKey::Neo4jNonTransaction => &mut self.neo4j_non_transaction,
            GroupKey::DoubletsUnitedVolatile => &mut self.doublets_united_volatile,
            GroupKey::DoubletsUnitedNonVolatile => &mut self.doublets_united_non_volatile,
            GroupKey::DoubletsSplitVolatile => &mut self.doublets_split_volatile,
            GroupKey::DoubletsSplitNonVolatile => &mut self.doublets_split_non_volatile,
        }
    }

    /// Iterate groups in presentation order
    pub fn groups(&self) -> impl Iterator<Item = (GroupKey, &GroupTimings)> {
        GroupKey::PRESENTATION_ORDER
            .into_iter()
            .map(move |key| (key, self.group(key)))
    }

    /// Value for one operation, if measured
    pub fn get(&self, key: GroupKey, operation: &str) -> Option<u64> {
        self.group(key).get(operation).copied()
    }

    /// Values aligned to the canonical operation order, zero when absent
    pub fn series(&self, key: GroupKey) -> [u64; OPERATION_COUNT] {
        let group = self.group(key);
        CANONICAL_OPERATIONS.map(|op| group.get(op).copied().unwrap_or(0))
    }

    /// Fastest Neo4j time for an operation; zero and missing values are skipped
    pub fn min_neo4j(&self, operation: &str) -> Option<u64> {
        GroupKey::NEO4J
            .iter()
            .filter_map(|&key| self.get(key, operation))
            .filter(|&nanos| nanos != 0)
            .min()
    }

    /// Total number of stored timings across all groups
    pub fn len(&self) -> usize {
        self.groups().map(|(_, group)| group.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
