//! Measurement and group key definitions
//!
//! A measurement is one `ns/iter` figure pulled out of the benchmark log,
//! tagged with the storage backend it was measured against.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of canonical operations (rows in the table)
pub const OPERATION_COUNT: usize = 8;

/// Canonical operation order used by the table and both charts
pub const CANONICAL_OPERATIONS: [&str; OPERATION_COUNT] = [
    "Create",
    "Update",
    "Delete",
    "Each All",
    "Each Identity",
    "Each Concrete",
    "Each Outgoing",
    "Each Incoming",
];

/// Whether a Neo4j benchmark ran inside a database transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionMode {
    Transaction,
    NonTransaction,
}

/// Doublets tree layout under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TreeMode {
    United,
    Split,
}

/// Doublets storage medium under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageMode {
    Volatile,
    NonVolatile,
}

impl TransactionMode {
    /// Classify a raw token; anything but `Transaction` is non-transactional
    pub fn from_token(token: &str) -> Self {
        if token == "Transaction" {
            TransactionMode::Transaction
        } else {
            TransactionMode::NonTransaction
        }
    }
}

impl TreeMode {
    /// Classify a raw token; anything but `United` is split
    pub fn from_token(token: &str) -> Self {
        if token == "United" {
            TreeMode::United
        } else {
            TreeMode::Split
        }
    }
}

impl StorageMode {
    /// Classify a raw token; anything but `Volatile` is non-volatile
    pub fn from_token(token: &str) -> Self {
        if token == "Volatile" {
            StorageMode::Volatile
        } else {
            StorageMode::NonVolatile
        }
    }
}

/// One of the six benchmark groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    Neo4jTransaction,
    Neo4jNonTransaction,
    DoubletsUnitedVolatile,
    DoubletsUnitedNonVolatile,
    DoubletsSplitVolatile,
    DoubletsSplitNonVolatile,
}

impl GroupKey {
    /// All groups in presentation order (table columns, chart series)
    pub const PRESENTATION_ORDER: [GroupKey; 6] = [
        GroupKey::DoubletsUnitedVolatile,
        GroupKey::DoubletsUnitedNonVolatile,
        GroupKey::DoubletsSplitVolatile,
        GroupKey::DoubletsSplitNonVolatile,
        GroupKey::Neo4jNonTransaction,
        GroupKey::Neo4jTransaction,
    ];

    /// The two Neo4j groups
    pub const NEO4J: [GroupKey; 2] = [GroupKey::Neo4jNonTransaction, GroupKey::Neo4jTransaction];

    pub fn neo4j(mode: TransactionMode) -> Self {
        match mode {
            TransactionMode::Transaction => GroupKey::Neo4jTransaction,
            TransactionMode::NonTransaction => GroupKey::Neo4jNonTransaction,
        }
    }

    pub fn doublets(tree: TreeMode, storage: StorageMode) -> Self {
        match (tree, storage) {
            (TreeMode::United, StorageMode::Volatile) => GroupKey::DoubletsUnitedVolatile,
            (TreeMode::United, StorageMode::NonVolatile) => GroupKey::DoubletsUnitedNonVolatile,
            (TreeMode::Split, StorageMode::Volatile) => GroupKey::DoubletsSplitVolatile,
            (TreeMode::Split, StorageMode::NonVolatile) => GroupKey::DoubletsSplitNonVolatile,
        }
    }

    /// Whether this group is one of the Neo4j baselines
    pub fn is_neo4j(&self) -> bool {
        matches!(self, GroupKey::Neo4jTransaction | GroupKey::Neo4jNonTransaction)
    }

    /// Human-readable label used for table headers and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            GroupKey::Neo4jTransaction => "Neo4j Transaction",
            GroupKey::Neo4jNonTransaction => "Neo4j NonTransaction",
            GroupKey::DoubletsUnitedVolatile => "Doublets United Volatile",
            GroupKey::DoubletsUnitedNonVolatile => "Doublets United NonVolatile",
            GroupKey::DoubletsSplitVolatile => "Doublets Split Volatile",
            GroupKey::DoubletsSplitNonVolatile => "Doublets Split NonVolatile",
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single extracted benchmark figure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Operation name with underscores normalized to spaces
    pub operation: String,
    /// Group the figure belongs to
    pub group: GroupKey,
    /// Elapsed time per iteration in nanoseconds
    pub nanos: u64,
}

impl Measurement {
    /// Create a measurement, normalizing the raw operation token
    pub fn new(raw_operation: &str, group: GroupKey, nanos: u64) -> Self {
        Self {
            operation: normalize_operation(raw_operation),
            group,
            nanos,
        }
    }
}

/// Replace underscores with spaces (`Each_All` -> `Each All`)
pub fn normalize_operation(raw: &str) -> String {
    raw.replace('_', " ")
}
