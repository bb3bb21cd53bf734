//! Data models module
//!
//! Contains the measurement tuple, the six benchmark groups and the
//! aggregated result set used by every renderer.

pub mod measurement;
pub mod result;

// Re-export commonly used types
pub use measurement::{
    GroupKey,
    Measurement,
    StorageMode,
    TransactionMode,
    TreeMode,
    CANONICAL_OPERATIONS,
    OPERATION_COUNT,
};
pub use result::ResultSet;
