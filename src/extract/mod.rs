//! Benchmark log extraction module
//!
//! Pulls `ns/iter` measurements out of raw `cargo bench` output.

pub mod extractor;

// Re-export commonly used types
pub use extractor::{extract_measurements, Extractor};
