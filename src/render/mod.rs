//! Report rendering module
//!
//! Contains the markdown table renderer and the bar chart renderer.

pub mod chart;
pub mod table;

// Re-export commonly used types
pub use chart::{ChartRenderer, ChartScale};
pub use table::render_markdown_table;
