//! Report generation module - Data transformations and rendering.
//!
//! This module handles:
//! - Flattening the suite tree into rows
//! - Grouping rows by suite and file, and counting states
//! - Rendering the Markdown document
//! - Export to Markdown and JSON files
//!
//! # Module Organization
//!
//! - `types` - Rendering model (Row, SuiteGroup, RunSummary, RenderOptions)
//! - `flatten` - Depth-first suite walk
//! - `stats` - Grouping and summary counts
//! - `markdown` - Markdown document rendering
//! - `export` - Markdown and JSON file output

mod export;
mod flatten;
mod markdown;
mod stats;
mod types;

// Re-export types
pub use types::{DEFAULT_TITLE, RenderOptions};

// Re-export pipeline functions
pub use flatten::flatten_report;
pub use markdown::render_markdown;
pub use stats::{group_rows, summarize_rows};

// Re-export export functions
pub use export::{export_json_summary, write_markdown_report};
