//! Result formatting and display
//!
//! This module provides formatters for printing operation results:
//! - Line-oriented text with colors
//! - JSON output
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `text` - Line-oriented formatter for values, keys, paths and entries
//! - `json` - JSON output

mod config;
mod json;
mod text;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, write_json};
pub use text::TextFormatter;
