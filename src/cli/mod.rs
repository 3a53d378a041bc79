//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{format_findings, format_findings_by_file, format_survey, format_table_preview};
