//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_category_list, format_import_report, format_notification, format_quote_list,
};
