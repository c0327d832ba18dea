//! quotebook - Terminal quote collection
//!
//! Keeps a categorized list of quotes in a local quote book, filters and
//! picks from it, moves it in and out of JSON files, and merges new quotes
//! from a remote endpoint on a timer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::QuotebookError;
