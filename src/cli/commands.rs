//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "quotebook")]
#[command(about = "Terminal quote collection with remote sync", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Never contact the remote endpoint
    #[arg(long, global = true)]
    pub offline: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new quote book
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Show quotes, optionally switching the category filter
    List {
        /// Category to show ("all" for every quote; default: last selected)
        category: Option<String>,
    },

    /// List categories
    Categories,

    /// Show a random quote
    Random {
        /// Category to pick from (default: last selected)
        category: Option<String>,
    },

    /// Add a quote
    Add {
        /// Quote text
        text: String,

        /// Category to file it under
        category: String,
    },

    /// Export all quotes to a JSON file
    Export {
        /// Output file
        #[arg(default_value = "quotes.json")]
        path: PathBuf,
    },

    /// Import quotes from a JSON file
    Import {
        /// File previously produced by export (or any JSON array of quotes)
        path: PathBuf,
    },

    /// Merge quotes from the remote endpoint
    Sync {
        /// Keep syncing on a timer until interrupted
        #[arg(short, long)]
        watch: bool,

        /// Seconds between syncs in watch mode (default: from config)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
        interval: Option<u64>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
