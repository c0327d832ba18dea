//! Error types for quotebook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for quotebook
#[derive(Debug, Error)]
pub enum QuotebookError {
    #[error("Not a quotebook directory: {0}")]
    NotQuotebookDirectory(PathBuf),

    #[error("Invalid quote: {0}")]
    InvalidQuote(String),

    #[error("Error importing quotes file: {0}")]
    InvalidImport(String),

    #[error("No quotes available for category: {0}")]
    NoQuotesAvailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Remote error: {0}")]
    Remote(#[from] reqwest::Error),

    #[error("Unexpected remote response: {0}")]
    RemoteFormat(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl QuotebookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QuotebookError::NotQuotebookDirectory(_) => 2,
            QuotebookError::InvalidQuote(_) => 3,
            QuotebookError::InvalidImport(_) => 4,
            QuotebookError::NoQuotesAvailable(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QuotebookError::NotQuotebookDirectory(path) => {
                format!(
                    "Not a quotebook directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'quotebook init' in this directory to create a new quote book\n\
                    • Navigate to an existing quotebook directory\n\
                    • Set QUOTEBOOK_ROOT environment variable to your quote book path",
                    path.display()
                )
            }
            QuotebookError::InvalidQuote(msg) => {
                format!(
                    "{}\n\n\
                    Example:\n\
                    quotebook add \"Stay hungry, stay foolish.\" Inspiration",
                    msg
                )
            }
            QuotebookError::InvalidImport(msg) => {
                format!(
                    "Error importing quotes file: {}\n\n\
                    Expected a JSON array such as:\n\
                    [\n  {{ \"text\": \"...\", \"category\": \"...\" }}\n]\n\n\
                    Tip: 'quotebook export' writes a file in this format",
                    msg
                )
            }
            QuotebookError::NoQuotesAvailable(category) => {
                format!(
                    "No quotes available for this category: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'quotebook categories' to see available categories\n\
                    • Categories are case-sensitive\n\
                    • Use 'all' to pick from every quote",
                    category
                )
            }
            QuotebookError::Config(msg) => {
                if msg.contains("Invalid dedup key") {
                    format!(
                        "{}\n\n\
                        Example: quotebook config dedup text+category",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            QuotebookError::TomlDeserialize(e) => {
                format!(
                    "Failed to parse .quotebook/config.toml: {}\n\n\
                    Valid keys: remote_url, sync_interval_secs, dedup, created",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QuotebookError
pub type Result<T> = std::result::Result<T, QuotebookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_quotebook_directory_suggestion() {
        let err = QuotebookError::NotQuotebookDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("quotebook init"));
        assert!(msg.contains("QUOTEBOOK_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_invalid_import_shows_format() {
        let err = QuotebookError::InvalidImport("expected a JSON array".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("\"text\""));
        assert!(msg.contains("quotebook export"));
    }

    #[test]
    fn test_no_quotes_available_suggestions() {
        let err = QuotebookError::NoQuotesAvailable("Poetry".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("quotebook categories"));
        assert!(msg.contains("case-sensitive"));
    }

    #[test]
    fn test_config_dedup_suggestion() {
        let err = QuotebookError::Config("Invalid dedup key: 'id'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("quotebook config dedup"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            QuotebookError::NotQuotebookDirectory(PathBuf::new()).exit_code(),
            2
        );
        assert_eq!(QuotebookError::InvalidQuote(String::new()).exit_code(), 3);
        assert_eq!(QuotebookError::InvalidImport(String::new()).exit_code(), 4);
        assert_eq!(
            QuotebookError::NoQuotesAvailable(String::new()).exit_code(),
            5
        );
        assert_eq!(QuotebookError::Config(String::new()).exit_code(), 1);
    }

    #[test]
    fn test_broken_config_names_file() {
        let err: QuotebookError = toml::from_str::<toml::Value>("= 1").unwrap_err().into();
        let msg = err.display_with_suggestions();
        assert!(msg.contains(".quotebook/config.toml"));
        assert!(msg.contains("sync_interval_secs"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = QuotebookError::Config("plain".to_string());
        assert_eq!(err.display_with_suggestions(), "plain");
    }
}
