//! File system repository

use crate::error::{QuotebookError, Result};
use crate::infrastructure::{Config, FileKeyValueStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory marking a quote book root
pub const BOOK_DIR: &str = ".quotebook";

/// Abstract repository for quote book operations
pub trait QuotebookRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .quotebook/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .quotebook/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .quotebook directory exists
    fn is_initialized(&self) -> bool;

    /// Create .quotebook directory structure
    fn initialize(&self) -> Result<()>;

    /// Durable key-value store backing this quote book
    fn store(&self) -> FileKeyValueStore;
}

/// File system implementation of QuotebookRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the quote book root.
    /// First checks QUOTEBOOK_ROOT, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("QUOTEBOOK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_book_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(QuotebookError::Config(format!(
                    "QUOTEBOOK_ROOT is set to '{}' but no .quotebook directory found. \
                    Run 'quotebook init' in that directory or unset QUOTEBOOK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the quote book root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_book_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(QuotebookError::NotQuotebookDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_book_dir(path: &Path) -> bool {
        path.join(BOOK_DIR).is_dir()
    }
}

impl QuotebookRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_book_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let book_dir = self.root.join(BOOK_DIR);

        if book_dir.exists() {
            return Err(QuotebookError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&book_dir)?;
        fs::create_dir(book_dir.join("store"))?;
        Ok(())
    }

    fn store(&self) -> FileKeyValueStore {
        FileKeyValueStore::new(self.root.join(BOOK_DIR).join("store"))
    }
}
