//! Initialize quote book use case

use crate::application::QuoteStore;
use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, QuotebookRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new quote book at the specified path, seeded with the
/// default quotes.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::new())?;

    let mut store = QuoteStore::load(repo.store())?;
    store.save()?;
    info!(root = %path.display(), quotes = store.len(), "Initialized quote book");

    println!("Initialized quotebook at {}", path.display());
    println!("Quotes: {}", store.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::QUOTES_KEY;
    use crate::infrastructure::KeyValueStore;
    use tempfile::TempDir;

    #[test]
    fn test_init_seeds_defaults() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("book");

        init(&root).unwrap();

        let repo = FileSystemRepository::new(root);
        assert!(repo.is_initialized());
        assert!(repo.load_config().is_ok());
        let raw = repo.store().get(QUOTES_KEY).unwrap().unwrap();
        assert!(raw.contains("Get busy living"));
    }

    #[test]
    fn test_init_twice_fails() {
        let temp = TempDir::new().unwrap();
        init(temp.path()).unwrap();
        assert!(init(temp.path()).is_err());
    }
}
