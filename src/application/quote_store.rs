//! Quote store
//!
//! Owns the in-memory quote list and mirrors it to a [`KeyValueStore`] under
//! [`QUOTES_KEY`]. Every mutation rewrites the full list.

use crate::domain::{category_names, default_quotes, CategoryFilter, DedupKey, Quote};
use crate::error::Result;
use crate::infrastructure::storage::QUOTES_KEY;
use crate::infrastructure::KeyValueStore;
use tracing::{debug, warn};

pub struct QuoteStore<S: KeyValueStore> {
    storage: S,
    quotes: Vec<Quote>,
}

impl<S: KeyValueStore> QuoteStore<S> {
    /// Load the persisted list, falling back to the defaults when nothing
    /// usable is stored. Malformed data counts as absent.
    pub fn load(storage: S) -> Result<Self> {
        let quotes = read_quotes(&storage)?;
        Ok(QuoteStore { storage, quotes })
    }

    /// Replace the in-memory list with what is currently persisted, picking up
    /// writes made by other processes since this store was loaded.
    pub fn reload(&mut self) -> Result<()> {
        self.quotes = read_quotes(&self.storage)?;
        Ok(())
    }

    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn by_category(&self, name: &str) -> Vec<&Quote> {
        self.quotes.iter().filter(|q| q.category == name).collect()
    }

    pub fn filtered(&self, filter: &CategoryFilter) -> Vec<&Quote> {
        filter.apply(&self.quotes)
    }

    /// Distinct categories in first-seen order, "all" first
    pub fn categories(&self) -> Vec<String> {
        category_names(&self.quotes)
    }

    pub fn contains(&self, quote: &Quote, key: DedupKey) -> bool {
        self.quotes.iter().any(|q| key.same(q, quote))
    }

    /// Append a validated quote and persist
    pub fn append(&mut self, quote: Quote) -> Result<()> {
        quote.validate()?;
        self.quotes.push(quote);
        self.save()
    }

    /// Append every quote not already present under `key`.
    /// Persists once if anything was added; returns the added quotes.
    pub fn merge(&mut self, incoming: Vec<Quote>, key: DedupKey) -> Result<Vec<Quote>> {
        let before = self.quotes.len();
        for quote in incoming.into_iter().filter(Quote::is_valid) {
            if !self.contains(&quote, key) {
                self.quotes.push(quote);
            }
        }
        if self.quotes.len() > before {
            self.save()?;
        }
        Ok(self.quotes[before..].to_vec())
    }

    /// Write the full list to storage
    pub fn save(&mut self) -> Result<()> {
        let serialized = serde_json::to_string(&self.quotes)?;
        self.storage.set(QUOTES_KEY, &serialized)?;
        debug!(count = self.quotes.len(), "Persisted quote list");
        Ok(())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }
}

fn read_quotes<S: KeyValueStore>(storage: &S) -> Result<Vec<Quote>> {
    let Some(raw) = storage.get(QUOTES_KEY)? else {
        return Ok(default_quotes());
    };

    match serde_json::from_str::<Vec<Quote>>(&raw) {
        Ok(stored) => {
            let total = stored.len();
            let valid: Vec<Quote> = stored.into_iter().filter(Quote::is_valid).collect();
            if valid.len() < total {
                warn!(
                    dropped = total - valid.len(),
                    "Ignoring stored quotes with empty text or category"
                );
            }
            Ok(valid)
        }
        Err(e) => {
            warn!(error = %e, "Stored quote list is malformed, using defaults");
            Ok(default_quotes())
        }
    }
}
