//! Viewing session
//!
//! Combines the quote store with the selected-category preference (durable)
//! and the last-viewed quote (session-scoped).

use crate::application::QuoteStore;
use crate::domain::{CategoryFilter, Quote};
use crate::error::{QuotebookError, Result};
use crate::infrastructure::storage::{LAST_VIEWED_KEY, SELECTED_CATEGORY_KEY};
use crate::infrastructure::{KeyValueStore, MemoryKeyValueStore};
use rand::Rng;
use tracing::warn;

pub struct Session<S: KeyValueStore> {
    store: QuoteStore<S>,
    transient: MemoryKeyValueStore,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: QuoteStore<S>) -> Self {
        Session {
            store,
            transient: MemoryKeyValueStore::new(),
        }
    }

    /// Open a session over a durable store
    pub fn open(storage: S) -> Result<Self> {
        Ok(Self::new(QuoteStore::load(storage)?))
    }

    pub fn store(&self) -> &QuoteStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut QuoteStore<S> {
        &mut self.store
    }

    /// The saved filter, if it still names an existing category
    pub fn current_filter(&self) -> Result<CategoryFilter> {
        let saved = self.store.storage().get(SELECTED_CATEGORY_KEY)?;
        let Some(saved) = saved else {
            return Ok(CategoryFilter::All);
        };

        if self.store.categories().iter().any(|c| *c == saved) {
            Ok(saved.parse().unwrap_or_default())
        } else {
            Ok(CategoryFilter::All)
        }
    }

    /// Remember the selected filter
    pub fn select_category(&mut self, filter: &CategoryFilter) -> Result<()> {
        self.store
            .storage_mut()
            .set(SELECTED_CATEGORY_KEY, filter.as_str())
    }

    /// Select `filter`, return the matching quotes and remember the first one
    /// as last viewed.
    pub fn display(&mut self, filter: &CategoryFilter) -> Result<Vec<Quote>> {
        self.select_category(filter)?;
        let view: Vec<Quote> = self.store.filtered(filter).into_iter().cloned().collect();
        if let Some(first) = view.first() {
            self.remember(first)?;
        }
        Ok(view)
    }

    /// Re-apply the saved filter, e.g. after the list changed underneath
    pub fn refresh(&mut self) -> Result<Vec<Quote>> {
        let filter = self.current_filter()?;
        self.display(&filter)
    }

    /// Pick a random quote matching `filter`
    pub fn random(&mut self, filter: &CategoryFilter) -> Result<Quote> {
        let candidates = self.store.filtered(filter);
        if candidates.is_empty() {
            return Err(QuotebookError::NoQuotesAvailable(filter.to_string()));
        }

        let index = rand::rng().random_range(0..candidates.len());
        let quote = candidates[index].clone();
        self.remember(&quote)?;
        Ok(quote)
    }

    pub fn last_viewed(&self) -> Option<Quote> {
        let raw = self.transient.get(LAST_VIEWED_KEY).ok().flatten()?;
        match serde_json::from_str(&raw) {
            Ok(quote) => Some(quote),
            Err(e) => {
                warn!(error = %e, "Discarding malformed last viewed quote");
                None
            }
        }
    }

    fn remember(&mut self, quote: &Quote) -> Result<()> {
        let serialized = serde_json::to_string(quote)?;
        self.transient.set(LAST_VIEWED_KEY, &serialized)
    }
}
