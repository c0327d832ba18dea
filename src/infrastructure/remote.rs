//! Remote quote source
//!
//! The remote is a placeholder endpoint: GET returns arbitrary records from which
//! only a title is kept, POST accepts a quote and its response is ignored.

use crate::domain::Quote;
use crate::error::{QuotebookError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Category assigned to every quote pulled from the remote
pub const SERVER_CATEGORY: &str = "Server";

/// Only this many records of a snapshot are kept
pub const SNAPSHOT_LIMIT: usize = 5;

#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the current remote snapshot as quotes
    async fn fetch_snapshot(&self) -> Result<Vec<Quote>>;

    /// Deliver a newly added quote
    async fn post_quote(&self, quote: &Quote) -> Result<()>;
}

/// Convert a raw remote payload into quotes.
///
/// The payload must be a JSON array. The first [`SNAPSHOT_LIMIT`] records are
/// considered; records without a non-empty string `title` are dropped.
pub fn snapshot_from_json(payload: Value) -> Result<Vec<Quote>> {
    let Value::Array(items) = payload else {
        return Err(QuotebookError::RemoteFormat(
            "expected a JSON array".to_string(),
        ));
    };

    Ok(items
        .iter()
        .take(SNAPSHOT_LIMIT)
        .filter_map(|item| item.get("title").and_then(Value::as_str))
        .filter(|title| !title.trim().is_empty())
        .map(|title| Quote::new(title, SERVER_CATEGORY))
        .collect())
}

/// HTTP implementation backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpRemote {
    client: reqwest::Client,
    url: String,
}

impl HttpRemote {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quotebook/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(HttpRemote {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_snapshot(&self) -> Result<Vec<Quote>> {
        let payload: Value = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let quotes = snapshot_from_json(payload)?;
        debug!(url = %self.url, count = quotes.len(), "Fetched remote snapshot");
        Ok(quotes)
    }

    async fn post_quote(&self, quote: &Quote) -> Result<()> {
        self.client
            .post(&self.url)
            .json(quote)
            .send()
            .await?
            .error_for_status()?;

        debug!(url = %self.url, text = %quote.text, "Posted quote to remote");
        Ok(())
    }
}

/// Remote that never talks to the network
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineRemote;

#[async_trait]
impl RemoteSource for OfflineRemote {
    async fn fetch_snapshot(&self) -> Result<Vec<Quote>> {
        Ok(Vec::new())
    }

    async fn post_quote(&self, _quote: &Quote) -> Result<()> {
        Ok(())
    }
}
