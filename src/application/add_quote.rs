//! Add quote use case

use crate::application::Session;
use crate::domain::Quote;
use crate::error::Result;
use crate::infrastructure::{KeyValueStore, RemoteSource};
use tracing::{info, warn};

/// Validate and store a new quote, then offer it to the remote.
///
/// A failed post is logged and otherwise ignored; the quote stays stored.
pub async fn add_quote<S: KeyValueStore>(
    session: &mut Session<S>,
    remote: &dyn RemoteSource,
    text: &str,
    category: &str,
) -> Result<Quote> {
    let quote = Quote::parse(text, category)?;
    session.store_mut().append(quote.clone())?;

    match remote.post_quote(&quote).await {
        Ok(()) => info!(text = %quote.text, "Quote posted to server"),
        Err(e) => warn!(error = %e, "Error posting quote to server"),
    }

    Ok(quote)
}
