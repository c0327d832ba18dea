//! Remote reconciliation
//!
//! One-way, append-if-absent merge of the remote snapshot into the local
//! store. Local quotes are never removed or rewritten. Failed fetches are
//! logged and retried only by the next regular tick.

use crate::application::{QuoteStore, Session};
use crate::domain::{DedupKey, Quote};
use crate::infrastructure::{KeyValueStore, RemoteSource};
use std::future::Future;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Message shown when a tick added quotes
pub const SYNC_NOTICE: &str = "Quotes updated from server!";

/// Result of a single reconciliation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Records in the remote snapshot
    pub fetched: usize,
    /// Quotes appended to the store
    pub added: Vec<Quote>,
    /// The fetch failed and nothing was merged
    pub failed: bool,
}

impl SyncReport {
    pub fn changed(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Emitted once per tick that changed the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub added: Vec<Quote>,
    /// Quotes visible under the current filter after the change
    pub view: Vec<Quote>,
}

pub struct SyncReconciler {
    remote: Box<dyn RemoteSource>,
    dedup: DedupKey,
    interval: Duration,
    notifier: Option<UnboundedSender<Notification>>,
}

impl SyncReconciler {
    pub fn new(remote: Box<dyn RemoteSource>, dedup: DedupKey, interval: Duration) -> Self {
        SyncReconciler {
            remote,
            dedup,
            interval,
            notifier: None,
        }
    }

    /// Deliver change notifications to `tx`
    pub fn with_notifier(mut self, tx: UnboundedSender<Notification>) -> Self {
        self.notifier = Some(tx);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Fetch the snapshot and merge it into the latest persisted state of
    /// `store`. The store is reloaded first so quotes written by other
    /// processes since the last tick survive the save.
    pub async fn reconcile_once<S: KeyValueStore>(
        &self,
        store: &mut QuoteStore<S>,
    ) -> SyncReport {
        let snapshot = match self.remote.fetch_snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(error = %e, "Error fetching quotes from server");
                return SyncReport {
                    failed: true,
                    ..SyncReport::default()
                };
            }
        };

        let fetched = snapshot.len();
        if let Err(e) = store.reload() {
            warn!(error = %e, "Failed to reload quotes before sync");
            return SyncReport {
                fetched,
                added: Vec::new(),
                failed: true,
            };
        }

        match store.merge(snapshot, self.dedup) {
            Ok(added) => SyncReport {
                fetched,
                added,
                failed: false,
            },
            Err(e) => {
                warn!(error = %e, "Failed to persist synced quotes");
                SyncReport {
                    fetched,
                    added: Vec::new(),
                    failed: true,
                }
            }
        }
    }

    /// One tick: reconcile, refresh the view and notify if anything changed
    pub async fn tick<S: KeyValueStore>(&self, session: &mut Session<S>) -> SyncReport {
        let report = self.reconcile_once(session.store_mut()).await;

        if !report.changed() {
            debug!(
                fetched = report.fetched,
                failed = report.failed,
                "Sync tick made no changes"
            );
            return report;
        }

        info!(added = report.added.len(), "Quotes synced with server");

        let view = match session.refresh() {
            Ok(view) => view,
            Err(e) => {
                warn!(error = %e, "Failed to refresh view after sync");
                session.store().all().to_vec()
            }
        };

        if let Some(tx) = &self.notifier {
            let notification = Notification {
                message: SYNC_NOTICE.to_string(),
                added: report.added.clone(),
                view,
            };
            if tx.send(notification).is_err() {
                debug!("Notification receiver dropped");
            }
        }

        report
    }

    /// Tick every `interval` until `shutdown` resolves. The first tick runs
    /// immediately.
    pub async fn run<S, F>(&self, session: &mut Session<S>, shutdown: F)
    where
        S: KeyValueStore,
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        info!(interval_secs = self.interval.as_secs(), "Sync loop started");
        loop {
            tokio::select! {
                _ = &mut shutdown => break,
                _ = ticker.tick() => {
                    self.tick(session).await;
                }
            }
        }
        info!("Sync loop stopped");
    }
}
