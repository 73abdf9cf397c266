//! Startup pass and fixed-interval watch loop

use std::collections::HashMap;
use std::time::Duration;

use futures::future::join_all;
use thiserror::Error;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{error, info};

use crate::notify::error::NotifyError;
use crate::notify::notifier::Notifier;
use crate::version::checker::{is_new, previous_display};
use crate::version::console::Console;
use crate::version::error::FetchError;
use crate::version::history::{History, HistoryStore};
use crate::version::source::VersionSource;

/// Failure of a single console's check cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Result of a completed check cycle for one console
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A previously unseen version was announced and recorded
    Updated { previous: String, version: String },
    /// The published version was already known
    Unchanged(String),
}

/// Drives periodic version checks for all tracked consoles.
///
/// Owns the in-memory history snapshot (persisted through the store on every
/// confirmed update) and the transient last-seen cache used for the
/// "previous version" shown in notifications.
pub struct Watcher<S, N> {
    source: S,
    notifier: N,
    store: HistoryStore,
    history: History,
    last_seen: HashMap<Console, String>,
    period: Duration,
}

impl<S: VersionSource, N: Notifier> Watcher<S, N> {
    pub fn new(
        source: S,
        notifier: N,
        store: HistoryStore,
        history: History,
        period: Duration,
    ) -> Self {
        Self {
            source,
            notifier,
            store,
            history,
            last_seen: HashMap::new(),
            period,
        }
    }

    /// Runs the watch loop forever: one immediate pass, then one pass per
    /// interval tick.
    ///
    /// A pass is awaited inside the loop, so passes never overlap; missed
    /// ticks are delayed instead of bursted.
    pub async fn run(mut self) {
        info!(
            "checking {} consoles every {:?}",
            Console::ALL.len(),
            self.period
        );

        let mut ticker = interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.run_pass().await;
        }
    }

    /// Runs one check cycle for every tracked console.
    ///
    /// Versions are fetched concurrently, then applied one console at a time
    /// in [`Console::ALL`] order so only one history write is in flight. One
    /// console's failure never aborts the pass.
    pub async fn run_pass(&mut self) {
        let results = join_all(Console::ALL.map(|console| self.source.fetch(console))).await;

        for (console, fetched) in Console::ALL.into_iter().zip(results) {
            let outcome = match fetched {
                Ok(version) => self.apply(console, version).await,
                Err(e) => Err(CycleError::from(e)),
            };

            match outcome {
                Ok(CycleOutcome::Updated { previous, version }) => {
                    info!(
                        "{}: posted update {} (previous {})",
                        console.slug(),
                        version,
                        previous
                    );
                }
                Ok(CycleOutcome::Unchanged(version)) => {
                    info!("{}: no change ({})", console.slug(), version);
                }
                Err(e) => {
                    error!("check failed for {}: {}", console.slug(), e);
                }
            }
        }
    }

    /// Applies one successfully fetched version: detect, notify, record,
    /// persist, refresh the last-seen cache.
    async fn apply(
        &mut self,
        console: Console,
        version: String,
    ) -> Result<CycleOutcome, CycleError> {
        let outcome = if is_new(&self.history, console, &version) {
            let previous = self
                .last_seen
                .get(&console)
                .cloned()
                .unwrap_or_else(|| previous_display(&self.history, console));

            // Record only after the announcement actually went out; a failed
            // delivery is retried on the next detection.
            self.notifier
                .notify_update(console, &previous, &version)
                .await?;

            self.history.record(console, &version);
            if let Err(e) = self.store.save(&self.history) {
                // In-memory history is ahead of disk until the next
                // successful save.
                error!("failed to persist history: {}", e);
            }

            CycleOutcome::Updated {
                previous,
                version: version.clone(),
            }
        } else {
            CycleOutcome::Unchanged(version.clone())
        };

        self.last_seen.insert(console, version);
        Ok(outcome)
    }
}
