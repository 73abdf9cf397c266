//! Notifier test double recording every delivered message

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use firmware_watch::notify::error::NotifyError;
use firmware_watch::notify::notifier::Notifier;
use firmware_watch::version::console::Console;

/// Records `(console, previous, version)` for every delivery. Clones share
/// the same message log, so a handle can be kept after the watcher takes
/// ownership of the notifier.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(Console, String, String)>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Console, String, String)> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify_update(
        &self,
        console: Console,
        previous: &str,
        version: &str,
    ) -> Result<(), NotifyError> {
        self.messages
            .lock()
            .unwrap()
            .push((console, previous.to_string(), version.to_string()));
        Ok(())
    }
}
