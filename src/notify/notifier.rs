//! Seam trait between the watcher and the delivery channel

#[cfg(test)]
use mockall::automock;

use crate::notify::error::NotifyError;
use crate::version::console::Console;

/// Trait for delivering a firmware update notification
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Announces that `console` moved from `previous` to `version`
    ///
    /// # Returns
    /// * `Ok(())` - The message reached the destination channel
    /// * `Err(NotifyError)` - Delivery failed; the caller decides whether to
    ///   retry on a later cycle
    async fn notify_update(
        &self,
        console: Console,
        previous: &str,
        version: &str,
    ) -> Result<(), NotifyError>;
}
