//! Source trait for fetching published firmware versions

#[cfg(test)]
use mockall::automock;

use crate::version::console::Console;
use crate::version::error::FetchError;

/// Trait for fetching the currently published firmware version of a console
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait VersionSource: Send + Sync {
    /// Fetches the published firmware version for a console
    ///
    /// # Returns
    /// * `Ok(String)` - The dotted version string as published
    /// * `Err(FetchError)` - If no endpoint yielded a parseable version
    async fn fetch(&self, console: Console) -> Result<String, FetchError>;
}
