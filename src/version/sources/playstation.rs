//! PlayStation support site version source

use std::time::Duration;

use regex::Regex;
use tracing::{debug, warn};

use crate::config::FETCH_TIMEOUT_SECS;
use crate::version::console::Console;
use crate::version::error::FetchError;
use crate::version::source::VersionSource;
use crate::version::text::rendered_text;

/// Default base URL for the PlayStation support site
const DEFAULT_BASE_URL: &str = "https://www.playstation.com";

/// Locales tried in order until one page yields a version
const LOCALES: [&str; 2] = ["fr-fr", "en-us"];

/// Version source scraping the system-software support pages
pub struct PlaystationSource {
    client: reqwest::Client,
    base_url: String,
    version_re: Regex,
}

impl PlaystationSource {
    /// Creates a new source with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("firmware-watch")
                .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
            // Match "Version" plus optional punctuation and a dotted
            // 2-3 component number, e.g. "Version : 9.00" or "version 9.00.1"
            version_re: Regex::new(r"(?i)Version\s*[:\-]?\s*([0-9]+\.[0-9]+(?:\.[0-9]+)?)")
                .expect("invalid version pattern"),
        }
    }

    fn page_url(&self, console: Console, locale: &str) -> String {
        format!(
            "{}/{}/support/hardware/{}/system-software-info/",
            self.base_url,
            locale,
            console.slug()
        )
    }

    /// Fetches one locale's page and scans its rendered text for the
    /// version pattern. `Ok(None)` means the page loaded but did not match.
    async fn fetch_locale(
        &self,
        console: Console,
        locale: &str,
    ) -> Result<Option<String>, reqwest::Error> {
        let url = self.page_url(console, locale);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("support page returned status {} for {}", status, url);
            return Ok(None);
        }

        let text = rendered_text(&response.text().await?);
        Ok(self
            .version_re
            .captures(&text)
            .map(|captures| captures[1].to_string()))
    }
}

impl Default for PlaystationSource {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl VersionSource for PlaystationSource {
    async fn fetch(&self, console: Console) -> Result<String, FetchError> {
        for locale in LOCALES {
            match self.fetch_locale(console, locale).await {
                Ok(Some(version)) => return Ok(version),
                Ok(None) => {
                    debug!("no version pattern for {}@{}", console.slug(), locale);
                }
                Err(e) => {
                    debug!("HTTP error for {}@{}: {}", console.slug(), locale, e);
                }
            }
        }

        Err(FetchError::NotFound(console))
    }
}
