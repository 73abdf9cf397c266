//! Discord channel delivery via the REST API

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::notify::error::NotifyError;
use crate::notify::notifier::Notifier;
use crate::version::console::Console;

/// Default base URL for the Discord REST API
const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

/// Accent color of the update embeds (blue)
const EMBED_COLOR: u32 = 0x0066FF;

/// Payload for the create-message endpoint
#[derive(Debug, Serialize)]
struct CreateMessage {
    embeds: Vec<Embed>,
}

#[derive(Debug, Serialize)]
struct Embed {
    title: String,
    description: String,
    color: u32,
    timestamp: String,
    fields: Vec<EmbedField>,
}

#[derive(Debug, Serialize)]
struct EmbedField {
    name: String,
    value: String,
    inline: bool,
}

/// Subset of the channel object returned by the get-channel endpoint
#[derive(Debug, Deserialize)]
struct Channel {
    name: Option<String>,
}

/// Notifier posting one embed per firmware update to a fixed channel
pub struct DiscordNotifier {
    client: reqwest::Client,
    api_base: String,
    token: String,
    channel_id: String,
}

impl DiscordNotifier {
    /// Creates a notifier for the given bot token and destination channel
    pub fn new(token: &str, channel_id: &str) -> Self {
        Self::with_api_base(DEFAULT_API_BASE, token, channel_id)
    }

    /// Creates a notifier with a custom API base URL
    pub fn with_api_base(api_base: &str, token: &str, channel_id: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("firmware-watch")
                .build()
                .expect("Failed to create HTTP client"),
            api_base: api_base.to_string(),
            token: token.to_string(),
            channel_id: channel_id.to_string(),
        }
    }

    /// Checks that the destination channel exists and is visible to the bot,
    /// returning its name for logging.
    ///
    /// Without a resolvable channel no update can ever be delivered, so the
    /// caller treats a failure here as fatal at startup.
    pub async fn resolve_channel(&self) -> Result<String, NotifyError> {
        let url = format!("{}/channels/{}", self.api_base, self.channel_id);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(NotifyError::ChannelNotFound(self.channel_id.clone()));
        }
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let channel: Channel = response.json().await?;
        Ok(channel.name.unwrap_or_else(|| self.channel_id.clone()))
    }

    fn build_embed(console: Console, previous: &str, version: &str) -> Embed {
        Embed {
            title: format!("{console} firmware update"),
            description: format!("New version available: **{version}** (previous: {previous})"),
            color: EMBED_COLOR,
            timestamp: Utc::now().to_rfc3339(),
            fields: vec![
                EmbedField {
                    name: "Console".to_string(),
                    value: console.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "Previous version".to_string(),
                    value: previous.to_string(),
                    inline: true,
                },
                EmbedField {
                    name: "New version".to_string(),
                    value: version.to_string(),
                    inline: true,
                },
            ],
        }
    }
}

#[async_trait::async_trait]
impl Notifier for DiscordNotifier {
    async fn notify_update(
        &self,
        console: Console,
        previous: &str,
        version: &str,
    ) -> Result<(), NotifyError> {
        let url = format!("{}/channels/{}/messages", self.api_base, self.channel_id);
        let payload = CreateMessage {
            embeds: vec![Self::build_embed(console, previous, version)],
        };

        debug!("posting update embed for {}", console.slug());
        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bot {}", self.token))
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(())
    }
}
