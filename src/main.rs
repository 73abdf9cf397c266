use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use firmware_watch::config::{self, DEFAULT_CHECK_INTERVAL_SECS};
use firmware_watch::notify::discord::DiscordNotifier;
use firmware_watch::version::history::HistoryStore;
use firmware_watch::version::sources::PlaystationSource;
use firmware_watch::watcher::Watcher;

#[derive(Parser)]
#[command(name = "firmware-watch")]
#[command(version, about = "Watches PlayStation firmware versions and posts updates to Discord")]
struct Cli {
    /// Bot token used to authenticate against the Discord API
    #[arg(long, env = "DISCORD_TOKEN", hide_env_values = true)]
    discord_token: String,

    /// Channel the update messages are posted to
    #[arg(long, env = "CHANNEL_ID")]
    channel_id: String,

    /// Seconds between version checks
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_CHECK_INTERVAL_SECS)]
    interval: u64,

    /// Path of the seen-versions file (defaults to the user data directory)
    #[arg(long, value_name = "FILE")]
    state_file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("firmware_watch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let state_file = cli.state_file.unwrap_or_else(config::state_path);
    if let Some(parent) = state_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create data directory {parent:?}"))?;
    }

    let notifier = DiscordNotifier::new(&cli.discord_token, &cli.channel_id);
    let channel_name = notifier
        .resolve_channel()
        .await
        .with_context(|| format!("could not resolve Discord channel {}", cli.channel_id))?;
    info!("posting firmware updates to #{channel_name}");

    let store = HistoryStore::new(state_file);
    let history = store.load();

    Watcher::new(
        PlaystationSource::default(),
        notifier,
        store,
        history,
        Duration::from_secs(cli.interval),
    )
    .run()
    .await;

    Ok(())
}
