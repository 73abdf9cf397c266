use std::path::PathBuf;

// =============================================================================
// Time-related constants
// =============================================================================

/// Default delay between version checks in seconds
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 30;

/// Timeout for each support page fetch in seconds
pub const FETCH_TIMEOUT_SECS: u64 = 10;

/// File name the observed version history is persisted under
pub const STATE_FILE_NAME: &str = "seen_versions.json";

/// Returns the path to the data directory for firmware-watch.
/// Uses $XDG_DATA_HOME/firmware-watch if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/firmware-watch,
/// or ./firmware-watch if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the seen-versions file.
pub fn state_path() -> PathBuf {
    data_dir().join(STATE_FILE_NAME)
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("firmware-watch")
}
