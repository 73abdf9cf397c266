//! Observed-version record and its file-backed store

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::version::console::Console;
use crate::version::error::HistoryError;

/// Every distinct version string ever observed, per console, in discovery
/// order. Serialized as `{"ps4": [...], "ps5": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    ps4: Vec<String>,
    ps5: Vec<String>,
}

impl History {
    /// Observed versions for a console, oldest first
    pub fn versions(&self, console: Console) -> &[String] {
        match console {
            Console::Ps4 => &self.ps4,
            Console::Ps5 => &self.ps5,
        }
    }

    fn versions_mut(&mut self, console: Console) -> &mut Vec<String> {
        match console {
            Console::Ps4 => &mut self.ps4,
            Console::Ps5 => &mut self.ps5,
        }
    }

    /// True if the version has already been observed for the console
    pub fn contains(&self, console: Console, version: &str) -> bool {
        self.versions(console).iter().any(|v| v == version)
    }

    /// Most recently observed version for a console
    pub fn latest(&self, console: Console) -> Option<&str> {
        self.versions(console).last().map(String::as_str)
    }

    /// Appends a version to a console's record. Versions already present are
    /// skipped, so recording is idempotent.
    pub fn record(&mut self, console: Console, version: &str) {
        if !self.contains(console, version) {
            self.versions_mut(console).push(version.to_string());
        }
    }
}

/// File-backed store for the version [`History`]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the history from disk.
    ///
    /// A missing, unreadable or malformed file yields the empty history, so
    /// the watcher can bootstrap on first run and recover from a corrupted
    /// state file.
    pub fn load(&self) -> History {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) => {
                debug!("no readable history at {:?}: {}", self.path, e);
                return History::default();
            }
        };

        match serde_json::from_str(&data) {
            Ok(history) => history,
            Err(e) => {
                warn!("malformed history file {:?}, starting empty: {}", self.path, e);
                History::default()
            }
        }
    }

    /// Writes the history to disk, replacing the previous file wholesale.
    ///
    /// The JSON is written to a sibling temp file and renamed into place, so
    /// an interrupted write cannot corrupt the existing file.
    pub fn save(&self, history: &History) -> Result<(), HistoryError> {
        let data = serde_json::to_string_pretty(history)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HistoryStore {
        HistoryStore::new(dir.path().join("seen_versions.json"))
    }

    #[test]
    fn record_appends_in_discovery_order() {
        let mut history = History::default();

        history.record(Console::Ps5, "9.00");
        history.record(Console::Ps5, "9.50");

        assert_eq!(history.versions(Console::Ps5), ["9.00", "9.50"]);
        assert_eq!(history.latest(Console::Ps5), Some("9.50"));
    }

    #[test]
    fn record_is_idempotent_per_console() {
        let mut history = History::default();

        history.record(Console::Ps5, "9.00");
        history.record(Console::Ps5, "9.00");

        assert_eq!(history.versions(Console::Ps5), ["9.00"]);
    }

    #[test]
    fn record_keeps_consoles_independent() {
        let mut history = History::default();

        history.record(Console::Ps4, "12.00");
        history.record(Console::Ps5, "9.00");

        assert_eq!(history.versions(Console::Ps4), ["12.00"]);
        assert_eq!(history.versions(Console::Ps5), ["9.00"]);
        assert!(!history.contains(Console::Ps4, "9.00"));
    }

    #[test]
    fn latest_of_empty_history_is_none() {
        let history = History::default();
        assert_eq!(history.latest(Console::Ps4), None);
    }

    #[test]
    fn load_of_missing_file_returns_empty_history() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load(), History::default());
    }

    #[test]
    fn load_of_malformed_file_returns_empty_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen_versions.json");
        fs::write(&path, "{not json").unwrap();

        let store = HistoryStore::new(path);

        assert_eq!(store.load(), History::default());
    }

    #[test]
    fn load_tolerates_missing_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("seen_versions.json");
        fs::write(&path, r#"{"ps5": ["9.00"]}"#).unwrap();

        let history = HistoryStore::new(path).load();

        assert_eq!(history.versions(Console::Ps5), ["9.00"]);
        assert!(history.versions(Console::Ps4).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut history = History::default();
        history.record(Console::Ps4, "11.00");
        history.record(Console::Ps5, "9.00");
        history.record(Console::Ps5, "9.50");

        store.save(&history).unwrap();

        assert_eq!(store.load(), history);
    }

    #[test]
    fn save_writes_pretty_json_with_both_consoles() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&History::default()).unwrap();

        let data = fs::read_to_string(dir.path().join("seen_versions.json")).unwrap();
        assert!(data.contains("\"ps4\""));
        assert!(data.contains("\"ps5\""));
        assert!(data.contains('\n'));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&History::default()).unwrap();

        assert!(!dir.path().join("seen_versions.json.tmp").exists());
    }
}
