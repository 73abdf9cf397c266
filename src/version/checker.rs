//! Change detection against the observed history

use crate::version::console::Console;
use crate::version::history::History;

/// Shown as the previous version when a console has no recorded history yet
pub const UNKNOWN_VERSION: &str = "N/A";

/// True iff the fetched version has never been observed for this console
pub fn is_new(history: &History, console: Console, version: &str) -> bool {
    !history.contains(console, version)
}

/// The most recently recorded version, for display next to a new one
pub fn previous_display(history: &History, console: Console) -> String {
    history
        .latest(console)
        .unwrap_or(UNKNOWN_VERSION)
        .to_string()
}
