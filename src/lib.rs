//! firmware-watch: a Discord bot that watches the published PlayStation
//! system-software versions and announces updates to a channel.
//!
//! The watch loop fetches the support pages, compares the published version
//! against the persisted history, and posts one embed per previously unseen
//! version.

pub mod config;
pub mod notify;
pub mod version;
pub mod watcher;
