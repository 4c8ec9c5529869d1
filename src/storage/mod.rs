//! # Storage Layer
//!
//! Persistence for the phonebook.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | Contacts | `\|`-delimited text, one contact per line | `contacts.txt` (configurable) |
//! | Config | TOML | `~/.config/phonebook/config.toml` |
//!
//! ## Write Safety
//!
//! - [`ContactStore`] takes advisory locks (`fs2`) on the store file: shared
//!   for reads, exclusive for appends and rewrites
//! - Full rewrites go through a temp file renamed over the store while the
//!   exclusive lock is held
//! - Adds append a single line
//!
//! Sessions do not hold the lock between loading and saving, so concurrent
//! instances can still lose updates: the last full rewrite wins.

mod config;
mod flatfile;

pub use config::{Config, ConfigError};
pub use flatfile::{ContactStore, DEFAULT_DATA_FILE};
