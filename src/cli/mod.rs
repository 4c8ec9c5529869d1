//! # Command-Line Interface
//!
//! The interactive session and its commands.
//!
//! ## Menu
//!
//! | Choice | Command | Store access |
//! |--------|---------|--------------|
//! | 1 | Add contact | load, append |
//! | 2 | View all | load |
//! | 3 | Search by name | load |
//! | 4 | Edit contact | load, full rewrite |
//! | 5 | Delete contact | load, full rewrite |
//! | 6 | Statistics | load |
//! | 7 | Exit | none |
//!
//! ## Options
//!
//! - `--file <PATH>` (or `PHONEBOOK_FILE`) - contacts file
//! - `--config <PATH>` - configuration file
//! - `--verbose` (or `-v`) - debug output on stderr
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and start the session.

mod app;
mod console;
mod contact;
mod menu;
mod output;
mod stats;

pub use app::{run, Cli};
pub use console::{Console, ConsoleError};
pub use menu::MenuChoice;
pub use output::Output;
