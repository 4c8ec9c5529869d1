//! Main CLI application structure

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::console::Console;
use super::menu;
use super::output::Output;
use crate::storage::{Config, ContactStore};

#[derive(Parser)]
#[command(name = "phonebook")]
#[command(author, version, about = "Interactive contact manager backed by a plain text file")]
pub struct Cli {
    /// Contacts file (overrides `data_file` from the configuration)
    #[arg(long, short = 'f', env = "PHONEBOOK_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(io::stdout().lock(), cli.verbose);

    output.verbose("Phonebook starting");

    let config = Config::load(cli.config.as_deref())?;
    let data_file = config.resolve_data_file(cli.file.as_deref());
    output.verbose_ctx("config", &format!("Using data file: {}", data_file.display()));

    let store = ContactStore::new(data_file);
    let mut console = Console::new(io::stdin().lock(), output);

    menu::run(&mut console, &store)?;

    console.output.verbose("Session ended");
    Ok(())
}
