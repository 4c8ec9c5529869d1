//! Phonebook - interactive contact manager

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = phonebook::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
