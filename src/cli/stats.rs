//! Contact statistics command

use std::io::{BufRead, Write};

use anyhow::Result;

use super::console::Console;
use crate::domain::Statistics;
use crate::storage::ContactStore;

/// Prints totals and a per-category breakdown with bars
pub fn show<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ContactStore) -> Result<()> {
    console.output.line("\n--- 📊 Contact Statistics ---")?;

    let book = store.load()?;
    if book.is_empty() {
        console.output.line("No contacts in phonebook.")?;
        return Ok(());
    }

    let stats = Statistics::from_book(&book);
    console
        .output
        .verbose_ctx("stats", &format!("{} categories", stats.categories.len()));

    console
        .output
        .line(format!("Total Contacts: {}", stats.total))?;
    console.output.line("\nBy Category:")?;
    console.output.line("-".repeat(25))?;

    for category in &stats.categories {
        console.output.line(format!(
            "{:<12} {:>3} ({:>5.1}%) {}",
            category.category,
            category.count,
            category.percentage,
            category.bar()
        ))?;
    }

    Ok(())
}
