//! Interactive menu loop

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use super::console::{is_input_closed, Console};
use super::{contact, stats};
use crate::storage::ContactStore;

const RULE_WIDTH: usize = 45;

/// A numbered menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    View,
    Search,
    Edit,
    Delete,
    Statistics,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::Add,
        MenuChoice::View,
        MenuChoice::Search,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Statistics,
        MenuChoice::Exit,
    ];

    pub fn number(&self) -> u8 {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::View => 2,
            MenuChoice::Search => 3,
            MenuChoice::Edit => 4,
            MenuChoice::Delete => 5,
            MenuChoice::Statistics => 6,
            MenuChoice::Exit => 7,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "➕ Add New Contact",
            MenuChoice::View => "📋 View All Contacts",
            MenuChoice::Search => "🔍 Search Contact by Name",
            MenuChoice::Edit => "✏️  Edit Contact",
            MenuChoice::Delete => "🗑️  Delete Contact",
            MenuChoice::Statistics => "📊 Contact Statistics",
            MenuChoice::Exit => "🚪 Exit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MenuChoice::ALL
            .iter()
            .copied()
            .find(|choice| s == choice.number().to_string())
            .ok_or(())
    }
}

/// Runs the session until the user exits or input ends
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ContactStore) -> Result<()> {
    match session(console, store) {
        Err(err) if is_input_closed(&err) => {
            console.output.verbose("Input closed, ending session");
            console.output.blank()?;
            Ok(())
        }
        other => other,
    }
}

fn session<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ContactStore) -> Result<()> {
    console.output.line("🚀 Welcome to Phone Contact Manager!")?;
    console.output.line("Your personal phonebook in the terminal.")?;

    loop {
        show_menu(console)?;

        let answer = console.prompt("\nSelect an option (1-7): ")?;
        match answer.trim().parse::<MenuChoice>() {
            Ok(MenuChoice::Exit) => {
                console
                    .output
                    .line("\n👋 Goodbye! Thanks for using Phone Contact Manager!")?;
                return Ok(());
            }
            Ok(choice) => {
                console
                    .output
                    .verbose_ctx("menu", &format!("Dispatching {:?}", choice));
                dispatch(console, store, choice)?;
            }
            Err(()) => console.output.error("Invalid option! Please choose 1-7.")?,
        }

        console.pause()?;
    }
}

fn dispatch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ContactStore,
    choice: MenuChoice,
) -> Result<()> {
    match choice {
        MenuChoice::Add => contact::add(console, store),
        MenuChoice::View => contact::view(console, store),
        MenuChoice::Search => contact::search(console, store),
        MenuChoice::Edit => contact::edit(console, store),
        MenuChoice::Delete => contact::delete(console, store),
        MenuChoice::Statistics => stats::show(console, store),
        MenuChoice::Exit => Ok(()),
    }
}

fn show_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    let rule = "=".repeat(RULE_WIDTH);

    console.output.blank()?;
    console.output.line(&rule)?;
    console.output.line("📱 PHONE CONTACT MANAGER")?;
    console.output.line(&rule)?;
    for choice in MenuChoice::ALL {
        console
            .output
            .line(format!("{}. {}", choice.number(), choice.label()))?;
    }
    console.output.line(&rule)?;

    Ok(())
}
