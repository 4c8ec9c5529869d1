//! Contact commands: add, view, search, edit, delete
//!
//! Every handler loads the book from the store, works on it in memory and
//! writes it back. Add is the exception: it appends a single line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::console::Console;
use crate::domain::validate::{self, check_free_text, ValidationError};
use crate::domain::{title_case, Contact, ContactBook, DEFAULT_CATEGORY};
use crate::storage::ContactStore;

const CATEGORY_HINT: &str = "Categories: Family, Friend, Work, Emergency, Other";

/// Adds a new contact
///
/// Phone and email are re-prompted until valid. An empty name aborts.
pub fn add<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ContactStore) -> Result<()> {
    console.output.line("\n--- ➕ Add New Contact ---")?;

    let name = title_case(console.prompt("Enter full name: ")?.trim());
    if name.is_empty() {
        console.output.error(ValidationError::Empty("Name"))?;
        return Ok(());
    }
    if let Err(err) = check_free_text("Name", &name) {
        console.output.error(err)?;
        return Ok(());
    }

    let phone = loop {
        let raw = console.prompt("Enter phone number (digits only, 10+ chars): ")?;
        match validate::validate_phone(&raw) {
            Ok(phone) => break phone,
            Err(err) => console.output.error(err)?,
        }
    };

    let email = loop {
        let raw = console.prompt("Enter email (or press Enter to skip): ")?;
        match validate::validate_email(&raw) {
            Ok(email) => break email,
            Err(err) => console.output.error(err)?,
        }
    };

    console.output.blank()?;
    console.output.line(CATEGORY_HINT)?;
    let category = loop {
        let category = title_case(console.prompt("Enter category: ")?.trim());
        match check_free_text("Category", &category) {
            Ok(()) if category.is_empty() => break DEFAULT_CATEGORY.to_string(),
            Ok(()) => break category,
            Err(err) => console.output.error(err)?,
        }
    };

    let book = store.load()?;
    let id = book
        .next_id()
        .with_context(|| format!("Failed to assign an ID from {}", store.path().display()))?;

    let contact = Contact {
        id,
        name,
        phone,
        email,
        category,
    };
    store.append(&contact)?;
    let appended = format!(
        "Appended contact {} to {}",
        contact.id,
        store.path().display()
    );
    console.output.verbose_ctx("add", &appended);

    console.output.blank()?;
    console.output.success("Contact added successfully!")?;
    console.output.line(format!("   ID: {}", contact.id))?;
    console.output.line(format!("   Name: {}", contact.name))?;
    console.output.line(format!("   Phone: {}", contact.phone))?;

    Ok(())
}

/// Lists every contact
pub fn view<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ContactStore) -> Result<()> {
    let book = store.load()?;
    console
        .output
        .verbose_ctx("view", &format!("Loaded {} contact(s)", book.len()));
    list_all(console, &book)
}

/// Finds contacts whose name contains the search term
///
/// An empty term is rejected before the store is read.
pub fn search<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ContactStore,
) -> Result<()> {
    console.output.line("\n--- 🔍 Search Contact ---")?;

    let term = console.prompt("Enter name to search: ")?.trim().to_lowercase();
    if term.is_empty() {
        console.output.error("Search term cannot be empty!")?;
        return Ok(());
    }

    let book = store.load()?;
    let matches = book.search(&term);
    console
        .output
        .verbose_ctx("search", &format!("'{}' matched {} of {}", term, matches.len(), book.len()));

    if matches.is_empty() {
        console
            .output
            .line(format!("No contacts found matching '{}'", term))?;
        return Ok(());
    }

    console.output.blank()?;
    console
        .output
        .success(format!("Found {} contact(s):", matches.len()))?;
    console
        .output
        .line(format!("{:<5} {:<20} {:<15} {:<10}", "ID", "Name", "Phone", "Category"))?;
    console.output.line("-".repeat(55))?;

    for contact in matches {
        console.output.line(format!(
            "{:<5} {:<20} {:<15} {:<10}",
            contact.id,
            contact.name,
            contact.display_phone(),
            contact.category
        ))?;
    }

    Ok(())
}

/// Edits a contact field by field
///
/// A blank answer keeps the current value. Rejected values are reported and
/// the current value kept. The book is rewritten even if nothing changed.
pub fn edit<R: BufRead, W: Write>(console: &mut Console<R, W>, store: &ContactStore) -> Result<()> {
    console.output.line("\n--- ✏️  Edit Contact ---")?;

    let mut book = store.load()?;
    list_all(console, &book)?;
    console.output.blank()?;

    let id = console.prompt("Enter ID of contact to edit: ")?.trim().to_string();
    let Some(contact) = book.find_mut(&id) else {
        console
            .output
            .error(format!("Contact with ID {} not found!", id))?;
        return Ok(());
    };

    console.output.line(format!("\nEditing: {}", contact.name))?;
    console
        .output
        .line("Press Enter to keep current value, or type new value to change.")?;

    let answer = console.prompt(&format!("Name [{}]: ", contact.name))?;
    let new_name = answer.trim();
    if !new_name.is_empty() {
        if check_free_text("Name", new_name).is_ok() {
            contact.name = title_case(new_name);
        } else {
            console.output.error("Invalid name, keeping old name.")?;
        }
    }

    let answer = console.prompt(&format!("Phone [{}]: ", contact.phone))?;
    let new_phone = answer.trim();
    if !new_phone.is_empty() {
        if validate::is_edit_phone(new_phone) {
            contact.phone = new_phone.to_string();
        } else {
            console.output.error("Invalid phone, keeping old number.")?;
        }
    }

    let answer = console.prompt(&format!("Email [{}]: ", contact.email))?;
    let new_email = answer.trim();
    if !new_email.is_empty() {
        if validate::is_edit_email(new_email) && check_free_text("Email", new_email).is_ok() {
            contact.email = new_email.to_string();
        } else {
            console.output.error("Invalid email, keeping old email.")?;
        }
    }

    let answer = console.prompt(&format!("Category [{}]: ", contact.category))?;
    let new_category = answer.trim();
    if !new_category.is_empty() {
        if check_free_text("Category", new_category).is_ok() {
            contact.category = title_case(new_category);
        } else {
            console.output.error("Invalid category, keeping old category.")?;
        }
    }

    store.save(&book)?;
    console
        .output
        .verbose_ctx("edit", &format!("Rewrote {} contact(s)", book.len()));

    console.output.blank()?;
    console.output.success("Contact updated successfully!")?;

    Ok(())
}

/// Deletes a contact after an explicit `yes`
pub fn delete<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    store: &ContactStore,
) -> Result<()> {
    console.output.line("\n--- 🗑️  Delete Contact ---")?;

    let mut book = store.load()?;
    list_all(console, &book)?;
    console.output.blank()?;

    let id = console.prompt("Enter ID of contact to delete: ")?.trim().to_string();
    let name = match book.find(&id) {
        Some(contact) => contact.name.clone(),
        None => {
            console
                .output
                .error(format!("Contact with ID {} not found!", id))?;
            return Ok(());
        }
    };

    let confirm = console.prompt(&format!(
        "⚠️  Are you sure you want to delete '{}'? (yes/no): ",
        name
    ))?;

    if confirm.to_lowercase() == "yes" {
        let removed = book.remove(&id);
        store.save(&book)?;
        console
            .output
            .verbose_ctx("delete", &format!("Removed {} record(s) with ID {}", removed, id));
        console
            .output
            .success(format!("Contact '{}' deleted successfully!", name))?;
    } else {
        console.output.line("Deletion cancelled.")?;
    }

    Ok(())
}

/// Prints the full contact table
fn list_all<R: BufRead, W: Write>(console: &mut Console<R, W>, book: &ContactBook) -> Result<()> {
    console.output.line("\n--- 📋 All Contacts ---")?;

    if book.is_empty() {
        console.output.line("No contacts found. Phonebook is empty!")?;
        return Ok(());
    }

    console.output.line(format!(
        "{:<5} {:<20} {:<15} {:<10} Email",
        "ID", "Name", "Phone", "Category"
    ))?;
    console.output.line("-".repeat(75))?;

    for contact in book {
        console.output.line(format!(
            "{:<5} {:<20} {:<15} {:<10} {}",
            contact.id,
            contact.name,
            contact.display_phone(),
            contact.category,
            contact.email
        ))?;
    }

    Ok(())
}
