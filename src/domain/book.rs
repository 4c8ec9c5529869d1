//! In-memory contact collection
//!
//! The book is what the store loads and saves. Handlers mutate the book and
//! hand it back to the store; they never touch the file directly.

use std::collections::BTreeMap;

use super::contact::{cmp_digits, Contact, ContactError, ContactId};

/// Ordered collection of contacts, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<Contact>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    pub fn push(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Returns the ID a new contact should get: highest ID plus one
    ///
    /// Fails if any stored ID is not numeric. IDs have no upper bound.
    pub fn next_id(&self) -> Result<ContactId, ContactError> {
        let mut max: Option<&ContactId> = None;
        for contact in &self.contacts {
            let digits = contact.id.digits()?;
            let higher = match max {
                Some(current) => cmp_digits(digits, current.digits()?).is_gt(),
                None => true,
            };
            if higher {
                max = Some(&contact.id);
            }
        }

        match max {
            Some(id) => id.successor(),
            None => Ok(ContactId::from_number(1)),
        }
    }

    /// Finds the first contact with the given ID
    pub fn find(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == *id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id == *id)
    }

    /// Removes every contact with the given ID, returning how many were removed
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != *id);
        before - self.contacts.len()
    }

    /// Case-insensitive substring match on the contact name
    pub fn search(&self, term: &str) -> Vec<&Contact> {
        let term = term.to_lowercase();
        self.contacts
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&term))
            .collect()
    }

    /// Number of contacts per category, sorted by category name
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for contact in &self.contacts {
            *counts.entry(contact.category.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl FromIterator<Contact> for ContactBook {
    fn from_iter<I: IntoIterator<Item = Contact>>(iter: I) -> Self {
        Self {
            contacts: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ContactBook {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.contacts.iter()
    }
}
