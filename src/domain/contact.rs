//! Contact domain model
//!
//! A contact is serialized as one `|`-delimited line:
//!
//! ```text
//! id|name|phone|email|category
//! ```
//!
//! There is no header and no escaping. Lines with fewer than four fields are
//! not contacts; a missing category falls back to [`DEFAULT_CATEGORY`].

use std::fmt;

use thiserror::Error;

/// Field separator of the on-disk format
pub const DELIMITER: char = '|';

/// Stored in place of an email the user skipped
pub const EMAIL_PLACEHOLDER: &str = "Not provided";

/// Category given to contacts entered without one
pub const DEFAULT_CATEGORY: &str = "General";

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Invalid contact ID '{0}': expected decimal digits")]
    NonNumericId(String),
}

/// Contact ID, a string of decimal digits
///
/// IDs are kept as the text found in the store so that a hand-edited file
/// still loads; [`ContactId::digits`] is where a bad ID surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_number(n: u64) -> Self {
        Self(n.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the ID's digits without leading zeros
    ///
    /// IDs are compared as digit strings, so any length is accepted.
    pub fn digits(&self) -> Result<&str, ContactError> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ContactError::NonNumericId(self.0.clone()));
        }

        let trimmed = self.0.trim_start_matches('0');
        Ok(if trimmed.is_empty() { "0" } else { trimmed })
    }

    /// Returns the ID one greater than this one
    pub fn successor(&self) -> Result<Self, ContactError> {
        let mut digits: Vec<u8> = self.digits()?.bytes().collect();

        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }

        let mut next: String = digits.into_iter().map(char::from).collect();
        if carry {
            next.insert(0, '1');
        }
        Ok(Self(next))
    }
}

/// Orders canonical digit strings by numeric value
pub(super) fn cmp_digits(a: &str, b: &str) -> std::cmp::Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for ContactId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A single phonebook entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub category: String,
}

impl Contact {
    /// Parses one line of the store
    ///
    /// Returns `None` for blank lines, lines without a delimiter and lines
    /// with fewer than four fields. Fields past the fifth are ignored.
    pub fn from_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || !line.contains(DELIMITER) {
            return None;
        }

        let parts: Vec<&str> = line.split(DELIMITER).collect();
        if parts.len() < 4 {
            return None;
        }

        Some(Self {
            id: ContactId::new(parts[0]),
            name: parts[1].to_string(),
            phone: parts[2].to_string(),
            email: parts[3].to_string(),
            category: parts
                .get(4)
                .map(|c| c.to_string())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        })
    }

    /// Serializes the contact as a store line, without the trailing newline
    pub fn to_line(&self) -> String {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
            self.category.as_str(),
        ]
        .join("|")
    }

    /// Phone number grouped as `DDDD-DDD-D...` for display
    pub fn display_phone(&self) -> String {
        format_phone(&self.phone)
    }
}

/// Groups a phone number as first 4, next 3, remainder
///
/// Numbers shorter than ten characters are returned unchanged.
pub fn format_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() < 10 {
        return phone.to_string();
    }

    let head: String = chars[..4].iter().collect();
    let mid: String = chars[4..7].iter().collect();
    let tail: String = chars[7..].iter().collect();
    format!("{}-{}-{}", head, mid, tail)
}

/// Title-cases a string
///
/// Every run of letters starts upper-case and continues lower-case. Any
/// non-letter character, including digits and apostrophes, ends a run.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }

    out
}
