//! Field validation rules
//!
//! Two sets of rules exist. New contacts go through the strict checks
//! ([`validate_phone`], [`validate_email`]) and are re-prompted until they
//! pass. Edits use the lenient checks ([`is_edit_phone`], [`is_edit_email`])
//! and keep the old value when a new one is rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::contact::{DELIMITER, EMAIL_PLACEHOLDER};

/// Minimum number of digits in a phone number
pub const MIN_PHONE_DIGITS: usize = 10;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
});

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid phone number! Use 10+ digits only.")]
    InvalidPhone,

    #[error("Invalid email format! Try again or press Enter to skip.")]
    InvalidEmail,

    #[error("{0} cannot be empty!")]
    Empty(&'static str),

    #[error("{0} cannot contain '|' or line breaks!")]
    ContainsDelimiter(&'static str),
}

/// Strips spaces and dashes and checks the remaining digits
///
/// Returns exactly the stripped digit string when it is all ASCII digits and
/// at least [`MIN_PHONE_DIGITS`] long.
pub fn validate_phone(raw: &str) -> Result<String, ValidationError> {
    let digits: String = raw
        .trim()
        .chars()
        .filter(|c| *c != ' ' && *c != '-')
        .collect();

    if is_phone_digits(&digits) {
        Ok(digits)
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Checks an email address, mapping empty input to the placeholder
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if email.is_empty() {
        return Ok(EMAIL_PLACEHOLDER.to_string());
    }

    if EMAIL_RE.is_match(email) {
        Ok(email.to_string())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Lenient phone check used when editing: no stripping of separators
pub fn is_edit_phone(raw: &str) -> bool {
    is_phone_digits(raw)
}

/// Lenient email check used when editing
pub fn is_edit_email(raw: &str) -> bool {
    raw.contains('@')
}

/// Rejects free text that would break the line format
pub fn check_free_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.contains(DELIMITER) || value.contains('\n') || value.contains('\r') {
        Err(ValidationError::ContainsDelimiter(field))
    } else {
        Ok(())
    }
}

fn is_phone_digits(s: &str) -> bool {
    s.len() >= MIN_PHONE_DIGITS && s.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn phone_strips_separators() {
        assert_eq!(validate_phone("0712 345-678"), Ok("0712345678".to_string()));
        assert_eq!(validate_phone(" 254-712-345-678 "), Ok("254712345678".to_string()));
    }

    #[test]
    fn phone_rejects_short_or_non_digit() {
        assert_eq!(validate_phone("123456789"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("+254712345678"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("07123abc678"), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone(""), Err(ValidationError::InvalidPhone));
        assert_eq!(validate_phone("----------"), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn email_placeholder_when_skipped() {
        assert_eq!(validate_email(""), Ok("Not provided".to_string()));
        assert_eq!(validate_email("   "), Ok("Not provided".to_string()));
    }

    #[test]
    fn email_pattern() {
        let tagged = "amy.a+work@mail.example.com";
        assert_eq!(validate_email(tagged), Ok(tagged.to_string()));
        assert_eq!(validate_email("amy@example"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("amy@example.c"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a|b@example.com"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn edit_checks_are_lenient() {
        assert!(is_edit_email("anything@"));
        assert!(!is_edit_email("nobody"));
        assert!(is_edit_phone("0712345678"));
        // Separators are not stripped on the edit path
        assert!(!is_edit_phone("0712 345 678"));
    }

    #[test]
    fn free_text_rejects_delimiter() {
        assert_eq!(check_free_text("Name", "Amy Adams"), Ok(()));
        assert_eq!(
            check_free_text("Name", "Amy|Adams"),
            Err(ValidationError::ContainsDelimiter("Name"))
        );
        assert!(check_free_text("Category", "Work\nHome").is_err());
    }

    proptest! {
        #[test]
        fn valid_phone_returns_stripped_digits(
            parts in proptest::collection::vec("[0-9]{1,4}", 1..8),
            seps in proptest::collection::vec("[ -]{0,2}", 8),
        ) {
            let digits: String = parts.concat();
            prop_assume!(digits.len() >= MIN_PHONE_DIGITS);

            let raw: String = parts
                .iter()
                .zip(seps.iter())
                .map(|(p, s)| format!("{}{}", p, s))
                .collect();

            prop_assert_eq!(validate_phone(&raw), Ok(digits));
        }

        #[test]
        fn short_phone_is_rejected(digits in "[0-9]{0,9}") {
            prop_assert_eq!(validate_phone(&digits), Err(ValidationError::InvalidPhone));
        }
    }
}
