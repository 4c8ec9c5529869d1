//! Domain models for the phonebook
//!
//! Contains the contact model, validation rules and statistics without any
//! I/O concerns.

mod book;
mod contact;
mod stats;
pub mod validate;

pub use book::ContactBook;
pub use contact::{
    format_phone, title_case, Contact, ContactError, ContactId, DEFAULT_CATEGORY, DELIMITER,
    EMAIL_PLACEHOLDER,
};
pub use stats::{CategoryStat, Statistics};
pub use validate::ValidationError;
