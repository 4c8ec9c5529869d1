//! Phonebook - an interactive contact manager for the terminal
//!
//! Contacts live in a plain `|`-delimited text file, one per line. The
//! library exposes the contact model and validation rules ([`domain`]), the
//! file store ([`storage`]) and the interactive session ([`cli`]).

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{Contact, ContactBook, ContactId};
pub use storage::ContactStore;
