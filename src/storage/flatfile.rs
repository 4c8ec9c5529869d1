//! Flat-file storage for contacts
//!
//! Contacts are stored one per line as `id|name|phone|email|category`.
//! A missing file is an empty phonebook. Reads take a shared lock on the
//! store file; appends and full rewrites take an exclusive one. Rewrites go
//! through a temp file + rename while the lock is held.

use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{Contact, ContactBook};

/// Default file name of the contact store
pub const DEFAULT_DATA_FILE: &str = "contacts.txt";

/// Store for contacts in the delimited text format
#[derive(Debug, Clone)]
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    /// Creates a new contact store at the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every contact, in file order
    ///
    /// Blank lines and lines with fewer than four fields are skipped.
    pub fn load(&self) -> Result<ContactBook> {
        if !self.path.exists() {
            return Ok(ContactBook::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open contact store: {}", self.path.display()))?;

        FileExt::lock_shared(&file).context("Failed to acquire read lock on contact store")?;

        let reader = BufReader::new(&file);
        let mut book = ContactBook::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;

            if let Some(contact) = Contact::from_line(&line) {
                book.push(contact);
            }
        }

        Ok(book)
    }

    /// Writes every contact in the given order (full rewrite)
    ///
    /// The store file stays exclusively locked while the temp file is written
    /// and renamed over it, so readers and appenders wait for the rewrite.
    pub fn save(&self, book: &ContactBook) -> Result<()> {
        self.ensure_parent()?;

        let target = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)
            .with_context(|| format!("Failed to open contact store: {}", self.path.display()))?;

        FileExt::lock_exclusive(&target)
            .context("Failed to acquire write lock on contact store")?;

        let temp_path = self.temp_path();

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            for contact in book {
                writeln!(writer, "{}", contact.to_line()).context("Failed to write contact")?;
            }

            writer.flush().context("Failed to flush contact store")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        // Lock released when `target` drops
        Ok(())
    }

    /// Appends a single contact without rewriting the file
    pub fn append(&self, contact: &Contact) -> Result<()> {
        self.ensure_parent()?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open contact store: {}", self.path.display()))?;

        FileExt::lock_exclusive(&file).context("Failed to acquire write lock on contact store")?;

        let mut writer = BufWriter::new(&file);
        writeln!(writer, "{}", contact.to_line()).context("Failed to write contact")?;

        writer.flush().context("Failed to flush contact store")?;

        Ok(())
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| OsString::from(DEFAULT_DATA_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
