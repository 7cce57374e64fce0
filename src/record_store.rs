//! Record File handling module for phonebook
//!
//! This module reads and writes whole Record Files. There is no caching or
//! incremental update: every operation reads the full file, works on the
//! in-memory list and writes the full list back.
//!
//! The file is plain CSV with a fixed header row:
//!
//! ```text
//! №,first_name,second_name,phone_number
//! 1,Ann,Smith,+100000000000
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use log::debug;

use crate::contact::{Contact, HEADER};
use crate::error::PhonebookResult;

#[cfg(windows)]
const LINE_TERMINATOR: csv::Terminator = csv::Terminator::CRLF;
#[cfg(not(windows))]
const LINE_TERMINATOR: csv::Terminator = csv::Terminator::Any(b'\n');

/// Handle to one Record File on disk
///
/// Holding a `RecordStore` does not keep the file open; each call opens,
/// processes and closes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    /// Create a handle for the Record File at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RecordStore { path: path.into() }
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the Record File exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Create (or truncate) the file so that it holds only the header row
    ///
    /// # Returns
    /// * `Ok(())` if the header was written
    /// * `Err` if the file could not be created or written
    pub fn create_empty(&self) -> PhonebookResult<()> {
        debug!("Creating empty record file {}", self.path.display());
        self.write_all(&[])
    }

    /// Load every record of the file in file order
    ///
    /// Columns are matched by header name, so a file whose header lacks one
    /// of the four columns, or whose number column is not an integer, fails
    /// with a CSV error.
    ///
    /// # Returns
    /// * `Ok(Vec<Contact>)` - All records, possibly empty
    /// * `Err` if the file cannot be opened or parsed
    pub fn read_all(&self) -> PhonebookResult<Vec<Contact>> {
        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let mut contacts = Vec::new();
        for result in csv_reader.deserialize() {
            let contact: Contact = result?;
            contacts.push(contact);
        }

        debug!(
            "Read {} records from {}",
            contacts.len(),
            self.path.display()
        );
        Ok(contacts)
    }

    /// Overwrite the file with the header and `contacts`, in the given order
    ///
    /// Sequence numbers are written as they are; callers renumber first.
    /// An interrupted write can leave a truncated file.
    ///
    /// # Arguments
    /// * `contacts` - Records to write
    ///
    /// # Returns
    /// * `Ok(())` if everything was written and flushed
    /// * `Err` if the file could not be created or written
    pub fn write_all(&self, contacts: &[Contact]) -> PhonebookResult<()> {
        let file = File::create(&self.path)?;
        let writer = BufWriter::new(file);

        // The header is written by hand so that an empty list still gets one
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(LINE_TERMINATOR)
            .from_writer(writer);

        csv_writer.write_record(HEADER)?;
        for contact in contacts {
            csv_writer.serialize(contact)?;
        }
        csv_writer.flush()?;

        debug!(
            "Wrote {} records to {}",
            contacts.len(),
            self.path.display()
        );
        Ok(())
    }
}
