//! Error handling for phonebook
//!
//! This module defines the error type shared by the record store, the
//! validation helpers and the interactive session. Most variants never reach
//! the user as a failure: the session reports them and keeps prompting.
//!
//! The module uses thiserror to keep the variants and their messages together.

use thiserror::Error;

use crate::contact::Field;

/// PhonebookError represents every failure the phonebook can run into
///
/// The variants fall into a few groups:
/// - File system and CSV problems while reading or rewriting a Record File
/// - Validation of interactively entered values and demo arguments
/// - The state of the input stream (closed, interrupted, line editor failure)
#[derive(Error, Debug)]
pub enum PhonebookError {
    /// Error during file system operations (reading/writing files)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error while parsing or writing the delimited record data
    #[error("File parsing error: {0}")]
    CsvError(#[from] csv::Error),

    /// An entered value is shorter than its field allows
    #[error("{field} is too short: expected at least {min} characters")]
    FieldTooShort { field: Field, min: usize },

    /// The user asked to search a column that does not exist
    #[error("Unknown field '{0}'")]
    UnknownField(String),

    /// Copy mode other than `cf` or `cr`
    #[error("Unknown copy mode '{0}'")]
    InvalidCopyMode(String),

    /// Label list the one-hot demo cannot encode
    #[error("Invalid labels: {0}")]
    InvalidLabels(String),

    /// The input stream reached end of file
    #[error("Input closed")]
    InputClosed,

    /// The user pressed Ctrl-C at a prompt
    #[error("Input interrupted")]
    Interrupted,

    /// Any other failure reported by the line editor
    #[error("Input error: {0}")]
    ReadlineError(rustyline::error::ReadlineError),
}

impl PhonebookError {
    /// Whether this error means no more input can be read
    ///
    /// The session stops its loop on these instead of reporting them.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            PhonebookError::InputClosed | PhonebookError::Interrupted
        )
    }
}

impl From<rustyline::error::ReadlineError> for PhonebookError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        use rustyline::error::ReadlineError;

        match err {
            ReadlineError::Eof => PhonebookError::InputClosed,
            ReadlineError::Interrupted => PhonebookError::Interrupted,
            ReadlineError::Io(e) => PhonebookError::IoError(e),
            other => PhonebookError::ReadlineError(other),
        }
    }
}

/// Result type alias for operations that can produce a PhonebookError
pub type PhonebookResult<T> = std::result::Result<T, PhonebookError>;
