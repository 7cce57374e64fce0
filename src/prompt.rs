//! Interactive input for phonebook
//!
//! The session asks every question through the [`Prompter`] trait so that the
//! same code runs on a terminal with line editing and on piped input.

use std::io::{self, BufRead, Write};

use rustyline::DefaultEditor;

use crate::error::{PhonebookError, PhonebookResult};

/// Source of answers to interactive questions
pub trait Prompter {
    /// Show `message` and return the line the user typed, without its line ending
    ///
    /// # Returns
    /// * `Ok(String)` - The entered line, possibly empty
    /// * `Err(PhonebookError::InputClosed)` once input is exhausted
    fn prompt(&mut self, message: &str) -> PhonebookResult<String>;
}

/// Prompter backed by a rustyline editor, used on a terminal
///
/// Entered lines go into the in-memory history for the current run only.
pub struct EditorPrompter {
    editor: DefaultEditor,
}

impl EditorPrompter {
    /// Create a new editor-backed prompter
    pub fn new() -> PhonebookResult<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }
}

impl Prompter for EditorPrompter {
    fn prompt(&mut self, message: &str) -> PhonebookResult<String> {
        let line = self.editor.readline(message)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        Ok(line)
    }
}

/// Prompter reading plain lines, used for pipes and scripted input
pub struct LinePrompter<R> {
    reader: R,
}

impl<R: BufRead> LinePrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> Prompter for LinePrompter<R> {
    fn prompt(&mut self, message: &str) -> PhonebookResult<String> {
        print!("{}", message);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(PhonebookError::InputClosed);
        }

        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
    }
}
