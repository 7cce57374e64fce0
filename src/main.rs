//! phonebook - an interactive contact list stored in a CSV file
//!
//! The program shows a menu of single-letter commands and keeps prompting
//! until `q` is entered or input ends:
//!
//! - `w` append a contact
//! - `r` list contacts
//! - `d` delete contacts by row number
//! - `c` copy the file, or selected rows into another file
//! - `f` find contacts by one field
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments and set up logging
//! 2. Pick the input source (line editor on a terminal, plain lines otherwise)
//! 3. Run the interactive session against the chosen Record File

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use log::debug;

use phonebook::cli;
use phonebook::config::{init_logging, AppConfig};
use phonebook::prompt::{EditorPrompter, LinePrompter, Prompter};
use phonebook::repl::Repl;

fn main() -> Result<()> {
    let args = cli::parse_args()?;

    let config = AppConfig::from_args(&args, io::stdin().is_terminal());
    init_logging(config.verbose());
    debug!("Arguments: {:?}", args);

    let prompter: Box<dyn Prompter> = if config.line_editor() {
        debug!("Using line editor for input");
        Box::new(EditorPrompter::new().context("Failed to initialise line editor")?)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock()))
    };

    let mut repl = Repl::new(prompter, &config);
    repl.run().context("Interactive session failed")?;

    Ok(())
}
