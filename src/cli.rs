//! CLI argument parsing module for phonebook
//!
//! This module defines the command-line surface of both binaries using clap.
//! The phonebook itself is driven by interactive prompts; its arguments only
//! pick the Record File and how input and diagnostics are handled.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

/// Command-line arguments for the phonebook
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Interactive phonebook stored in a CSV file"
)]
pub struct PhonebookArgs {
    /// Record File holding the phonebook
    ///
    /// The file is created (header only) after confirmation the first time a
    /// command needs it.
    #[clap(default_value = "phonebook.csv", help = "Phonebook CSV file")]
    pub file: PathBuf,

    /// Enable verbose diagnostic output
    ///
    /// Raises the log level to debug. Log lines go to stderr and never mix
    /// with prompts. RUST_LOG takes precedence when set.
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Read plain lines even when attached to a terminal
    ///
    /// Without this flag a line editor with history is used on a terminal.
    /// Piped input always uses plain line reads.
    #[clap(long, help = "Disable the line editor")]
    pub plain: bool,
}

/// Command-line arguments for the one-hot encoding demo
#[derive(Parser, Debug)]
#[clap(
    name = "onehot",
    author,
    version,
    about = "Shuffle category labels and print their one-hot encoding"
)]
pub struct OnehotArgs {
    /// Category labels, one output column each
    #[clap(
        short,
        long,
        value_delimiter = ',',
        default_values = ["robot", "human"],
        help = "Comma-separated category labels"
    )]
    pub labels: Vec<String>,

    /// How many times each label occurs in the generated sequence
    #[clap(short, long, default_value_t = 10, help = "Occurrences of each label")]
    pub count: usize,

    /// Number of leading rows to print
    #[clap(short, long, default_value_t = 5, help = "Rows to display")]
    pub rows: usize,

    /// Seed for a reproducible shuffle
    #[clap(long, help = "Seed for the shuffle")]
    pub seed: Option<u64>,

    /// Enable verbose diagnostic output
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Parse the phonebook's command-line arguments
///
/// # Returns
/// * `Ok(PhonebookArgs)` - Arguments successfully parsed
/// * `Err` - Never in practice; clap prints usage and exits on bad input
pub fn parse_args() -> Result<PhonebookArgs> {
    Ok(PhonebookArgs::parse())
}

/// Parse the one-hot demo's command-line arguments
pub fn parse_onehot_args() -> Result<OnehotArgs> {
    Ok(OnehotArgs::parse())
}
