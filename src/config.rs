//! Configuration module for phonebook
//!
//! Settings are collected once at startup from the command line and passed to
//! the components that need them, instead of living in global state.

use std::path::{Path, PathBuf};

use crate::cli::PhonebookArgs;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Record File the session works on
    phonebook_file: PathBuf,

    /// Whether to show verbose output
    verbose: bool,

    /// Whether to read input through the line editor
    line_editor: bool,
}

impl AppConfig {
    /// Create a new application configuration
    ///
    /// # Arguments
    /// * `phonebook_file` - Record File the session works on
    /// * `verbose` - Whether to show verbose output
    /// * `line_editor` - Whether to read input through the line editor
    pub fn new(phonebook_file: PathBuf, verbose: bool, line_editor: bool) -> Self {
        Self {
            phonebook_file,
            verbose,
            line_editor,
        }
    }

    /// Build the configuration from parsed arguments
    ///
    /// `stdin_is_terminal` decides the line editor together with `--plain`:
    /// piped input never goes through the editor.
    pub fn from_args(args: &PhonebookArgs, stdin_is_terminal: bool) -> Self {
        Self::new(
            args.file.clone(),
            args.verbose,
            stdin_is_terminal && !args.plain,
        )
    }

    /// Get the Record File path
    pub fn phonebook_file(&self) -> &Path {
        &self.phonebook_file
    }

    /// Get the verbose flag
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Get whether to use the line editor
    pub fn line_editor(&self) -> bool {
        self.line_editor
    }
}

/// Install the env_logger backend
///
/// The default level is `warn`, or `debug` when `verbose` is set. `RUST_LOG`
/// overrides both. Calling this twice is harmless.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_level),
    )
    .format_timestamp(None)
    .try_init();
}
