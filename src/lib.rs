//! Phonebook library crate
//!
//! This is the library component of phonebook, an interactive command-line
//! contact list kept in a CSV file. The library provides:
//!
//! - Reading and rewriting whole Record Files with a fixed header
//! - Contact records with minimum-length validation of entered values
//! - Row-number parsing, append, delete with renumbering, row copy and search
//! - The menu-driven interactive session and its input abstraction
//!
//! It also hosts the small one-hot encoding demo used by the `onehot` binary.

pub mod cli;
pub mod config;
pub mod contact;
pub mod error;
pub mod onehot;
pub mod operations;
pub mod prompt;
pub mod record_store;
pub mod repl;
