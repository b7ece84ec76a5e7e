//! Tagloss CLI library
//!
//! This library provides the command-line interface for the tagloss
//! glossary synthesis engine.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;
pub mod record;

pub use error::{CliError, CliResult};
