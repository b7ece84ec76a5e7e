//! Output formatting module

use tagloss_core::GlossaryEntry;

use crate::error::CliResult;

/// Trait for glossary output formatters
///
/// Entries are fed one at a time; nothing is written until [`finish`],
/// which lets the text formatter size its identifier column from the
/// whole glossary.
///
/// [`finish`]: GlossaryFormatter::finish
pub trait GlossaryFormatter {
    /// Add one glossary entry to the output
    fn format_entry(&mut self, entry: &GlossaryEntry) -> CliResult<()>;

    /// Write out the buffered glossary and flush
    fn finish(&mut self) -> CliResult<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
