//! Plain text output formatter

use std::io::{self, Write};

use tagloss_core::GlossaryEntry;

use super::GlossaryFormatter;
use crate::error::CliResult;

/// Text formatter - one `identifier : sentence` line per entry, with the
/// identifier column right-aligned to the longest identifier
pub struct TextFormatter<W: Write> {
    writer: W,
    entries: Vec<(String, String)>,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> GlossaryFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &GlossaryEntry) -> CliResult<()> {
        self.entries
            .push((entry.identifier.clone(), entry.sentence.clone()));
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        let width = self
            .entries
            .iter()
            .map(|(identifier, _)| identifier.len())
            .max()
            .unwrap_or(0);

        for (identifier, sentence) in &self.entries {
            writeln!(self.writer, "{identifier:>width$} : {sentence}")?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
