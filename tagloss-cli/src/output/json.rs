//! JSON output formatter

use std::io::Write;

use serde::{Deserialize, Serialize};
use tagloss_core::GlossaryEntry;

use super::GlossaryFormatter;
use crate::error::CliResult;

/// JSON formatter - outputs the glossary as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    entries: Vec<EntryData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct EntryData {
    /// The identifier exactly as it appears in the document
    pub identifier: String,
    /// The synthesized sentence
    pub sentence: String,
    /// Group that claimed the identifier
    pub group: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            entries: Vec::new(),
        }
    }
}

impl<W: Write> GlossaryFormatter for JsonFormatter<W> {
    fn format_entry(&mut self, entry: &GlossaryEntry) -> CliResult<()> {
        self.entries.push(EntryData {
            identifier: entry.identifier.clone(),
            sentence: entry.sentence.clone(),
            group: entry.group.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> CliResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.entries)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
