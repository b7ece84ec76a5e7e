//! Tag name and value extraction from report XML

use anyhow::Context;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::CliResult;

/// Collect every element name in document order, root included
///
/// Repeated elements are reported once per occurrence; the glossary is
/// built over exactly what the document contains.
pub fn extract_tag_names(xml: &str) -> CliResult<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut tags = Vec::new();
    loop {
        match reader.read_event() {
            Ok(Event::Start(tag)) | Ok(Event::Empty(tag)) => {
                tags.push(String::from_utf8_lossy(tag.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Malformed XML at byte {}", reader.buffer_position())
                });
            }
        }
    }

    Ok(tags)
}

/// Text content of the first element with the given name
///
/// Returns `None` when the element is absent or empty.
pub fn tag_text(xml: &str, tag: &str) -> CliResult<Option<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut inside_target = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                inside_target = e.name().as_ref() == tag.as_bytes();
            }
            Ok(Event::End(_)) => {
                inside_target = false;
            }
            Ok(Event::Text(text)) if inside_target => {
                let value = text
                    .unescape()
                    .with_context(|| format!("Invalid text content in <{tag}>"))?;
                return Ok(Some(value.into_owned()));
            }
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => {}
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Malformed XML at byte {}", reader.buffer_position())
                });
            }
        }
    }
}
