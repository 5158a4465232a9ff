//! GEDCOM line reader
//!
//! Parses GEDCOM text into a [`Document`] of element trees. Lines have
//! the shape `LEVEL [POINTER] TAG [VALUE]`; LF and CRLF endings are both
//! accepted, and a child level may only be one deeper than its parent.

use crate::error::{Error, Result};
use crate::gedcom::element::{Document, Element};

/// Parse GEDCOM text into a document.
///
/// Empty lines are skipped. Pointers are accepted in any `@...@` shape
/// and kept as opaque strings.
pub fn parse_document(text: &str) -> Result<Document> {
    let mut document = Document::new();
    // open elements, one per level, deepest last
    let mut stack: Vec<Element> = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = raw.trim_start_matches('\u{feff}').trim();
        if line.is_empty() {
            continue;
        }
        let element = parse_line(line_number, line)?;

        let depth = element.level as usize;
        if depth > stack.len() {
            return Err(Error::MalformedLine {
                line: line_number,
                reason: format!(
                    "level {} skips ahead of its parent at level {}",
                    element.level,
                    stack.len().saturating_sub(1)
                ),
            });
        }
        close_to(depth, &mut stack, &mut document);
        stack.push(element);
    }

    close_to(0, &mut stack, &mut document);
    Ok(document)
}

/// Pop open elements down to `depth`, attaching each to its parent
fn close_to(depth: usize, stack: &mut Vec<Element>, document: &mut Document) {
    while stack.len() > depth {
        let Some(closed) = stack.pop() else { break };
        match stack.last_mut() {
            Some(parent) => parent.add_child(closed),
            None => document.push(closed),
        }
    }
}

/// Parse one `LEVEL [POINTER] TAG [VALUE]` line
fn parse_line(line_number: usize, line: &str) -> Result<Element> {
    let malformed = |reason: &str| Error::MalformedLine {
        line: line_number,
        reason: reason.to_string(),
    };

    let mut rest = line;
    let (level_text, after_level) = split_token(rest);
    let level: u32 = level_text
        .parse()
        .map_err(|_| malformed("line must start with a non-negative level"))?;
    rest = after_level;

    let pointer = if rest.starts_with('@') {
        let (pointer_text, after_pointer) = split_token(rest);
        if !pointer_text.ends_with('@') || pointer_text.len() < 3 {
            return Err(malformed("pointer must have the form @TOKEN@"));
        }
        rest = after_pointer;
        pointer_text
    } else {
        ""
    };

    let (tag, value) = split_token(rest);
    if tag.is_empty() {
        return Err(malformed("line is missing a tag"));
    }

    Ok(Element::new(level, pointer, tag, value))
}

/// Split off the first whitespace-delimited token, returning it and the
/// remainder with leading whitespace removed
fn split_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => (&text[..at], text[at..].trim_start()),
        None => (text, ""),
    }
}
