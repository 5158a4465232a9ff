//! GEDCOM line writer
//!
//! Serializes a [`Document`] back to GEDCOM text: one `LEVEL [POINTER]
//! TAG [VALUE]` line per element, children depth-first, LF endings.

use crate::gedcom::element::{Document, Element};

/// Serialize a document to GEDCOM text
#[must_use]
pub fn write_document(document: &Document) -> String {
    let mut out = String::new();
    for record in document.records() {
        write_element(&mut out, record);
    }
    out
}

fn write_element(out: &mut String, element: &Element) {
    out.push_str(&element.level.to_string());
    if !element.pointer.is_empty() {
        out.push(' ');
        out.push_str(&element.pointer);
    }
    out.push(' ');
    out.push_str(&element.tag);
    if !element.value.is_empty() {
        out.push(' ');
        out.push_str(&element.value);
    }
    out.push('\n');
    for child in element.children() {
        write_element(out, child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::reader::parse_document;
    use crate::gedcom::tags;

    fn create_test_document() -> Document {
        let mut document = Document::new();
        let mut head = Element::new(0, "", tags::HEAD, "");
        head.add_child(Element::new(1, "", tags::CHAR, tags::CHARSET_UTF8));
        document.push(head);

        let mut individual = Element::new(0, "@PERSON_1@", tags::INDI, "");
        individual.add_child(Element::new(1, "", tags::NAME, "Henry Ford"));
        let mut birth = Element::new(1, "", tags::BIRT, "");
        birth.add_child(Element::new(2, "", tags::DATE, "30 JUL 1863"));
        individual.add_child(birth);
        document.push(individual);
        document
    }

    #[test]
    fn test_line_shape() {
        let text = write_document(&create_test_document());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec![
            "0 HEAD",
            "1 CHAR UTF-8",
            "0 @PERSON_1@ INDI",
            "1 NAME Henry Ford",
            "1 BIRT",
            "2 DATE 30 JUL 1863",
        ]);
    }

    #[test]
    fn test_write_then_parse_round_trips() {
        let document = create_test_document();
        let reparsed = parse_document(&write_document(&document)).unwrap();
        assert!(document.structurally_equal(&reparsed));
    }
}
