//! GEDCOM interchange
//!
//! A bidirectional codec between the entity model and the GEDCOM text
//! format: a generic element tree with query helpers, a line-level
//! reader and writer, a generator walking entities into elements, and
//! an importer resolving elements back into entities.

pub mod dates;
pub mod element;
pub mod generator;
pub mod importer;
pub mod reader;
pub mod tags;
pub mod writer;

pub use element::{ChildQuery, Document, Element, Match};
pub use generator::generate;
pub use importer::{ImportOutcome, ImportReport, import_document};
pub use reader::parse_document;
pub use writer::write_document;
