//! Genealogy core library: GEDCOM interchange and family graph layout.
//!
//! The crate owns the two hard subsystems of a genealogy application: a
//! bidirectional codec between the entity model (people, names,
//! partnerships, locations) and the GEDCOM text format, and a layout
//! engine that embeds the person/partnership relationship graph into 2D
//! coordinates for rendering. Persistence, HTTP and templating are
//! external collaborators that exchange plain entity records with this
//! core.

pub mod error;
pub mod gedcom;
pub mod graph;
pub mod models;
pub mod names;
pub mod store;

// Re-export the most common types for easier use
// Core types
pub use error::{Error, Result};
pub use models::types::{Gender, Living, LocationId, MaritalStatus, PartnershipId, PersonId};
pub use models::{Location, Partnership, Person, PersonName, Tree};
pub use store::{TreeData, TreeIndex};

// GEDCOM interchange
pub use gedcom::element::{ChildQuery, Document, Element, Match};
pub use gedcom::generator::generate;
pub use gedcom::importer::{ImportOutcome, ImportReport, import_document};
pub use gedcom::reader::parse_document;
pub use gedcom::writer::write_document;

// Graph layout
pub use graph::layout::Graph;
pub use graph::{Edge, GraphPayload, Node};

// Name parsing
pub use names::parser::{ParsedName, parse_name};
pub use names::split_name;
