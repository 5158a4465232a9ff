//! Error handling for the genealogy core.

use chrono::NaiveDate;

use crate::models::types::{PartnershipId, PersonId};

/// Errors that can occur in the GEDCOM codec and the graph layout engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A GEDCOM line that does not match `LEVEL [POINTER] TAG [VALUE]`
    #[error("malformed GEDCOM line {line}: {reason}")]
    MalformedLine {
        /// 1-based line number in the source text
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// A date value outside the supported `DD MON YYYY` form
    #[error("unparseable GEDCOM date {0:?}")]
    UnparseableDate(String),

    /// A family record referencing an individual pointer not in the file
    #[error("family {family} references unknown individual {pointer}")]
    UnresolvedPointer {
        /// Pointer of the family record being parsed
        family: String,
        /// The individual pointer that did not resolve
        pointer: String,
    },

    /// A partner whose gender has no HUSB/WIFE tag in GEDCOM 5.5
    #[error("no family tag for {gender} partner {person}")]
    UnsupportedPartnerGender {
        /// Display name of the offending partner
        person: String,
        /// The gender that could not be mapped
        gender: String,
    },

    /// Birth date after death date on a person record
    #[error("birth date {birth} is after death date {death}")]
    InvalidDateRange {
        /// The offending birth date
        birth: NaiveDate,
        /// The offending death date
        death: NaiveDate,
    },

    /// Divorce date before marriage date on a partnership record
    #[error("divorce date {divorce} is before marriage date {marriage}")]
    InvalidPartnershipDates {
        /// The recorded marriage date
        marriage: NaiveDate,
        /// The recorded divorce date
        divorce: NaiveDate,
    },

    /// Age queried for a person without the dates to compute it
    #[error("age is undefined for {0}")]
    IllegalAge(String),

    /// An entity id inserted twice into the same store
    #[error("duplicate entity id {0}")]
    DuplicateEntity(String),

    /// A person id with no record in the store
    #[error("unknown person {0}")]
    UnknownPerson(PersonId),

    /// A partnership id with no record in the store
    #[error("unknown partnership {0}")]
    UnknownPartnership(PartnershipId),

    /// A graph node id added twice
    #[error("duplicate graph node {0}")]
    DuplicateNode(String),

    /// A graph edge (source, target) pair added twice
    #[error("duplicate graph edge {src} -> {target}")]
    DuplicateEdge {
        /// Source node id of the duplicate edge
        src: String,
        /// Target node id of the duplicate edge
        target: String,
    },

    /// A graph operation naming a node id that is not in the graph
    #[error("unknown graph node {0}")]
    UnknownNode(String),

    /// A graph edge that is not in the graph
    #[error("unknown graph edge {src} -> {target}")]
    UnknownEdge {
        /// Source node id of the missing edge
        src: String,
        /// Target node id of the missing edge
        target: String,
    },

    /// A person or partnership reachable as its own ancestor or descendant
    #[error("cyclic relationship detected at {0}")]
    CyclicRelationship(String),

    /// Serialization of the graph export payload failed
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for genealogy core operations
pub type Result<T> = std::result::Result<T, Error>;
