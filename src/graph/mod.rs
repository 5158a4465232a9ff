//! Family graph model and export payload
//!
//! Nodes and edges are plain serializable records for an external
//! rendering layer; [`layout`] computes their coordinates. Node extras
//! are an explicit optional map, not dynamic fields.

pub mod layout;

use std::collections::BTreeMap;

use serde::Serialize;

pub use layout::Graph;

/// One positioned node of the rendered family graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Node id, e.g. `Person_42`; identity is by id alone
    pub id: String,
    /// Layout x coordinate
    pub x: f64,
    /// Layout y coordinate
    pub y: f64,
    /// Human-readable label
    pub label: Option<String>,
    /// Extra renderer attributes, e.g. a marker size
    #[serde(flatten)]
    pub extras: BTreeMap<String, serde_json::Value>,
}

impl Node {
    /// Create a node without extras
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, label: Option<String>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            label,
            extras: BTreeMap::new(),
        }
    }

    /// Attach an extra renderer attribute
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }
}

/// One edge of the rendered family graph
///
/// Identity is the (source, target) pair; direction follows the
/// traversal (parent to child, partner to partnership) but symmetry is
/// not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Source node id
    pub source: String,
    /// Target node id
    pub target: String,
    /// Optional edge label
    pub label: Option<String>,
}

impl Edge {
    /// Create an unlabeled edge
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }
}

/// The plain export structure the rendering collaborator consumes
#[derive(Debug, Clone, Serialize)]
pub struct GraphPayload {
    /// All nodes with final coordinates
    pub nodes: Vec<Node>,
    /// All edges between them
    pub edges: Vec<Edge>,
}
