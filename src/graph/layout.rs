//! Family graph layout engine
//!
//! Expands an ancestor/descendant graph rooted at a focal person into
//! positioned nodes and edges. Ancestors stack upward one padding step
//! per generation with partners placed symmetrically around a
//! partnership marker; descendants fan downward with each generation
//! spread by subtree width so sibling subtrees never overlap. One
//! `Graph` instance builds one layout; concurrent mutation is not
//! supported.

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};
use crate::graph::{Edge, GraphPayload, Node};
use crate::models::types::{PartnershipId, PersonId};
use crate::store::{TreeData, TreeIndex};

/// Horizontal and vertical step between related nodes
pub const PADDING: f64 = 50.0;

/// Marker size attached to partnership nodes for the renderer
const PARTNERSHIP_POINT_SIZE: u64 = 10;

/// A family graph under construction
#[derive(Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_ids: FxHashSet<String>,
    edge_keys: FxHashSet<(String, String)>,
    added_people: FxHashSet<PersonId>,
}

/// Node id of a person, e.g. `Person_42`
#[must_use]
pub fn person_node_id(id: PersonId) -> String {
    format!("Person_{id}")
}

/// Node id of a partnership marker, e.g. `Partnership_3`
#[must_use]
pub fn partnership_node_id(id: PartnershipId) -> String {
    format!("Partnership_{id}")
}

impl Graph {
    /// Create an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The nodes placed so far
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The edges placed so far
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Add a node; a duplicate id is a logic error, not an overwrite
    pub fn add_node(&mut self, node: Node) -> Result<()> {
        if !self.node_ids.insert(node.id.clone()) {
            return Err(Error::DuplicateNode(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Add an edge between existing nodes; duplicate pairs are an error
    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> Result<()> {
        let source = source.into();
        let target = target.into();
        if !self.node_ids.contains(&source) {
            return Err(Error::UnknownNode(source));
        }
        if !self.node_ids.contains(&target) {
            return Err(Error::UnknownNode(target));
        }
        let key = (source.clone(), target.clone());
        if !self.edge_keys.insert(key) {
            return Err(Error::DuplicateEdge { src: source, target });
        }
        self.edges.push(Edge::new(source, target));
        Ok(())
    }

    /// Remove a node and every edge referencing it
    pub fn remove_node(&mut self, id: &str) -> Result<()> {
        if !self.node_ids.remove(id) {
            return Err(Error::UnknownNode(id.to_string()));
        }
        self.nodes.retain(|node| node.id != id);
        self.edges.retain(|edge| edge.source != id && edge.target != id);
        self.edge_keys
            .retain(|(source, target)| source != id && target != id);
        Ok(())
    }

    /// Remove one edge
    pub fn remove_edge(&mut self, source: &str, target: &str) -> Result<()> {
        let key = (source.to_string(), target.to_string());
        if !self.edge_keys.remove(&key) {
            return Err(Error::UnknownEdge {
                src: key.0,
                target: key.1,
            });
        }
        self.edges
            .retain(|edge| !(edge.source == source && edge.target == target));
        Ok(())
    }

    /// Remove a person's node and its edges
    pub fn remove_person(&mut self, person: PersonId) -> Result<()> {
        self.remove_node(&person_node_id(person))?;
        self.added_people.remove(&person);
        Ok(())
    }

    /// Place a person node at (x, y), labeled with the display name
    pub fn add_person(&mut self, data: &TreeData, person: PersonId, x: f64, y: f64) -> Result<()> {
        let Some(record) = data.person(person) else {
            return Err(Error::UnknownPerson(person));
        };
        self.add_node(Node::new(
            person_node_id(person),
            x,
            y,
            Some(record.display_name()),
        ))?;
        self.added_people.insert(person);
        Ok(())
    }

    /// Place a partnership marker at (x, y) and its two partners
    /// symmetrically beside it.
    ///
    /// Partners already in the graph keep their position and only gain
    /// the connecting edge. Partnerships with other than two partners
    /// get the marker only; no placement rule is defined for them.
    pub fn add_partnership(
        &mut self,
        data: &TreeData,
        partnership: PartnershipId,
        x: f64,
        y: f64,
    ) -> Result<()> {
        let Some(record) = data.partnership(partnership) else {
            return Err(Error::UnknownPartnership(partnership));
        };
        let marker_id = partnership_node_id(partnership);
        self.add_node(
            Node::new(marker_id.clone(), x, y, None).with_extra("size", PARTNERSHIP_POINT_SIZE),
        )?;

        if record.partners.len() != 2 {
            log::warn!(
                "partnership {partnership} has {} partners; placing marker only",
                record.partners.len()
            );
            return Ok(());
        }
        let offsets = [-PADDING, PADDING];
        for (partner, offset) in record.partners.clone().into_iter().zip(offsets) {
            if !self.added_people.contains(&partner) {
                self.add_person(data, partner, x + offset, y)?;
            }
            self.add_edge(person_node_id(partner), marker_id.clone())?;
        }
        Ok(())
    }

    /// Recursively place the person's ancestors, up to `depth`
    /// generations above the already-placed person node.
    ///
    /// Only the first parental partnership is followed when a person
    /// has several. Fails fast on cyclic parent data.
    pub fn add_parents(
        &mut self,
        data: &TreeData,
        index: &TreeIndex,
        person: PersonId,
        depth: u32,
    ) -> Result<()> {
        let mut visiting = FxHashSet::default();
        self.add_parents_inner(data, index, person, depth, &mut visiting)
    }

    fn add_parents_inner(
        &mut self,
        data: &TreeData,
        index: &TreeIndex,
        person: PersonId,
        depth: u32,
        visiting: &mut FxHashSet<PersonId>,
    ) -> Result<()> {
        if depth == 0 {
            return Ok(());
        }
        if !visiting.insert(person) {
            return Err(Error::CyclicRelationship(person_node_id(person)));
        }
        let Some(&parental) = index.parent_partnerships_of(person).first() else {
            visiting.remove(&person);
            return Ok(());
        };

        let anchor_id = person_node_id(person);
        let Some(anchor) = self.node(&anchor_id) else {
            return Err(Error::UnknownNode(anchor_id));
        };
        let (x, y) = (anchor.x, anchor.y);

        let marker_id = partnership_node_id(parental);
        if !self.node_ids.contains(&marker_id) {
            self.add_partnership(data, parental, x, y - PADDING)?;
        }
        // siblings share the marker but each gets their own edge
        if !self.edge_keys.contains(&(marker_id.clone(), anchor_id.clone())) {
            self.add_edge(marker_id, anchor_id)?;
        }

        let Some(record) = data.partnership(parental) else {
            return Err(Error::UnknownPartnership(parental));
        };
        for partner in record.partners.clone() {
            let has_parents = !index.parent_partnerships_of(partner).is_empty();
            if has_parents && self.node_ids.contains(&person_node_id(partner)) {
                self.add_parents_inner(data, index, partner, depth - 1, visiting)?;
            }
        }
        visiting.remove(&person);
        Ok(())
    }

    /// Recursively place the partnership's descendants, up to `depth`
    /// generations below the already-placed marker node.
    ///
    /// Children spread horizontally by the subtree width of this
    /// partnership at the remaining depth, centered under the marker.
    /// Fails fast on cyclic child data.
    pub fn add_children(
        &mut self,
        data: &TreeData,
        index: &TreeIndex,
        partnership: PartnershipId,
        depth: u32,
    ) -> Result<()> {
        let mut visiting = FxHashSet::default();
        self.add_children_inner(data, index, partnership, depth, &mut visiting)
    }

    fn add_children_inner(
        &mut self,
        data: &TreeData,
        index: &TreeIndex,
        partnership: PartnershipId,
        depth: u32,
        visiting: &mut FxHashSet<PartnershipId>,
    ) -> Result<()> {
        if depth == 0 {
            return Ok(());
        }
        if !visiting.insert(partnership) {
            return Err(Error::CyclicRelationship(partnership_node_id(partnership)));
        }

        let marker_id = partnership_node_id(partnership);
        let Some(marker) = self.node(&marker_id) else {
            return Err(Error::UnknownNode(marker_id));
        };
        let (x, y) = (marker.x, marker.y);

        let Some(record) = data.partnership(partnership) else {
            return Err(Error::UnknownPartnership(partnership));
        };
        let children = record.children.clone();
        let count = children.len();
        if count == 0 {
            visiting.remove(&partnership);
            return Ok(());
        }

        let width = f64::from(generation_size(data, index, partnership, depth));
        for (i, child) in children.into_iter().enumerate() {
            // space n children symmetrically around the marker
            let factor = (1.0 - count as f64) / 2.0 + i as f64;
            let child_x = width * PADDING * factor + x;
            let child_y = y + PADDING;

            if !self.added_people.contains(&child) {
                self.add_person(data, child, child_x, child_y)?;
            }
            let child_node = person_node_id(child);
            if !self.edge_keys.contains(&(marker_id.clone(), child_node.clone())) {
                self.add_edge(marker_id.clone(), child_node)?;
            }

            if let Some(&own) = index.partnerships_of(child).first() {
                let own_marker = partnership_node_id(own);
                if !self.node_ids.contains(&own_marker) {
                    self.add_partnership(data, own, child_x + PADDING, child_y)?;
                }
                self.add_children_inner(data, index, own, depth - 1, visiting)?;
            }
        }
        visiting.remove(&partnership);
        Ok(())
    }

    /// Shift all coordinates so the minimum x and y become exactly
    /// `extra_padding`. Call once after all nodes are placed.
    pub fn normalize(&mut self, extra_padding: f64) {
        let Some(first) = self.nodes.first() else {
            return;
        };
        let (mut min_x, mut min_y) = (first.x, first.y);
        for node in &self.nodes {
            min_x = min_x.min(node.x);
            min_y = min_y.min(node.y);
        }
        for node in &mut self.nodes {
            node.x += extra_padding - min_x;
            node.y += extra_padding - min_y;
        }
    }

    /// Export the node and edge collections for the renderer
    #[must_use]
    pub fn to_payload(&self) -> GraphPayload {
        GraphPayload {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Export as a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_payload())?)
    }
}

/// Maximum number of terminal descendant slots any single branch of the
/// partnership requires within `depth` generations.
///
/// This is the width multiplier that keeps sibling subtrees from
/// overlapping: a childless branch needs one slot, and a partnership
/// needs its child count times the widest slot any child's own
/// partnership requires one level down.
#[must_use]
pub fn generation_size(
    data: &TreeData,
    index: &TreeIndex,
    partnership: PartnershipId,
    depth: u32,
) -> u32 {
    if depth == 0 {
        return 1;
    }
    let Some(record) = data.partnership(partnership) else {
        return 1;
    };
    let count = u32::try_from(record.children.len()).unwrap_or(u32::MAX);
    if count == 0 {
        return 1;
    }
    let mut widest_branch = 1;
    for child in &record.children {
        if let Some(&own) = index.partnerships_of(*child).first() {
            widest_branch = widest_branch.max(generation_size(data, index, own, depth - 1));
        }
    }
    count * widest_branch
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::Gender;
    use crate::models::{Partnership, Person, PersonName, Tree};

    fn add_person(data: &mut TreeData, first: &str) -> PersonId {
        let id = data.next_person_id();
        let gender = if id.0 % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        };
        data.insert_person(Person::new(id, PersonName::new(first, ""), gender))
            .unwrap()
    }

    fn add_partnership(
        data: &mut TreeData,
        partners: &[PersonId],
        children: &[PersonId],
    ) -> PartnershipId {
        let id = data.next_partnership_id();
        let mut partnership = Partnership::new(id);
        partnership.partners = partners.to_vec();
        partnership.children = children.to_vec();
        data.insert_partnership(partnership).unwrap()
    }

    #[test]
    fn test_duplicate_node_is_an_error() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("Person_1", 0.0, 0.0, None)).unwrap();
        assert!(matches!(
            graph.add_node(Node::new("Person_1", 1.0, 1.0, None)),
            Err(Error::DuplicateNode(_))
        ));
    }

    #[test]
    fn test_edges_require_existing_nodes() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", 0.0, 0.0, None)).unwrap();
        assert!(matches!(
            graph.add_edge("a", "b"),
            Err(Error::UnknownNode(_))
        ));

        graph.add_node(Node::new("b", 1.0, 0.0, None)).unwrap();
        graph.add_edge("a", "b").unwrap();
        assert!(matches!(
            graph.add_edge("a", "b"),
            Err(Error::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn test_remove_node_cascades_to_edges() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", 0.0, 0.0, None)).unwrap();
        graph.add_node(Node::new("b", 1.0, 0.0, None)).unwrap();
        graph.add_node(Node::new("c", 2.0, 0.0, None)).unwrap();
        graph.add_edge("a", "b").unwrap();
        graph.add_edge("b", "c").unwrap();
        graph.add_edge("a", "c").unwrap();

        graph.remove_node("b").unwrap();
        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0], Edge::new("a", "c"));
        assert!(matches!(
            graph.remove_node("b"),
            Err(Error::UnknownNode(_))
        ));
    }

    #[test]
    fn test_add_partnership_places_two_partners_symmetrically() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let left = add_person(&mut data, "Abe");
        let right = add_person(&mut data, "Beth");
        let partnership = add_partnership(&mut data, &[left, right], &[]);

        let mut graph = Graph::new();
        graph.add_partnership(&data, partnership, 100.0, 40.0).unwrap();

        let marker = graph.node("Partnership_1").unwrap();
        assert_eq!((marker.x, marker.y), (100.0, 40.0));
        assert_eq!(marker.extras["size"], 10);
        let left_node = graph.node(&person_node_id(left)).unwrap();
        let right_node = graph.node(&person_node_id(right)).unwrap();
        assert_eq!((left_node.x, left_node.y), (50.0, 40.0));
        assert_eq!((right_node.x, right_node.y), (150.0, 40.0));
        assert_eq!(graph.edges().len(), 2);
    }

    #[test]
    fn test_add_partnership_other_arity_places_marker_only() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let only = add_person(&mut data, "Solo");
        let partnership = add_partnership(&mut data, &[only], &[]);

        let mut graph = Graph::new();
        graph.add_partnership(&data, partnership, 0.0, 0.0).unwrap();
        assert_eq!(graph.nodes().len(), 1);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_generation_size_is_max_branch_width() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let father = add_person(&mut data, "Father");
        let mother = add_person(&mut data, "Mother");
        let busy = add_person(&mut data, "Busy");
        let quiet = add_person(&mut data, "Quiet");
        let spouse = add_person(&mut data, "Spouse");
        let g1 = add_person(&mut data, "G1");
        let g2 = add_person(&mut data, "G2");
        let g3 = add_person(&mut data, "G3");

        let root = add_partnership(&mut data, &[father, mother], &[busy, quiet]);
        let _branch = add_partnership(&mut data, &[busy, spouse], &[g1, g2, g3]);
        let index = TreeIndex::build(&data);

        assert_eq!(generation_size(&data, &index, root, 2), 6);
        assert_eq!(generation_size(&data, &index, root, 1), 2);
        assert_eq!(generation_size(&data, &index, root, 0), 1);
    }

    #[test]
    fn test_children_of_one_partnership_do_not_overlap() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let father = add_person(&mut data, "Father");
        let mother = add_person(&mut data, "Mother");
        let children: Vec<PersonId> = (0..3)
            .map(|i| add_person(&mut data, &format!("Child{i}")))
            .collect();
        let partnership = add_partnership(&mut data, &[father, mother], &children);
        let index = TreeIndex::build(&data);

        let mut graph = Graph::new();
        graph.add_partnership(&data, partnership, 0.0, 0.0).unwrap();
        graph.add_children(&data, &index, partnership, 1).unwrap();

        // width 3, so siblings sit one full subtree width apart
        let mut xs: Vec<f64> = children
            .iter()
            .map(|child| graph.node(&person_node_id(*child)).unwrap().x)
            .collect();
        xs.sort_by(f64::total_cmp);
        assert_eq!(xs, vec![-150.0, 0.0, 150.0]);
        assert_eq!(
            graph.node(&person_node_id(children[1])).unwrap().y,
            PADDING
        );
    }

    #[test]
    fn test_normalize_sets_exact_minimums() {
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", -100.0, -25.0, None)).unwrap();
        graph.add_node(Node::new("b", 75.0, 300.0, None)).unwrap();
        graph.normalize(50.0);

        let min_x = graph.nodes().iter().map(|n| n.x).fold(f64::MAX, f64::min);
        let min_y = graph.nodes().iter().map(|n| n.y).fold(f64::MAX, f64::min);
        assert_eq!(min_x, 50.0);
        assert_eq!(min_y, 50.0);

        // already-positive layouts shift down to the margin too
        let mut graph = Graph::new();
        graph.add_node(Node::new("a", 400.0, 90.0, None)).unwrap();
        graph.normalize(50.0);
        let node = graph.node("a").unwrap();
        assert_eq!((node.x, node.y), (50.0, 50.0));
    }

    #[test]
    fn test_cyclic_ancestry_fails_fast() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let x = add_person(&mut data, "X");
        let y = add_person(&mut data, "Y");
        // X is recorded as a child of their own partnership
        let _cyclic = add_partnership(&mut data, &[x, y], &[x]);
        let index = TreeIndex::build(&data);

        let mut graph = Graph::new();
        graph.add_person(&data, x, 0.0, 0.0).unwrap();
        assert!(matches!(
            graph.add_parents(&data, &index, x, 3),
            Err(Error::CyclicRelationship(_))
        ));
    }

    #[test]
    fn test_cyclic_descendants_fail_fast() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let a = add_person(&mut data, "A");
        let b = add_person(&mut data, "B");
        let cyclic = add_partnership(&mut data, &[a, b], &[a]);
        let index = TreeIndex::build(&data);

        let mut graph = Graph::new();
        graph.add_partnership(&data, cyclic, 0.0, 0.0).unwrap();
        assert!(matches!(
            graph.add_children(&data, &index, cyclic, 3),
            Err(Error::CyclicRelationship(_))
        ));
    }

    #[test]
    fn test_to_json_payload_shape() {
        let mut graph = Graph::new();
        graph
            .add_node(Node::new("Person_1", 0.0, 0.0, Some("Henry Ford".to_string())))
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&graph.to_json().unwrap()).unwrap();
        assert!(json["nodes"].is_array());
        assert!(json["edges"].is_array());
        assert_eq!(json["nodes"][0]["id"], "Person_1");
    }
}
