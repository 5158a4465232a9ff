//! Generic GEDCOM element tree
//!
//! Every GEDCOM record kind (header, individual, family, event,
//! submitter) is the same tree node shape: level, optional pointer,
//! tag, value and ordered children. Query helpers filter children by
//! per-attribute match arguments.

use crate::gedcom::tags;

/// One hierarchical GEDCOM record node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Depth in the record hierarchy, 0 for top-level records
    pub level: u32,
    /// Cross-reference id of the form `@TOKEN@`, empty when absent
    pub pointer: String,
    /// Short uppercase keyword, e.g. `INDI`, `BIRT`, `NAME`
    pub tag: String,
    /// Raw string payload, empty when absent
    pub value: String,
    children: Vec<Element>,
}

/// One attribute constraint of a [`ChildQuery`].
///
/// `Present(true)` requires a non-empty attribute, `Present(false)` an
/// empty one; `Equals` and `OneOf` compare the attribute text. `Any`
/// never excludes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Match {
    /// No constraint
    #[default]
    Any,
    /// Require the attribute to be non-empty (`true`) or empty (`false`)
    Present(bool),
    /// Require exact equality
    Equals(String),
    /// Require membership in a set
    OneOf(Vec<String>),
}

impl Match {
    fn accepts(&self, attribute: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Present(required) => *required != attribute.is_empty(),
            Self::Equals(expected) => expected == attribute,
            Self::OneOf(allowed) => allowed.iter().any(|candidate| candidate == attribute),
        }
    }
}

impl From<&str> for Match {
    fn from(expected: &str) -> Self {
        Self::Equals(expected.to_string())
    }
}

impl From<String> for Match {
    fn from(expected: String) -> Self {
        Self::Equals(expected)
    }
}

impl From<bool> for Match {
    fn from(required: bool) -> Self {
        Self::Present(required)
    }
}

impl From<Vec<String>> for Match {
    fn from(allowed: Vec<String>) -> Self {
        Self::OneOf(allowed)
    }
}

impl From<&[&str]> for Match {
    fn from(allowed: &[&str]) -> Self {
        Self::OneOf(allowed.iter().map(|s| (*s).to_string()).collect())
    }
}

/// Child filter; all supplied constraints are ANDed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildQuery {
    /// Constraint on the child tag
    pub tag: Match,
    /// Constraint on the child pointer
    pub pointer: Match,
    /// Constraint on the child value
    pub value: Match,
}

impl ChildQuery {
    /// Query constraining only the tag
    #[must_use]
    pub fn tag(tag: impl Into<Match>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Query constraining only the pointer
    #[must_use]
    pub fn pointer(pointer: impl Into<Match>) -> Self {
        Self {
            pointer: pointer.into(),
            ..Self::default()
        }
    }

    /// Add a pointer constraint
    #[must_use]
    pub fn with_pointer(mut self, pointer: impl Into<Match>) -> Self {
        self.pointer = pointer.into();
        self
    }

    /// Add a value constraint
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Match>) -> Self {
        self.value = value.into();
        self
    }

    fn matches(&self, element: &Element) -> bool {
        self.tag.accepts(&element.tag)
            && self.pointer.accepts(&element.pointer)
            && self.value.accepts(&element.value)
    }
}

impl Element {
    /// Create an element with no children
    #[must_use]
    pub fn new(
        level: u32,
        pointer: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            level,
            pointer: pointer.into(),
            tag: tag.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Append a child element
    pub fn add_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// The ordered child elements
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All children accepted by the query, in child order
    #[must_use]
    pub fn filter_children(&self, query: &ChildQuery) -> Vec<&Element> {
        self.children
            .iter()
            .filter(|child| query.matches(child))
            .collect()
    }

    /// First child accepted by the query, in child order
    #[must_use]
    pub fn find_first_child(&self, query: &ChildQuery) -> Option<&Element> {
        self.children.iter().find(|child| query.matches(child))
    }

    /// Value of the first child with the tag, or empty string
    #[must_use]
    pub fn get_value_of(&self, tag: &str) -> &str {
        self.find_first_child(&ChildQuery::tag(tag))
            .map_or("", |child| child.value.as_str())
    }

    /// Structural equality: level, pointer, tag and value must match and
    /// the children must be equal as a multiset (order-insensitive).
    #[must_use]
    pub fn structurally_equal(&self, other: &Element) -> bool {
        if self.level != other.level
            || self.pointer != other.pointer
            || self.tag != other.tag
            || self.value != other.value
        {
            return false;
        }
        multiset_equal(&self.children, &other.children)
    }
}

fn multiset_equal(left: &[Element], right: &[Element]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut unmatched: Vec<&Element> = right.iter().collect();
    for candidate in left {
        let Some(at) = unmatched
            .iter()
            .position(|other| candidate.structurally_equal(other))
        else {
            return false;
        };
        unmatched.swap_remove(at);
    }
    true
}

/// Container of the top-level records of one GEDCOM file
#[derive(Debug, Clone, Default)]
pub struct Document {
    records: Vec<Element>,
}

impl Document {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level record
    pub fn push(&mut self, record: Element) {
        self.records.push(record);
    }

    /// The top-level records in file order
    #[must_use]
    pub fn records(&self) -> &[Element] {
        &self.records
    }

    /// The individual (`INDI`) records in file order
    pub fn individuals(&self) -> impl Iterator<Item = &Element> {
        self.records.iter().filter(|record| record.tag == tags::INDI)
    }

    /// The family (`FAM`) records in file order
    pub fn families(&self) -> impl Iterator<Item = &Element> {
        self.records.iter().filter(|record| record.tag == tags::FAM)
    }

    /// Structural equality over the record multiset
    #[must_use]
    pub fn structurally_equal(&self, other: &Document) -> bool {
        multiset_equal(&self.records, &other.records)
    }
}
