//! Tree records
//!
//! A tree is the aggregate every person, partnership and location
//! belongs to. The creator feeds the GEDCOM submitter record on export.

/// One family tree
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// Title of the tree
    pub title: String,
    /// Display name of the creator, if any
    pub creator: Option<String>,
    /// Free-text notes
    pub notes: String,
}

impl Tree {
    /// Create a tree with a title and no creator
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the creator display name
    #[must_use]
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }
}
