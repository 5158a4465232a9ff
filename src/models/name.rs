//! Structured personal names
//!
//! A name is stored as five optional parts. Both the legal name and any
//! alternate names of a person share this shape.

use std::fmt;

use smallvec::SmallVec;

/// Structured parts of a personal name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    /// Title or prefix, e.g. `Dr.`
    pub prefix: String,
    /// First (given) name
    pub first: String,
    /// Middle name or names
    pub middle: String,
    /// Last name (surname)
    pub last: String,
    /// Suffix, e.g. `Jr.`
    pub suffix: String,
}

impl PersonName {
    /// Create a name from first and last parts
    #[must_use]
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            ..Self::default()
        }
    }

    /// All five parts in display order
    fn parts(&self) -> [&str; 5] {
        [
            &self.prefix,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ]
    }

    /// The non-empty parts joined by single spaces.
    ///
    /// A single present part is returned as-is without any joining.
    #[must_use]
    pub fn full_name(&self) -> String {
        let parts: SmallVec<[&str; 5]> = self
            .parts()
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        match parts.as_slice() {
            [only] => (*only).to_string(),
            parts => parts.join(" "),
        }
    }

    /// True when every part is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|part| part.is_empty())
    }
}

impl fmt::Display for PersonName {
    /// The short `first last` display form
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}
