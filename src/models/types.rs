//! Common domain type definitions
//!
//! This module contains the entity id newtypes and the enum types used
//! across domain models, together with their string round-tripping.

use std::fmt;

/// Identifier of a person within one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(pub u64);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a partnership within one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartnershipId(pub u64);

impl fmt::Display for PartnershipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a location within one tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub u64);

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Gender of a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Male gender
    Male,
    /// Female gender
    Female,
    /// Intersex
    Intersex,
    /// Other gender
    Other,
    /// Unknown or not specified
    #[default]
    Unknown,
}

impl Gender {
    /// Decode the single-letter GEDCOM SEX value.
    ///
    /// `I` and `O` are non-standard extensions beyond GEDCOM 5.5 and are
    /// tolerated; anything unrecognized decodes to unknown.
    #[must_use]
    pub fn from_gedcom(letter: &str) -> Self {
        match letter.trim() {
            "M" => Self::Male,
            "F" => Self::Female,
            "I" => Self::Intersex,
            "O" => Self::Other,
            _ => Self::Unknown,
        }
    }

    /// Single-letter GEDCOM shorthand; genders outside male/female map to `U`
    #[must_use]
    pub fn gedcom_shorthand(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            _ => "U",
        }
    }

    /// Display name of the gender
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Intersex => "Intersex",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&str> for Gender {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            "i" | "intersex" => Self::Intersex,
            "o" | "other" => Self::Other,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Living status of a person
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Living {
    /// Known to be alive
    Alive,
    /// Known to be dead
    Dead,
    /// Unknown status
    #[default]
    Unknown,
}

impl Living {
    /// Display name of the status
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&str> for Living {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "alive" => Self::Alive,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Living {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Marital-status classification of a partnership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaritalStatus {
    /// A marriage was recorded
    Married,
    /// Partnered without a recorded marriage
    Partnered,
    /// Legally separated
    Separated,
    /// A partner died while the partnership was in effect
    Widowed,
    /// A divorce was recorded
    Divorced,
    /// Single
    Single,
}

impl MaritalStatus {
    /// Display name of the status
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Married => "Married",
            Self::Partnered => "Partnered",
            Self::Separated => "Separated",
            Self::Widowed => "Widowed",
            Self::Divorced => "Divorced",
            Self::Single => "Single",
        }
    }
}

impl From<&str> for MaritalStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "married" => Self::Married,
            "separated" | "legally separated" => Self::Separated,
            "widowed" => Self::Widowed,
            "divorced" => Self::Divorced,
            "single" => Self::Single,
            _ => Self::Partnered,
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
