//! Location records
//!
//! A location is a (city, state, country) triple with structural
//! equality: importing the same triple twice reuses one stored record
//! instead of duplicating it.

use std::fmt;

/// A place where an event happened
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    /// City, town or village
    pub city: String,
    /// State, province or region
    pub state: String,
    /// ISO-3166-1 alpha-2 country code, empty when unknown
    pub country: String,
}

impl Location {
    /// Create a location from its three parts
    #[must_use]
    pub fn new(
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            city: city.into(),
            state: state.into(),
            country: country.into(),
        }
    }

    /// True when every part is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty() && self.country.is_empty()
    }
}

impl fmt::Display for Location {
    /// The GEDCOM PLAC form `city, state, country`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.city, self.state, self.country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_comma_separated() {
        let location = Location::new("Copenhagen", "Hovedstaden", "DK");
        assert_eq!(location.to_string(), "Copenhagen, Hovedstaden, DK");
    }

    #[test]
    fn test_display_keeps_empty_slots() {
        let location = Location::new("Copenhagen", "", "");
        assert_eq!(location.to_string(), "Copenhagen, , ");
    }

    #[test]
    fn test_structural_equality() {
        let a = Location::new("city", "state", "US");
        let b = Location::new("city", "state", "US");
        assert_eq!(a, b);
        assert_ne!(a, Location::new("city", "state", "CA"));
    }
}
