//! Person entity model
//!
//! This module contains the Person record: a legal name, any number of
//! alternate names, the vital dates and places, living status and
//! gender. Partnership membership is stored on the partnership side and
//! reached through the tree index.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};
use crate::models::name::PersonName;
use crate::models::types::{Gender, Living, LocationId, PersonId};

/// A person in a family tree
#[derive(Debug, Clone)]
pub struct Person {
    /// Identifier within the owning tree
    pub id: PersonId,
    /// Legal name
    pub legal_name: PersonName,
    /// Preferred free-text name, if different from the legal name
    pub preferred_name: String,
    /// Alternate names, in recording order
    pub alternate_names: Vec<PersonName>,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Birth location
    pub birth_location: Option<LocationId>,
    /// Death date, if applicable
    pub death_date: Option<NaiveDate>,
    /// Death location
    pub death_location: Option<LocationId>,
    /// Living status
    pub living: Living,
    /// Gender
    pub gender: Gender,
    /// Free-text notes
    pub notes: String,
}

/// Elapsed calendar time between two dates, in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeSpan {
    /// Whole years
    pub years: i32,
    /// Whole months past the last full year
    pub months: i32,
    /// Days past the last full month
    pub days: i32,
}

impl Person {
    /// Create a person with minimal required information
    #[must_use]
    pub fn new(id: PersonId, legal_name: PersonName, gender: Gender) -> Self {
        Self {
            id,
            legal_name,
            preferred_name: String::new(),
            alternate_names: Vec::new(),
            birth_date: None,
            birth_location: None,
            death_date: None,
            death_location: None,
            living: Living::Unknown,
            gender,
            notes: String::new(),
        }
    }

    /// Set the birth date
    #[must_use]
    pub fn with_birth_date(mut self, date: NaiveDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    /// Set the death date
    #[must_use]
    pub fn with_death_date(mut self, date: NaiveDate) -> Self {
        self.death_date = Some(date);
        self
    }

    /// Set the living status
    #[must_use]
    pub fn with_living(mut self, living: Living) -> Self {
        self.living = living;
        self
    }

    /// The short `first last` display form of the legal name
    #[must_use]
    pub fn display_name(&self) -> String {
        self.legal_name.to_string()
    }

    /// Check the date invariant: birth must not be after death
    pub fn validate(&self) -> Result<()> {
        if let (Some(birth), Some(death)) = (self.birth_date, self.death_date) {
            if birth > death {
                return Err(Error::InvalidDateRange { birth, death });
            }
        }
        Ok(())
    }

    /// Age on the given reference date.
    ///
    /// A dead person's age runs from birth to death; anyone else's runs
    /// from birth to the reference date. Fails when the birth date is
    /// missing, or when a dead person has no death date.
    pub fn age_on(&self, reference: NaiveDate) -> Result<AgeSpan> {
        let Some(birth) = self.birth_date else {
            return Err(Error::IllegalAge(self.display_name()));
        };
        let until = match self.living {
            Living::Dead => match self.death_date {
                Some(death) => death,
                None => return Err(Error::IllegalAge(self.display_name())),
            },
            _ => reference,
        };
        Ok(age_between(birth, until))
    }
}

/// Whole-unit calendar delta from `start` to `end`.
///
/// Month arithmetic clamps to month ends, so Jan 31 plus one month is
/// Feb 28/29 and the day remainder counts from there.
fn age_between(start: NaiveDate, end: NaiveDate) -> AgeSpan {
    let mut months = (end.year() - start.year()) * 12 + end.month0() as i32
        - start.month0() as i32;
    if add_months(start, months) > end {
        months -= 1;
    }
    let months = months.max(0);
    let anchor = add_months(start, months);
    let days = i32::try_from((end - anchor).num_days()).unwrap_or(0).max(0);
    AgeSpan {
        years: months / 12,
        months: months % 12,
        days,
    }
}

fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let months = u32::try_from(months.max(0)).unwrap_or(0);
    date.checked_add_months(chrono::Months::new(months))
        .unwrap_or(date)
}
