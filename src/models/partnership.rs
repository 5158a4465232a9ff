//! Partnership entity model
//!
//! A partnership groups any number of partners and children and models
//! marriages, partnerships or any child-bearing relationship. Partner
//! order is insignificant; the GEDCOM generator picks HUSB/WIFE tags by
//! gender, not by position.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::models::types::{MaritalStatus, PartnershipId, PersonId};

/// A relationship record grouping partners and children
#[derive(Debug, Clone)]
pub struct Partnership {
    /// Identifier within the owning tree
    pub id: PartnershipId,
    /// Member persons, in recording order
    pub partners: Vec<PersonId>,
    /// Child persons, in recording order
    pub children: Vec<PersonId>,
    /// Marriage date, if a marriage was recorded
    pub marriage_date: Option<NaiveDate>,
    /// Divorce date, if a divorce was recorded
    pub divorce_date: Option<NaiveDate>,
    /// Marital-status classification
    pub marital_status: MaritalStatus,
    /// Free-text notes
    pub notes: String,
}

impl Partnership {
    /// Create an empty partnership
    #[must_use]
    pub fn new(id: PartnershipId) -> Self {
        Self {
            id,
            partners: Vec::new(),
            children: Vec::new(),
            marriage_date: None,
            divorce_date: None,
            marital_status: MaritalStatus::Partnered,
            notes: String::new(),
        }
    }

    /// Add a partner
    pub fn add_partner(&mut self, person: PersonId) {
        self.partners.push(person);
    }

    /// Add a child
    pub fn add_child(&mut self, person: PersonId) {
        self.children.push(person);
    }

    /// Set the marriage date and upgrade the status to married
    #[must_use]
    pub fn with_marriage(mut self, date: NaiveDate) -> Self {
        self.marriage_date = Some(date);
        self.marital_status = MaritalStatus::Married;
        self
    }

    /// Set the divorce date and upgrade the status to divorced
    #[must_use]
    pub fn with_divorce(mut self, date: NaiveDate) -> Self {
        self.divorce_date = Some(date);
        self.marital_status = MaritalStatus::Divorced;
        self
    }

    /// True when the person is recorded as a child of this partnership
    #[must_use]
    pub fn has_child(&self, person: PersonId) -> bool {
        self.children.contains(&person)
    }

    /// True when the person is a partner in this partnership
    #[must_use]
    pub fn has_partner(&self, person: PersonId) -> bool {
        self.partners.contains(&person)
    }

    /// Check the date invariant: a divorce must not precede the marriage
    pub fn validate(&self) -> Result<()> {
        if let (Some(marriage), Some(divorce)) = (self.marriage_date, self.divorce_date) {
            if divorce < marriage {
                return Err(Error::InvalidPartnershipDates { marriage, divorce });
            }
        }
        Ok(())
    }
}
