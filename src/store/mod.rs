//! In-memory entity store and relationship index
//!
//! This module provides the specialized store the codec and the layout
//! engine operate on: a `TreeData` owning one tree's persons,
//! partnerships and locations in insertion order, and a `TreeIndex` of
//! reverse relations (person to partnerships as partner, person to
//! partnerships as child) built once per operation. Every relationship
//! lookup goes through the index; there are no hidden query-time joins.

use itertools::Itertools;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::models::types::{LocationId, PartnershipId, PersonId};
use crate::models::{Location, Partnership, Person, Tree};

/// One tree's entities, insertion-ordered with id-keyed lookup
#[derive(Debug, Default)]
pub struct TreeData {
    /// The tree the entities belong to
    pub tree: Tree,
    persons: Vec<Person>,
    partnerships: Vec<Partnership>,
    locations: Vec<(LocationId, Location)>,
    person_slots: FxHashMap<PersonId, usize>,
    partnership_slots: FxHashMap<PartnershipId, usize>,
    next_person: u64,
    next_partnership: u64,
    next_location: u64,
}

impl TreeData {
    /// Create an empty store for a tree
    #[must_use]
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            ..Self::default()
        }
    }

    /// Allocate the next person id
    pub fn next_person_id(&mut self) -> PersonId {
        self.next_person += 1;
        PersonId(self.next_person)
    }

    /// Allocate the next partnership id
    pub fn next_partnership_id(&mut self) -> PartnershipId {
        self.next_partnership += 1;
        PartnershipId(self.next_partnership)
    }

    /// Insert a person under its own id
    pub fn insert_person(&mut self, person: Person) -> Result<PersonId> {
        let id = person.id;
        if self.person_slots.contains_key(&id) {
            return Err(Error::DuplicateEntity(format!("Person_{id}")));
        }
        self.person_slots.insert(id, self.persons.len());
        self.persons.push(person);
        Ok(id)
    }

    /// Insert a partnership under its own id
    pub fn insert_partnership(&mut self, partnership: Partnership) -> Result<PartnershipId> {
        let id = partnership.id;
        if self.partnership_slots.contains_key(&id) {
            return Err(Error::DuplicateEntity(format!("Partnership_{id}")));
        }
        self.partnership_slots.insert(id, self.partnerships.len());
        self.partnerships.push(partnership);
        Ok(id)
    }

    /// Resolve a structurally equal stored location or create one.
    ///
    /// Repeated identical (city, state, country) triples resolve to the
    /// same record rather than duplicating rows.
    pub fn find_or_create_location(&mut self, location: Location) -> LocationId {
        if let Some((id, _)) = self.locations.iter().find(|(_, known)| *known == location) {
            return *id;
        }
        self.next_location += 1;
        let id = LocationId(self.next_location);
        self.locations.push((id, location));
        id
    }

    /// Get a person by id
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.person_slots.get(&id).map(|slot| &self.persons[*slot])
    }

    /// Get a mutable person by id
    pub fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        let slot = *self.person_slots.get(&id)?;
        self.persons.get_mut(slot)
    }

    /// Get a partnership by id
    #[must_use]
    pub fn partnership(&self, id: PartnershipId) -> Option<&Partnership> {
        self.partnership_slots
            .get(&id)
            .map(|slot| &self.partnerships[*slot])
    }

    /// Get a mutable partnership by id
    pub fn partnership_mut(&mut self, id: PartnershipId) -> Option<&mut Partnership> {
        let slot = *self.partnership_slots.get(&id)?;
        self.partnerships.get_mut(slot)
    }

    /// Get a location by id
    #[must_use]
    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations
            .iter()
            .find(|(known, _)| *known == id)
            .map(|(_, location)| location)
    }

    /// All persons in insertion order
    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    /// All partnerships in insertion order
    pub fn partnerships(&self) -> impl Iterator<Item = &Partnership> {
        self.partnerships.iter()
    }

    /// All locations in insertion order
    pub fn locations(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations.iter().map(|(id, location)| (*id, location))
    }

    /// Number of stored persons
    #[must_use]
    pub fn person_count(&self) -> usize {
        self.persons.len()
    }

    /// Number of stored partnerships
    #[must_use]
    pub fn partnership_count(&self) -> usize {
        self.partnerships.len()
    }

    /// Number of stored locations
    #[must_use]
    pub fn location_count(&self) -> usize {
        self.locations.len()
    }

    /// Comma-separated partner display names, or `(empty)`
    #[must_use]
    pub fn partnership_label(&self, id: PartnershipId) -> String {
        let Some(partnership) = self.partnership(id) else {
            return "(empty)".to_string();
        };
        if partnership.partners.is_empty() {
            return "(empty)".to_string();
        }
        partnership
            .partners
            .iter()
            .filter_map(|partner| self.person(*partner))
            .map(Person::display_name)
            .join(", ")
    }
}

/// Reverse-relation maps over one `TreeData` snapshot.
///
/// Built once per operation and passed explicitly to whatever needs to
/// walk relationships; rebuilding after mutation is the caller's job.
#[derive(Debug, Default)]
pub struct TreeIndex {
    as_partner: FxHashMap<PersonId, Vec<PartnershipId>>,
    as_child: FxHashMap<PersonId, Vec<PartnershipId>>,
}

impl TreeIndex {
    /// Build the index from a store snapshot
    #[must_use]
    pub fn build(data: &TreeData) -> Self {
        let mut index = Self::default();
        for partnership in data.partnerships() {
            for partner in &partnership.partners {
                index
                    .as_partner
                    .entry(*partner)
                    .or_default()
                    .push(partnership.id);
            }
            for child in &partnership.children {
                index
                    .as_child
                    .entry(*child)
                    .or_default()
                    .push(partnership.id);
            }
        }
        index
    }

    /// Partnerships the person is a partner in, in partnership order
    #[must_use]
    pub fn partnerships_of(&self, person: PersonId) -> &[PartnershipId] {
        self.as_partner.get(&person).map_or(&[], Vec::as_slice)
    }

    /// Partnerships the person is a child of, in partnership order
    #[must_use]
    pub fn parent_partnerships_of(&self, person: PersonId) -> &[PartnershipId] {
        self.as_child.get(&person).map_or(&[], Vec::as_slice)
    }
}

/// Partnerships `generations` levels above the person.
///
/// Generation 1 is the person's parental partnerships; generation 2 is
/// the parental partnerships of the partners in generation 1, and so on.
pub fn ancestors(
    data: &TreeData,
    index: &TreeIndex,
    person: PersonId,
    generations: u32,
) -> Result<Vec<PartnershipId>> {
    if data.person(person).is_none() {
        return Err(Error::UnknownPerson(person));
    }
    let mut current: Vec<PartnershipId> = index.parent_partnerships_of(person).to_vec();
    for _ in 1..generations {
        let mut next = Vec::new();
        for partnership_id in &current {
            let Some(partnership) = data.partnership(*partnership_id) else {
                continue;
            };
            for partner in &partnership.partners {
                for above in index.parent_partnerships_of(*partner) {
                    if !next.contains(above) {
                        next.push(*above);
                    }
                }
            }
        }
        current = next;
    }
    Ok(current)
}

/// Persons `generations` levels below the person.
///
/// Generation 1 is the children of the person's partnerships;
/// generation 2 is the children of those children's partnerships, and
/// so on.
pub fn descendants(
    data: &TreeData,
    index: &TreeIndex,
    person: PersonId,
    generations: u32,
) -> Result<Vec<PersonId>> {
    if data.person(person).is_none() {
        return Err(Error::UnknownPerson(person));
    }
    let mut current = vec![person];
    for _ in 0..generations {
        let mut next = Vec::new();
        for member in &current {
            for partnership_id in index.partnerships_of(*member) {
                let Some(partnership) = data.partnership(*partnership_id) else {
                    continue;
                };
                for child in &partnership.children {
                    if !next.contains(child) {
                        next.push(*child);
                    }
                }
            }
        }
        current = next;
    }
    Ok(current)
}

/// The person's parental partnerships (generation 1 up)
pub fn parents(
    data: &TreeData,
    index: &TreeIndex,
    person: PersonId,
) -> Result<Vec<PartnershipId>> {
    ancestors(data, index, person, 1)
}

/// Children of the person's parental partnerships, excluding the person
pub fn siblings(data: &TreeData, index: &TreeIndex, person: PersonId) -> Result<Vec<PersonId>> {
    if data.person(person).is_none() {
        return Err(Error::UnknownPerson(person));
    }
    let mut found = Vec::new();
    for partnership_id in index.parent_partnerships_of(person) {
        let Some(partnership) = data.partnership(*partnership_id) else {
            continue;
        };
        for child in &partnership.children {
            if *child != person && !found.contains(child) {
                found.push(*child);
            }
        }
    }
    Ok(found)
}
