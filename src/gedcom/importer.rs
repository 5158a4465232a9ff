//! GEDCOM import
//!
//! The inverse of the generator: walks a parsed [`Document`] and
//! produces entity records ready for persistence. Individuals are
//! parsed first so families can resolve their pointers; a family whose
//! pointer does not resolve is skipped and reported, and the rest of
//! the file still imports. This two-phase order is a correctness
//! requirement, not an optimization.

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::gedcom::dates::parse_date;
use crate::gedcom::element::{ChildQuery, Document, Element, Match};
use crate::gedcom::tags;
use crate::models::country::resolve_country;
use crate::models::types::{Gender, LocationId, MaritalStatus, PersonId};
use crate::models::{Location, Partnership, Person, PersonName, Tree};
use crate::names::parse_name;
use crate::store::TreeData;

/// One family record skipped over an unresolvable pointer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFamily {
    /// Pointer of the skipped family record
    pub family: String,
    /// The individual pointer that did not resolve
    pub pointer: String,
}

/// One date field left empty over an unsupported format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateProblem {
    /// Pointer of the record carrying the date
    pub record: String,
    /// Event tag the date belonged to
    pub tag: String,
    /// The raw date value
    pub value: String,
}

/// Per-record diagnostics of a partial-success import
#[derive(Debug, Default)]
pub struct ImportReport {
    /// Families skipped over unresolvable pointers
    pub skipped_families: Vec<SkippedFamily>,
    /// Date fields left empty over unsupported formats
    pub date_problems: Vec<DateProblem>,
}

impl ImportReport {
    /// True when every record imported without problems
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped_families.is_empty() && self.date_problems.is_empty()
    }
}

/// Result of importing one document
#[derive(Debug)]
pub struct ImportOutcome {
    /// The imported entities
    pub data: TreeData,
    /// What was skipped or softened along the way
    pub report: ImportReport,
}

/// Import a document into a fresh entity store.
///
/// Individuals are parsed before any family so that the pointer map is
/// complete when families resolve their HUSB/WIFE/CHIL references.
/// Header, submitter and trailer records are ignored.
pub fn import_document(document: &Document, tree: Tree) -> Result<ImportOutcome> {
    let mut data = TreeData::new(tree);
    let mut report = ImportReport::default();

    let mut pointers: FxHashMap<String, PersonId> = FxHashMap::default();
    for element in document.individuals() {
        let id = parse_individual(element, &mut data, &mut report)?;
        if !element.pointer.is_empty() {
            pointers.insert(element.pointer.clone(), id);
        }
    }

    for element in document.families() {
        match parse_family(element, &pointers, &mut data, &mut report) {
            Ok(()) => {}
            Err(Error::UnresolvedPointer { family, pointer }) => {
                log::warn!("skipping family {family}: unresolved pointer {pointer}");
                report.skipped_families.push(SkippedFamily { family, pointer });
            }
            Err(other) => return Err(other),
        }
    }

    log::debug!(
        "imported {} persons, {} partnerships ({} skipped)",
        data.person_count(),
        data.partnership_count(),
        report.skipped_families.len()
    );
    Ok(ImportOutcome { data, report })
}

/// Parse one individual record into a person
fn parse_individual(
    element: &Element,
    data: &mut TreeData,
    report: &mut ImportReport,
) -> Result<PersonId> {
    // all NAME records in order; the first is the legal name
    let mut names: Vec<PersonName> = element
        .filter_children(&ChildQuery::tag(tags::NAME))
        .iter()
        .map(|name| parse_name(&name.value).to_person_name())
        .collect();
    let legal_name = if names.is_empty() {
        name_from_discrete_tags(element)
    } else {
        names.remove(0)
    };

    let gender = Gender::from_gedcom(element.get_value_of(tags::SEX));
    let id = data.next_person_id();
    let mut person = Person::new(id, legal_name, gender);
    person.alternate_names = names;

    if let Some(birth) = element.find_first_child(&ChildQuery::tag(tags::BIRT)) {
        person.birth_date = parse_event_date(birth, &element.pointer, report);
        person.birth_location = parse_event_location(birth, data);
    }
    if let Some(death) = element.find_first_child(&ChildQuery::tag(tags::DEAT)) {
        person.death_date = parse_event_date(death, &element.pointer, report);
        person.death_location = parse_event_location(death, data);
    }

    data.insert_person(person)
}

/// Reconstruct a name from NPFX/GIVN/SURN/NSFX when no NAME record exists
fn name_from_discrete_tags(element: &Element) -> PersonName {
    PersonName {
        prefix: element.get_value_of(tags::NPFX).to_string(),
        first: element.get_value_of(tags::GIVN).to_string(),
        middle: String::new(),
        last: element.get_value_of(tags::SURN).to_string(),
        suffix: element.get_value_of(tags::NSFX).to_string(),
    }
}

/// Date of an event, if present and parseable.
///
/// Unsupported formats soften to an empty field recorded in the report.
fn parse_event_date(
    event: &Element,
    record_pointer: &str,
    report: &mut ImportReport,
) -> Option<NaiveDate> {
    let value = event.get_value_of(tags::DATE);
    if value.is_empty() {
        return None;
    }
    match parse_date(value) {
        Ok(date) => Some(date),
        Err(_) => {
            log::warn!(
                "leaving {} date {value:?} empty on {record_pointer}",
                event.tag
            );
            report.date_problems.push(DateProblem {
                record: record_pointer.to_string(),
                tag: event.tag.clone(),
                value: value.to_string(),
            });
            None
        }
    }
}

/// Location of an event, if a place is present.
///
/// Identical (city, state, country) triples resolve to one stored row.
fn parse_event_location(event: &Element, data: &mut TreeData) -> Option<LocationId> {
    let value = event.get_value_of(tags::PLAC);
    if value.is_empty() {
        return None;
    }
    Some(data.find_or_create_location(parse_place(value)))
}

/// Split a free-text place on its first two commas.
///
/// The third slot is resolved against the ISO-3166 table; an
/// unrecognized country token leaves the country empty.
fn parse_place(value: &str) -> Location {
    let mut slots = value.splitn(3, ',').map(str::trim);
    let city = slots.next().unwrap_or("");
    let state = slots.next().unwrap_or("");
    let country_token = slots.next().unwrap_or("");
    let country = resolve_country(country_token).map_or("", |country| country.code);
    Location::new(city, state, country)
}

/// Parse one family record into a partnership.
///
/// Fails with [`Error::UnresolvedPointer`] when any HUSB/WIFE/CHIL
/// pointer names an individual not present in the file; the caller
/// skips that one record.
fn parse_family(
    element: &Element,
    pointers: &FxHashMap<String, PersonId>,
    data: &mut TreeData,
    report: &mut ImportReport,
) -> Result<()> {
    let resolve = |pointer: &str| -> Result<PersonId> {
        pointers
            .get(pointer)
            .copied()
            .ok_or_else(|| Error::UnresolvedPointer {
                family: element.pointer.clone(),
                pointer: pointer.to_string(),
            })
    };

    let partner_query = ChildQuery::tag(Match::from(&[tags::HUSB, tags::WIFE][..]));
    let mut partners = Vec::new();
    for partner in element.filter_children(&partner_query) {
        partners.push(resolve(&partner.value)?);
    }
    let mut children = Vec::new();
    for child in element.filter_children(&ChildQuery::tag(tags::CHIL)) {
        children.push(resolve(&child.value)?);
    }

    let id = data.next_partnership_id();
    let mut partnership = Partnership::new(id);
    partnership.partners = partners;
    partnership.children = children;

    // status defaults to partnered; a marriage upgrades it and a
    // divorce wins over marriage-only
    if let Some(marriage) = element.find_first_child(&ChildQuery::tag(tags::MARR)) {
        partnership.marriage_date = parse_event_date(marriage, &element.pointer, report);
        partnership.marital_status = MaritalStatus::Married;
    }
    if let Some(divorce) = element.find_first_child(&ChildQuery::tag(tags::DIV)) {
        partnership.divorce_date = parse_event_date(divorce, &element.pointer, report);
        partnership.marital_status = MaritalStatus::Divorced;
    }

    data.insert_partnership(partnership)?;
    Ok(())
}
