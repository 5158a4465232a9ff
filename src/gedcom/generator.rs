//! GEDCOM generation
//!
//! Walks one tree's entities and emits a [`Document`]: a header (plus a
//! submitter record when the tree has a creator), one individual record
//! per person and one family record per partnership, cross-referenced
//! with `@PERSON_<id>@` / `@PARTNERSHIP_<id>@` pointers. Entities are
//! only read; all construction happens on the element tree.

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::gedcom::dates::format_date;
use crate::gedcom::element::{Document, Element};
use crate::gedcom::tags;
use crate::models::types::{Gender, PartnershipId, PersonId};
use crate::models::{Location, Partnership, Person};
use crate::store::{TreeData, TreeIndex};

/// Pointer of a person record
#[must_use]
pub fn person_pointer(id: PersonId) -> String {
    format!("@PERSON_{id}@")
}

/// Pointer of a partnership record
#[must_use]
pub fn partnership_pointer(id: PartnershipId) -> String {
    format!("@PARTNERSHIP_{id}@")
}

/// Generate the whole document for a tree
pub fn generate(data: &TreeData, index: &TreeIndex) -> Result<Document> {
    let mut document = Document::new();
    let (head, submitter) = gen_header_and_submitter(data);
    document.push(head);
    if let Some(submitter) = submitter {
        document.push(submitter);
    }
    for person in data.persons() {
        document.push(gen_individual(data, index, person));
    }
    for partnership in data.partnerships() {
        document.push(gen_family(data, partnership)?);
    }
    Ok(document)
}

/// Header with charset and GEDCOM metadata; submitter when the tree has
/// a creator
fn gen_header_and_submitter(data: &TreeData) -> (Element, Option<Element>) {
    let mut head = Element::new(0, "", tags::HEAD, "");
    head.add_child(Element::new(1, "", tags::CHAR, tags::CHARSET_UTF8));

    let mut gedcom = Element::new(1, "", tags::GEDC, "");
    gedcom.add_child(Element::new(2, "", tags::VERS, tags::GEDCOM_VERSION));
    gedcom.add_child(Element::new(2, "", tags::FORM, tags::GEDCOM_FORM));
    head.add_child(gedcom);

    match &data.tree.creator {
        Some(creator) => {
            head.add_child(Element::new(1, "", tags::SUBM, tags::SUBMITTER_POINTER));
            let mut submitter = Element::new(0, tags::SUBMITTER_POINTER, tags::SUBM, "");
            submitter.add_child(Element::new(1, "", tags::NAME, creator.clone()));
            (head, Some(submitter))
        }
        None => (head, None),
    }
}

/// Event block with optional DATE and PLAC sub-records
fn gen_event(
    level: u32,
    tag: &str,
    date: Option<NaiveDate>,
    location: Option<&Location>,
) -> Element {
    let mut event = Element::new(level, "", tag, "");
    if let Some(date) = date {
        event.add_child(Element::new(level + 1, "", tags::DATE, format_date(date)));
    }
    if let Some(location) = location {
        event.add_child(Element::new(
            level + 1,
            "",
            tags::PLAC,
            location.to_string(),
        ));
    }
    event
}

/// Individual record for one person
fn gen_individual(data: &TreeData, index: &TreeIndex, person: &Person) -> Element {
    let mut individual = Element::new(0, person_pointer(person.id), tags::INDI, "");

    let legal_name = &person.legal_name;
    individual.add_child(Element::new(1, "", tags::NAME, legal_name.full_name()));
    if !legal_name.prefix.is_empty() {
        individual.add_child(Element::new(1, "", tags::NPFX, legal_name.prefix.clone()));
    }
    individual.add_child(Element::new(1, "", tags::GIVN, legal_name.first.clone()));
    if !legal_name.last.is_empty() {
        individual.add_child(Element::new(1, "", tags::SURN, legal_name.last.clone()));
    }
    if !legal_name.suffix.is_empty() {
        individual.add_child(Element::new(1, "", tags::NSFX, legal_name.suffix.clone()));
    }

    for name in &person.alternate_names {
        individual.add_child(Element::new(1, "", tags::NAME, name.full_name()));
    }

    individual.add_child(Element::new(
        1,
        "",
        tags::SEX,
        person.gender.gedcom_shorthand(),
    ));

    if person.birth_date.is_some() || person.birth_location.is_some() {
        let location = person.birth_location.and_then(|id| data.location(id));
        individual.add_child(gen_event(1, tags::BIRT, person.birth_date, location));
    }
    if person.death_date.is_some() || person.death_location.is_some() {
        let location = person.death_location.and_then(|id| data.location(id));
        individual.add_child(gen_event(1, tags::DEAT, person.death_date, location));
    }

    for partnership in index.partnerships_of(person.id) {
        individual.add_child(Element::new(
            1,
            "",
            tags::FAMS,
            partnership_pointer(*partnership),
        ));
    }
    for partnership in index.parent_partnerships_of(person.id) {
        individual.add_child(Element::new(
            1,
            "",
            tags::FAMC,
            partnership_pointer(*partnership),
        ));
    }

    individual
}

/// Family record for one partnership.
///
/// Partners are tagged HUSB or WIFE by gender; GEDCOM 5.5 has no tag
/// for any other gender, so those fail the generation call.
fn gen_family(data: &TreeData, partnership: &Partnership) -> Result<Element> {
    let mut family = Element::new(0, partnership_pointer(partnership.id), tags::FAM, "");

    for partner_id in &partnership.partners {
        let Some(partner) = data.person(*partner_id) else {
            return Err(Error::UnknownPerson(*partner_id));
        };
        let tag = match partner.gender {
            Gender::Male => tags::HUSB,
            Gender::Female => tags::WIFE,
            other => {
                return Err(Error::UnsupportedPartnerGender {
                    person: partner.display_name(),
                    gender: other.to_string(),
                });
            }
        };
        family.add_child(Element::new(1, "", tag, person_pointer(*partner_id)));
    }

    for child in &partnership.children {
        family.add_child(Element::new(1, "", tags::CHIL, person_pointer(*child)));
    }

    if partnership.marriage_date.is_some() {
        family.add_child(gen_event(1, tags::MARR, partnership.marriage_date, None));
    }
    if partnership.divorce_date.is_some() {
        family.add_child(gen_event(1, tags::DIV, partnership.divorce_date, None));
    }

    Ok(family)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gedcom::element::ChildQuery;
    use crate::models::types::Gender;
    use crate::models::{PersonName, Tree};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn add_person(data: &mut TreeData, name: PersonName, gender: Gender) -> PersonId {
        let id = data.next_person_id();
        data.insert_person(Person::new(id, name, gender)).unwrap()
    }

    #[test]
    fn test_minimal_person_record() {
        let mut data = TreeData::new(Tree::new("test tree"));
        add_person(&mut data, PersonName::new("Henry", "Ford"), Gender::Male);
        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        let individual = document.individuals().next().unwrap();
        assert_eq!(individual.pointer, "@PERSON_1@");
        let tags_present: Vec<&str> = individual
            .children()
            .iter()
            .map(|child| child.tag.as_str())
            .collect();
        assert_eq!(tags_present, vec![
            tags::NAME,
            tags::GIVN,
            tags::SURN,
            tags::SEX
        ]);
        assert_eq!(individual.get_value_of(tags::NAME), "Henry Ford");
        assert_eq!(individual.get_value_of(tags::SEX), "M");
    }

    #[test]
    fn test_surname_omitted_when_empty() {
        let mut data = TreeData::new(Tree::new("test tree"));
        add_person(&mut data, PersonName::new("Cher", ""), Gender::Female);
        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        let individual = document.individuals().next().unwrap();
        assert!(
            individual
                .find_first_child(&ChildQuery::tag(tags::SURN))
                .is_none()
        );
    }

    #[test]
    fn test_header_without_creator_has_no_submitter() {
        let data = TreeData::new(Tree::new("test tree"));
        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        assert_eq!(document.records().len(), 1);
        let head = &document.records()[0];
        assert_eq!(head.tag, tags::HEAD);
        assert_eq!(head.get_value_of(tags::CHAR), tags::CHARSET_UTF8);
        let gedcom = head.find_first_child(&ChildQuery::tag(tags::GEDC)).unwrap();
        assert_eq!(gedcom.get_value_of(tags::VERS), "5.5");
        assert_eq!(gedcom.get_value_of(tags::FORM), "Lineage-Linked");
    }

    #[test]
    fn test_header_with_creator_references_submitter() {
        let data = TreeData::new(Tree::new("test tree").with_creator("ada"));
        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        let head = &document.records()[0];
        assert_eq!(head.get_value_of(tags::SUBM), tags::SUBMITTER_POINTER);
        let submitter = &document.records()[1];
        assert_eq!(submitter.pointer, tags::SUBMITTER_POINTER);
        assert_eq!(submitter.get_value_of(tags::NAME), "ada");
    }

    #[test]
    fn test_birth_event_with_date_and_place() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let location = data.find_or_create_location(Location::new("city", "state", "US"));
        let id = add_person(&mut data, PersonName::new("Some", "Guy"), Gender::Male);
        {
            let person = data.person_mut(id).unwrap();
            person.birth_date = Some(date(1899, 1, 1));
            person.birth_location = Some(location);
        }
        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        let individual = document.individuals().next().unwrap();
        let birth = individual
            .find_first_child(&ChildQuery::tag(tags::BIRT))
            .unwrap();
        assert_eq!(birth.get_value_of(tags::DATE), "01 JAN 1899");
        assert_eq!(birth.get_value_of(tags::PLAC), "city, state, US");
        assert!(
            individual
                .find_first_child(&ChildQuery::tag(tags::DEAT))
                .is_none()
        );
    }

    #[test]
    fn test_family_record_tags_partners_by_gender() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let husband = add_person(&mut data, PersonName::new("Abe", "Ford"), Gender::Male);
        let wife = add_person(&mut data, PersonName::new("Beth", "Ford"), Gender::Female);
        let child = add_person(&mut data, PersonName::new("Dave", "Ford"), Gender::Male);
        let partnership_id = data.next_partnership_id();
        let mut partnership =
            Partnership::new(partnership_id).with_marriage(date(1950, 6, 1));
        partnership.add_partner(husband);
        partnership.add_partner(wife);
        partnership.add_child(child);
        data.insert_partnership(partnership).unwrap();

        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        let family = document.families().next().unwrap();
        assert_eq!(family.pointer, "@PARTNERSHIP_1@");
        assert_eq!(family.get_value_of(tags::HUSB), "@PERSON_1@");
        assert_eq!(family.get_value_of(tags::WIFE), "@PERSON_2@");
        assert_eq!(family.get_value_of(tags::CHIL), "@PERSON_3@");
        let marriage = family.find_first_child(&ChildQuery::tag(tags::MARR)).unwrap();
        assert_eq!(marriage.get_value_of(tags::DATE), "01 JUN 1950");
        assert!(family.find_first_child(&ChildQuery::tag(tags::DIV)).is_none());

        // spouses carry FAMS, the child carries FAMC
        let records: Vec<&Element> = document.individuals().collect();
        assert_eq!(records[0].get_value_of(tags::FAMS), "@PARTNERSHIP_1@");
        assert_eq!(records[2].get_value_of(tags::FAMC), "@PARTNERSHIP_1@");
    }

    #[test]
    fn test_partner_without_family_tag_fails() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let partner = add_person(&mut data, PersonName::new("Sam", "Doe"), Gender::Other);
        let partnership_id = data.next_partnership_id();
        let mut partnership = Partnership::new(partnership_id);
        partnership.add_partner(partner);
        data.insert_partnership(partnership).unwrap();

        let index = TreeIndex::build(&data);
        assert!(matches!(
            generate(&data, &index),
            Err(Error::UnsupportedPartnerGender { .. })
        ));
    }

    #[test]
    fn test_alternate_names_become_extra_name_records() {
        let mut data = TreeData::new(Tree::new("test tree"));
        let id = add_person(&mut data, PersonName::new("Tri Minh", "Doung"), Gender::Male);
        data.person_mut(id)
            .unwrap()
            .alternate_names
            .push(PersonName::new("Minh", "Doung"));
        let index = TreeIndex::build(&data);
        let document = generate(&data, &index).unwrap();

        let individual = document.individuals().next().unwrap();
        let names = individual.filter_children(&ChildQuery::tag(tags::NAME));
        assert_eq!(names.len(), 2);
        assert_eq!(names[0].value, "Tri Minh Doung");
        assert_eq!(names[1].value, "Minh Doung");
    }
}
