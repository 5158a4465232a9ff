//! Whole-file GEDCOM round trips: entities -> document -> text ->
//! document -> entities.

use anyhow::Result;
use chrono::NaiveDate;
use kintree::{
    Gender, ImportOutcome, Living, MaritalStatus, Partnership, Person, PersonName, Tree,
    TreeData, TreeIndex, generate, import_document, parse_document, write_document,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Three generations with dates, places, an alternate name and a
/// divorce, exported and re-imported.
fn create_test_tree() -> TreeData {
    let mut data = TreeData::new(Tree::new("round trip").with_creator("tester"));

    let location = data.find_or_create_location(kintree::Location::new("city", "state", "US"));

    let abe_id = data.next_person_id();
    let mut abe = Person::new(abe_id, PersonName::new("Abe", "Ford"), Gender::Male)
        .with_birth_date(date(1899, 1, 1))
        .with_death_date(date(1990, 12, 31))
        .with_living(Living::Dead);
    abe.birth_location = Some(location);
    abe.death_location = Some(location);
    data.insert_person(abe).unwrap();

    let beth_id = data.next_person_id();
    let mut beth = Person::new(
        beth_id,
        PersonName {
            prefix: String::new(),
            first: "Beth".to_string(),
            middle: "Ann".to_string(),
            last: "Ford".to_string(),
            suffix: String::new(),
        },
        Gender::Female,
    );
    beth.alternate_names.push(PersonName::new("Betty", "Ford"));
    data.insert_person(beth).unwrap();

    let dave_id = data.next_person_id();
    let dave = Person::new(dave_id, PersonName::new("Dave", "Ford"), Gender::Male)
        .with_birth_date(date(1925, 6, 9));
    data.insert_person(dave).unwrap();

    let jeanine_id = data.next_person_id();
    data.insert_person(Person::new(
        jeanine_id,
        PersonName::new("Jeanine", "Smith"),
        Gender::Female,
    ))
    .unwrap();

    let marriage_id = data.next_partnership_id();
    let mut marriage = Partnership::new(marriage_id).with_marriage(date(1920, 6, 1));
    marriage.add_partner(abe_id);
    marriage.add_partner(beth_id);
    marriage.add_child(dave_id);
    data.insert_partnership(marriage).unwrap();

    let divorce_id = data.next_partnership_id();
    let mut divorced = Partnership::new(divorce_id)
        .with_marriage(date(1950, 1, 1))
        .with_divorce(date(1960, 1, 1));
    divorced.add_partner(dave_id);
    divorced.add_partner(jeanine_id);
    data.insert_partnership(divorced).unwrap();

    data
}

fn round_trip(data: &TreeData) -> Result<ImportOutcome> {
    let index = TreeIndex::build(data);
    let document = generate(data, &index)?;
    let text = write_document(&document);
    let reparsed = parse_document(&text)?;
    Ok(import_document(&reparsed, Tree::new("round trip"))?)
}

#[test]
fn test_round_trip_preserves_people() -> Result<()> {
    init_logging();
    let original = create_test_tree();
    let outcome = round_trip(&original)?;
    assert!(outcome.report.is_clean());

    let imported = &outcome.data;
    assert_eq!(imported.person_count(), original.person_count());

    for (before, after) in original.persons().zip(imported.persons()) {
        assert_eq!(before.legal_name.first, after.legal_name.first);
        assert_eq!(before.legal_name.middle, after.legal_name.middle);
        assert_eq!(before.legal_name.last, after.legal_name.last);
        assert_eq!(before.gender, after.gender);
        assert_eq!(before.birth_date, after.birth_date);
        assert_eq!(before.death_date, after.death_date);
        assert_eq!(before.alternate_names.len(), after.alternate_names.len());
    }
    Ok(())
}

#[test]
fn test_round_trip_preserves_partnerships() -> Result<()> {
    init_logging();
    let original = create_test_tree();
    let outcome = round_trip(&original)?;

    let imported = &outcome.data;
    assert_eq!(imported.partnership_count(), original.partnership_count());

    for (before, after) in original.partnerships().zip(imported.partnerships()) {
        assert_eq!(before.partners.len(), after.partners.len());
        assert_eq!(before.children.len(), after.children.len());
        assert_eq!(before.marriage_date, after.marriage_date);
        assert_eq!(before.divorce_date, after.divorce_date);
        assert_eq!(before.marital_status, after.marital_status);
    }

    // membership survives by name, not just by count
    let index = TreeIndex::build(imported);
    let dave = imported
        .persons()
        .find(|person| person.legal_name.first == "Dave")
        .unwrap();
    assert_eq!(index.partnerships_of(dave.id).len(), 1);
    assert_eq!(index.parent_partnerships_of(dave.id).len(), 1);
    Ok(())
}

#[test]
fn test_round_trip_shares_location_rows() -> Result<()> {
    init_logging();
    let original = create_test_tree();
    let outcome = round_trip(&original)?;

    // Abe's birth and death place are the same triple
    assert_eq!(outcome.data.location_count(), 1);
    let abe = outcome.data.persons().next().unwrap();
    assert_eq!(abe.birth_location, abe.death_location);
    let place = outcome.data.location(abe.birth_location.unwrap()).unwrap();
    assert_eq!(place.city, "city");
    assert_eq!(place.state, "state");
    assert_eq!(place.country, "US");
    Ok(())
}

#[test]
fn test_generated_text_reparses_structurally_equal() -> Result<()> {
    init_logging();
    let original = create_test_tree();
    let index = TreeIndex::build(&original);
    let document = generate(&original, &index)?;
    let reparsed = parse_document(&write_document(&document))?;
    assert!(document.structurally_equal(&reparsed));
    Ok(())
}

#[test]
fn test_import_skips_family_with_missing_individual() -> Result<()> {
    init_logging();
    let text = "0 HEAD\n\
                1 CHAR UTF-8\n\
                0 @P1@ INDI\n\
                1 NAME Henry /Ford/\n\
                1 SEX M\n\
                0 @F1@ FAM\n\
                1 HUSB @P1@\n\
                1 WIFE @GHOST@\n\
                0 @F2@ FAM\n\
                1 HUSB @P1@\n\
                0 TRLR\n";
    let document = parse_document(text)?;
    let outcome = import_document(&document, Tree::new("partial"))?;

    assert_eq!(outcome.data.person_count(), 1);
    assert_eq!(outcome.data.partnership_count(), 1);
    assert_eq!(outcome.report.skipped_families.len(), 1);
    assert_eq!(outcome.report.skipped_families[0].family, "@F1@");
    assert_eq!(outcome.report.skipped_families[0].pointer, "@GHOST@");
    Ok(())
}

#[test]
fn test_import_softens_unsupported_dates() -> Result<()> {
    init_logging();
    let text = "0 @P1@ INDI\n\
                1 NAME Henry /Ford/\n\
                1 BIRT\n\
                2 DATE 1863-07-30\n\
                2 PLAC Greenfield, Michigan, US\n\
                0 TRLR\n";
    let document = parse_document(text)?;
    let outcome = import_document(&document, Tree::new("soft dates"))?;

    let person = outcome.data.persons().next().unwrap();
    assert_eq!(person.birth_date, None);
    assert!(person.birth_location.is_some());
    assert_eq!(outcome.report.date_problems.len(), 1);
    assert_eq!(outcome.report.date_problems[0].value, "1863-07-30");
    Ok(())
}

#[test]
fn test_import_accepts_nonstandard_gender_letters() -> Result<()> {
    init_logging();
    let text = "0 @P1@ INDI\n\
                1 NAME A Person\n\
                1 SEX I\n\
                0 @P2@ INDI\n\
                1 NAME B Person\n\
                1 SEX O\n\
                0 @P3@ INDI\n\
                1 NAME C Person\n\
                1 SEX Q\n";
    let document = parse_document(text)?;
    let outcome = import_document(&document, Tree::new("genders"))?;

    let genders: Vec<Gender> = outcome.data.persons().map(|person| person.gender).collect();
    assert_eq!(genders, vec![Gender::Intersex, Gender::Other, Gender::Unknown]);
    Ok(())
}

#[test]
fn test_imported_family_without_marriage_is_partnered() -> Result<()> {
    init_logging();
    let text = "0 @P1@ INDI\n\
                1 NAME Henry /Ford/\n\
                1 SEX M\n\
                0 @F1@ FAM\n\
                1 HUSB @P1@\n";
    let document = parse_document(text)?;
    let outcome = import_document(&document, Tree::new("statuses"))?;
    let partnership = outcome.data.partnerships().next().unwrap();
    assert_eq!(partnership.marital_status, MaritalStatus::Partnered);
    Ok(())
}
