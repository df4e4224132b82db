//! End-to-end mapping scenarios driven through the public `FieldMapper` facade.
//!
//! Physical names are looked up through the `I129F` table so the assertions follow the
//! table rather than duplicating its strings.

use serde_json::{json, Value};
use visa_forms::forms::i129f::I129F;
use visa_forms::forms::{AnswersTree, FieldAssignments, FieldMapper, FieldValue, TextField};

fn map(answers: Value) -> FieldAssignments {
    FieldMapper::new().map(&AnswersTree::new(answers))
}

fn name(field: &TextField) -> &'static str {
    field.names()[0]
}

fn full_answers() -> Value {
    json!({
        "classification": { "type": "K-3", "i130Filed": true },
        "petitioner": {
            "name": { "last": "Rivera", "first": "Ana", "middle": "  " },
            "aNumber": "A123456789",
            "ssn": 123456789,
            "dob": "1990-04-12",
            "sex": "Female",
            "maritalStatus": "single",
            "cityBirth": "Austin",
            "countryBirth": "USA",
            "otherNames": [{ "last": "Lopez", "first": "Ana" }],
            "mailing": {
                "inCareOf": "Maria Rivera",
                "street": "12 Elm St",
                "unitType": "Apt",
                "unitNum": "4B",
                "city": "Austin",
                "state": "TX",
                "zip": "78701",
                "sameAsPhysical": false
            },
            "physicalAddresses": [
                { "street": "12 Elm St", "city": "Austin", "from": "2019-01-01", "to": "present" },
                { "street": "9 Oak Ave", "city": "Dallas", "from": "1/5/2015", "to": "12/31/18" }
            ],
            "employment": [
                {
                    "employer": "Acme Corp",
                    "address": { "street": "1 Main St", "city": "Austin" },
                    "occupation": "Engineer",
                    "from": "March 1, 2020"
                }
            ],
            "parents": [
                { "name": { "last": "Rivera", "first": "Jose" }, "sex": "m", "dob": "1960-01-02" },
                { "name": { "last": "Diaz", "first": "Rosa" }, "sex": "F" }
            ],
            "previouslyMarried": "no",
            "contact": { "daytimePhone": "5125550100", "email": "ana@example.com" },
            "citizenship": { "acquiredThrough": "naturalization", "certificateObtained": true }
        },
        "beneficiary": {
            "name": { "last": "Okafor", "first": "Chidi" },
            "sex": "male",
            "maritalStatus": "Divorced",
            "countryCitizenship": "Nigeria",
            "inUS": false,
            "addressAbroad": { "street": "5 Marina Rd", "city": "Lagos", "country": "Nigeria" },
            "usAddress": { "street": "should not appear" },
            "priorSpouses": [{ "name": { "last": "Eze" }, "dateMarriageEnded": "2018-06-30" }],
            "previouslyMarried": true
        },
        "interpreter": { "used": false, "name": { "last": "Skipped" } },
        "preparer": { "used": true, "name": { "last": "Nguyen" }, "business": "Nguyen Law" },
        "part8": { "line3a": 2, "line3d": "  Additional employment details. " },
        "other": {}
    })
}

#[test]
fn omits_every_field_without_a_value() {
    let out = map(json!({
        "petitioner": {
            "name": { "last": null, "first": "   ", "middle": [] },
            "dob": "",
            "sex": null,
            "mailing": { "sameAsPhysical": null }
        }
    }));
    assert!(out.is_empty(), "unexpected assignments: {out:?}");

    let person = &I129F.petitioner.person;
    let out = map(full_answers());
    let middle = person.name.middle.expect("petitioner middle name field");
    assert!(!out.contains(name(&middle)));
    assert!(out
        .iter()
        .all(|(_, value)| !matches!(value, FieldValue::Text(text) if text.is_empty())));
}

#[test]
fn exclusive_groups_never_have_two_members_checked() {
    let out = map(full_answers());
    let descriptors = FieldMapper::catalogue();
    for descriptor in &descriptors {
        let checked = descriptor
            .physical_names()
            .into_iter()
            .filter(|physical| out.checked(physical) == Some(true))
            .count();
        assert!(checked <= 1, "{descriptor:?} has {checked} checked members");
    }

    let sex = I129F.petitioner.person.sex;
    assert_eq!(out.checked(sex.female), Some(true));
    assert_eq!(out.checked(sex.male), Some(false));

    let marital = I129F.beneficiary.person.marital;
    assert_eq!(out.checked(marital.divorced), Some(true));
    assert_eq!(out.checked(marital.single), Some(false));
    assert_eq!(out.checked(marital.married), Some(false));
    assert_eq!(out.checked(marital.widowed), Some(false));
}

#[test]
fn ambiguous_classifications_leave_the_group_unwritten() {
    let out = map(json!({
        "petitioner": {
            "sex": "other",
            "maritalStatus": "separated",
            "mailing": { "unitType": "Unit", "unitNum": "7" }
        }
    }));
    let person = &I129F.petitioner.person;
    assert!(!out.contains(person.sex.male));
    assert!(!out.contains(person.sex.female));
    assert!(!out.contains(person.marital.single));
    let unit = person.mailing.unit.expect("mailing unit fields");
    assert!(!out.contains(unit.apt));
    assert!(!out.contains(unit.ste));
    assert!(!out.contains(unit.flr));
    for variant in unit.number.names() {
        assert_eq!(out.text(variant), Some("7"));
    }
}

#[test]
fn dates_are_normalized_or_preserved() {
    let out = map(full_answers());
    let person = &I129F.petitioner.person;
    assert_eq!(out.text(name(&person.dob)), Some("04/12/1990"));
    assert_eq!(out.text(name(&person.physical[0].dates.from)), Some("01/01/2019"));
    assert_eq!(out.text(name(&person.physical[0].dates.to)), Some("present"));
    assert_eq!(out.text(name(&person.physical[1].dates.from)), Some("1/5/2015"));
    assert_eq!(out.text(name(&person.physical[1].dates.to)), Some("12/31/18"));
    assert_eq!(out.text(name(&person.employment[0].dates.from)), Some("03/01/2020"));

    let out = map(json!({ "petitioner": { "dob": " not a date " } }));
    assert_eq!(out.text(name(&person.dob)), Some("not a date"));

    for typed in ["24-03-05", "03-05-2024"] {
        let out = map(json!({ "petitioner": { "dob": typed } }));
        assert_eq!(out.text(name(&person.dob)), Some(typed));
    }
}

#[test]
fn i130_fields_only_apply_to_k3_petitions() {
    let i130 = I129F.petitioner.i130_filed;
    let options = I129F.petitioner.classification.options;

    for filed in [json!(true), json!(false), json!(null)] {
        let out = map(json!({ "classification": { "type": "k1", "i130Filed": filed } }));
        assert!(!out.contains(i130.yes));
        assert!(!out.contains(i130.no));
        assert_eq!(out.checked(options[0].1), Some(true));
        assert_eq!(out.checked(options[1].1), Some(false));
    }

    let out = map(json!({ "classification": { "type": "k3", "i130Filed": true } }));
    assert_eq!(out.checked(i130.yes), Some(true));
    assert_eq!(out.checked(i130.no), Some(false));

    let out = map(json!({ "classification": { "type": "k3" } }));
    assert!(!out.contains(i130.yes));
    assert!(!out.contains(i130.no));
}

#[test]
fn overrides_win_over_computed_values() {
    let last = name(&I129F.petitioner.person.name.last);
    let female = I129F.petitioner.person.sex.female;
    let out = map(json!({
        "petitioner": { "name": { "last": "Alice" }, "sex": "f" },
        "other": {
            last: "Bob",
            female: false,
            "Custom_Field[0]": 42,
            "Blank_Field[0]": "   ",
            "Nested_Field[0]": { "ignored": true }
        }
    }));
    assert_eq!(out.text(last), Some("Bob"));
    assert_eq!(out.checked(female), Some(false));
    assert_eq!(out.text("Custom_Field[0]"), Some("42"));
    assert!(!out.contains("Blank_Field[0]"));
    assert!(!out.contains("Nested_Field[0]"));
}

#[test]
fn mapping_is_idempotent() {
    let answers = AnswersTree::new(full_answers());
    let mapper = FieldMapper::new();
    assert_eq!(mapper.map(&answers), mapper.map(&answers));
}

#[test]
fn variant_fields_receive_identical_values() {
    let out = map(full_answers());
    for group in FieldMapper::catalogue()
        .iter()
        .filter_map(|descriptor| descriptor.variant_group())
    {
        let values: Vec<_> = group.iter().filter_map(|variant| out.get(variant)).collect();
        assert!(values.windows(2).all(|pair| pair[0] == pair[1]));
    }

    let a_number = I129F.petitioner.person.a_number;
    assert_eq!(a_number.names().len(), 2);
    for variant in a_number.names() {
        assert_eq!(out.text(variant), Some("A123456789"));
    }
}

#[test]
fn petitioner_sections_follow_list_positions() {
    let out = map(full_answers());
    let person = &I129F.petitioner.person;

    assert_eq!(out.text(name(&person.ssn)), Some("123456789"));
    assert_eq!(out.text(name(&person.other_name.last)), Some("Lopez"));
    assert_eq!(out.text(name(&person.physical[0].address.street)), Some("12 Elm St"));
    assert_eq!(out.text(name(&person.physical[1].address.city)), Some("Dallas"));
    assert_eq!(out.text(name(&person.employment[0].employer)), Some("Acme Corp"));
    assert_eq!(
        out.text(name(&person.employment[0].address.street)),
        Some("1 Main St")
    );
    assert!(!out.contains(name(&person.employment[1].employer)));
    assert_eq!(out.text(name(&person.parents[0].name.first)), Some("Jose"));
    assert_eq!(out.checked(person.parents[0].sex.male), Some(true));
    assert_eq!(out.text(name(&person.parents[1].name.last)), Some("Diaz"));
    assert_eq!(out.checked(person.parents[1].sex.female), Some(true));

    assert_eq!(out.checked(person.mailing_same_as_physical.no), Some(true));
    assert_eq!(out.checked(person.mailing_same_as_physical.yes), Some(false));
    let unit = person.mailing.unit.expect("mailing unit fields");
    assert_eq!(out.checked(unit.apt), Some(true));

    assert_eq!(out.checked(person.prior_marriage.previously_married.no), Some(true));
    assert_eq!(out.text(name(&person.contact.email)), Some("ana@example.com"));

    let citizenship = &I129F.petitioner.citizenship;
    assert_eq!(out.checked(citizenship.acquired_through.options[1].1), Some(true));
    assert_eq!(out.checked(citizenship.certificate_obtained.yes), Some(true));
}

#[test]
fn single_physical_address_object_counts_as_most_recent() {
    let out = map(json!({
        "petitioner": { "physicalAddress": { "street": "77 Pine St" } }
    }));
    let street = name(&I129F.petitioner.person.physical[0].address.street);
    assert_eq!(out.text(street), Some("77 Pine St"));
}

#[test]
fn empty_address_list_does_not_hide_the_single_address() {
    let out = map(json!({
        "petitioner": {
            "physicalAddresses": [],
            "physicalAddress": { "street": "77 Pine St" }
        }
    }));
    let street = name(&I129F.petitioner.person.physical[0].address.street);
    assert_eq!(out.text(street), Some("77 Pine St"));
}

#[test]
fn top_level_mailing_backs_up_the_petitioner() {
    let street = name(&I129F.petitioner.person.mailing.street);

    let out = map(json!({ "mailing": { "street": "1 Fallback Way" } }));
    assert_eq!(out.text(street), Some("1 Fallback Way"));

    let out = map(json!({
        "mailing": { "street": "1 Fallback Way" },
        "petitioner": { "mailing": { "street": "2 Primary Rd" } }
    }));
    assert_eq!(out.text(street), Some("2 Primary Rd"));
}

#[test]
fn beneficiary_location_selects_one_address_block() {
    let beneficiary = &I129F.beneficiary;
    let out = map(full_answers());
    assert_eq!(out.checked(beneficiary.in_us.no), Some(true));
    assert_eq!(
        out.text(name(&beneficiary.address_abroad.street)),
        Some("5 Marina Rd")
    );
    assert!(!out.contains(name(&beneficiary.us_address.street)));
    assert_eq!(out.text(name(&beneficiary.person.prior_marriage.ended)), Some("06/30/2018"));

    let out = map(json!({
        "beneficiary": {
            "inUS": "yes",
            "usAddress": { "street": "400 Broadway" },
            "usStatus": { "classOfAdmission": "B2", "dateOfArrival": "2024-01-15" },
            "addressAbroad": { "street": "should not appear" }
        }
    }));
    assert_eq!(out.checked(beneficiary.in_us.yes), Some(true));
    assert_eq!(out.text(name(&beneficiary.us_address.street)), Some("400 Broadway"));
    assert_eq!(out.text(name(&beneficiary.us_status.class_of_admission)), Some("B2"));
    assert_eq!(
        out.text(name(&beneficiary.us_status.date_of_arrival)),
        Some("01/15/2024")
    );
    assert!(!out.contains(name(&beneficiary.address_abroad.street)));

    let out = map(json!({
        "beneficiary": {
            "usAddress": { "street": "400 Broadway" },
            "addressAbroad": { "street": "5 Marina Rd" }
        }
    }));
    assert!(!out.contains(beneficiary.in_us.yes));
    assert!(!out.contains(name(&beneficiary.us_address.street)));
    assert!(!out.contains(name(&beneficiary.address_abroad.street)));
}

#[test]
fn interpreter_and_preparer_require_used_flag() {
    let out = map(full_answers());
    assert!(!out.contains(name(&I129F.interpreter.name.last)));
    assert_eq!(out.text(name(&I129F.preparer.name.last)), Some("Nguyen"));
    assert_eq!(out.text(name(&I129F.preparer.business)), Some("Nguyen Law"));
}

#[test]
fn part8_lines_are_copied_as_text() {
    let out = map(full_answers());
    let line = |key: &str| {
        I129F
            .part8
            .iter()
            .find(|line| line.key == key)
            .map(|line| name(&line.field))
            .expect("part 8 line")
    };
    assert_eq!(out.text(line("line3a")), Some("2"));
    assert_eq!(out.text(line("line3d")), Some("Additional employment details."));
    assert!(!out.contains(line("line4d")));
}
