use super::fields::{
    AddressFields, BeneficiaryFields, CitizenshipFields, ContactFields, EmploymentFields,
    I129fFields, InterpreterFields, NameFields, ParentFields, PersonFields, PetitionerFields,
    PreparerFields, PriorMarriageFields, ResidenceFields, UsStatusFields,
};
use crate::forms::answers::{AnswersTree, Node};
use crate::forms::assignments::AssignmentWriter;
use crate::forms::normalizer::{classify_citizenship_basis, classify_petition_type, PetitionType};

const PHYSICAL_ADDRESS_KEYS: &[&str] = &["physicalAddresses", "physicalAddress"];

pub(super) fn map_form(
    writer: &mut AssignmentWriter<'_>,
    fields: &I129fFields,
    answers: &AnswersTree,
) {
    let root = answers.root();

    map_petitioner(writer, &fields.petitioner, root);
    map_beneficiary(writer, &fields.beneficiary, root.get("beneficiary"));

    let interpreter = root.get("interpreter");
    if interpreter.get("used").flag() == Some(true) {
        map_interpreter(writer, &fields.interpreter, interpreter);
    }

    let preparer = root.get("preparer");
    if preparer.get("used").flag() == Some(true) {
        map_preparer(writer, &fields.preparer, preparer);
    }

    let part8 = root.get("part8");
    for line in fields.part8 {
        writer.text(&line.field, part8.get(line.key));
    }

    for (name, value) in root.get("other").members() {
        writer.override_value(name, value);
    }
}

fn map_petitioner(writer: &mut AssignmentWriter<'_>, fields: &PetitionerFields, root: Node<'_>) {
    let petitioner = root.get("petitioner");
    let mailing = petitioner.get("mailing").or(root.get("mailing"));
    map_person(writer, &fields.person, petitioner, mailing);

    let classification = root.get("classification");
    let petition_type = classify_petition_type(&classification.get("type").text());
    writer.select(fields.classification.options, petition_type);
    if petition_type == Some(PetitionType::K3) {
        writer.yes_no(&fields.i130_filed, classification.get("i130Filed").flag());
    }

    map_citizenship(writer, &fields.citizenship, petitioner.get("citizenship"));
}

fn map_citizenship(
    writer: &mut AssignmentWriter<'_>,
    fields: &CitizenshipFields,
    node: Node<'_>,
) {
    writer.select(
        fields.acquired_through.options,
        classify_citizenship_basis(&node.get("acquiredThrough").text()),
    );
    writer.yes_no(&fields.certificate_obtained, node.get("certificateObtained").flag());
    writer.text(&fields.certificate_number, node.get("certificateNumber"));
    writer.text(&fields.place_of_issuance, node.get("placeOfIssuance"));
    writer.date(&fields.date_of_issuance, node.get("dateOfIssuance"));
}

fn map_beneficiary(
    writer: &mut AssignmentWriter<'_>,
    fields: &BeneficiaryFields,
    node: Node<'_>,
) {
    map_person(writer, &fields.person, node, node.get("mailing"));
    writer.text(&fields.country_citizenship, node.get("countryCitizenship"));

    let in_us = node.get("inUS").flag();
    writer.yes_no(&fields.in_us, in_us);
    match in_us {
        Some(true) => {
            map_address(writer, &fields.us_address, node.get("usAddress"));
            map_us_status(writer, &fields.us_status, node.get("usStatus"));
        }
        Some(false) => map_address(writer, &fields.address_abroad, node.get("addressAbroad")),
        None => {}
    }
}

fn map_us_status(writer: &mut AssignmentWriter<'_>, fields: &UsStatusFields, node: Node<'_>) {
    writer.text(&fields.class_of_admission, node.get("classOfAdmission"));
    writer.text(&fields.i94_number, node.get("i94Number"));
    writer.date(&fields.date_of_arrival, node.get("dateOfArrival"));
    writer.date(&fields.authorized_stay_expires, node.get("authorizedStayExpires"));
    writer.text(&fields.passport_number, node.get("passportNumber"));
    writer.text(&fields.travel_document_number, node.get("travelDocumentNumber"));
    writer.text(&fields.passport_country, node.get("passportCountry"));
    writer.date(&fields.passport_expires, node.get("passportExpires"));
}

fn map_person(
    writer: &mut AssignmentWriter<'_>,
    fields: &PersonFields,
    person: Node<'_>,
    mailing: Node<'_>,
) {
    writer.text(&fields.a_number, person.get("aNumber"));
    writer.text(&fields.ssn, person.get("ssn"));
    writer.optional_text(fields.uscis_online_account.as_ref(), person.get("uscisOnlineAccount"));

    map_name(writer, &fields.name, person.get("name"));
    map_name(writer, &fields.other_name, person.get("otherNames").entry(0));

    writer.date(&fields.dob, person.get("dob"));
    writer.sex(&fields.sex, person.get("sex"));
    writer.marital(&fields.marital, person.get("maritalStatus"));
    writer.text(&fields.city_birth, person.get("cityBirth"));
    writer.optional_text(fields.province_birth.as_ref(), person.get("provinceBirth"));
    writer.text(&fields.country_birth, person.get("countryBirth"));

    map_address(writer, &fields.mailing, mailing);
    writer.yes_no(&fields.mailing_same_as_physical, mailing.get("sameAsPhysical").flag());

    let addresses = person.first_of(PHYSICAL_ADDRESS_KEYS);
    for (index, residence) in fields.physical.iter().enumerate() {
        map_residence(writer, residence, addresses.entry(index));
    }

    let employment = person.get("employment");
    for (index, employer) in fields.employment.iter().enumerate() {
        map_employment(writer, employer, employment.entry(index));
    }

    let parents = person.get("parents");
    for (index, parent) in fields.parents.iter().enumerate() {
        map_parent(writer, parent, parents.entry(index));
    }

    map_prior_marriage(writer, &fields.prior_marriage, person);
    map_contact(writer, &fields.contact, person.get("contact"));
}

fn map_name(writer: &mut AssignmentWriter<'_>, fields: &NameFields, name: Node<'_>) {
    writer.text(&fields.last, name.get("last"));
    writer.text(&fields.first, name.get("first"));
    writer.optional_text(fields.middle.as_ref(), name.get("middle"));
}

fn map_address(writer: &mut AssignmentWriter<'_>, fields: &AddressFields, address: Node<'_>) {
    writer.optional_text(fields.in_care_of.as_ref(), address.get("inCareOf"));
    writer.text(&fields.street, address.get("street"));
    if let Some(unit) = &fields.unit {
        writer.unit(unit, address.get("unitType"), address.get("unitNum"));
    }
    writer.text(&fields.city, address.get("city"));
    writer.optional_text(fields.state.as_ref(), address.get("state"));
    writer.optional_text(fields.zip.as_ref(), address.get("zip"));
    writer.optional_text(fields.province.as_ref(), address.get("province"));
    writer.optional_text(fields.postal.as_ref(), address.get("postal"));
    writer.optional_text(fields.country.as_ref(), address.get("country"));
}

fn map_residence(writer: &mut AssignmentWriter<'_>, fields: &ResidenceFields, entry: Node<'_>) {
    map_address(writer, &fields.address, entry);
    writer.date(&fields.dates.from, entry.get("from"));
    writer.date(&fields.dates.to, entry.get("to"));
}

/// Employer address may be flattened into the entry or nested under `address`.
fn map_employment(
    writer: &mut AssignmentWriter<'_>,
    fields: &EmploymentFields,
    entry: Node<'_>,
) {
    writer.text(&fields.employer, entry.get("employer"));
    map_address(writer, &fields.address, entry.get("address").or(entry));
    writer.text(&fields.occupation, entry.get("occupation"));
    writer.date(&fields.dates.from, entry.get("from"));
    writer.date(&fields.dates.to, entry.get("to"));
}

fn map_parent(writer: &mut AssignmentWriter<'_>, fields: &ParentFields, entry: Node<'_>) {
    map_name(writer, &fields.name, entry.get("name"));
    writer.date(&fields.dob, entry.get("dob"));
    writer.sex(&fields.sex, entry.get("sex"));
    writer.text(&fields.country_birth, entry.get("countryBirth"));
    writer.text(&fields.city_residence, entry.get("cityResidence"));
    writer.text(&fields.country_residence, entry.get("countryResidence"));
}

fn map_prior_marriage(
    writer: &mut AssignmentWriter<'_>,
    fields: &PriorMarriageFields,
    person: Node<'_>,
) {
    writer.yes_no(&fields.previously_married, person.get("previouslyMarried").flag());
    let spouse = person.get("priorSpouses").entry(0);
    map_name(writer, &fields.spouse, spouse.get("name"));
    writer.date(&fields.ended, spouse.get("dateMarriageEnded"));
}

fn map_contact(writer: &mut AssignmentWriter<'_>, fields: &ContactFields, contact: Node<'_>) {
    writer.text(&fields.daytime_phone, contact.get("daytimePhone"));
    writer.optional_text(fields.mobile_phone.as_ref(), contact.get("mobilePhone"));
    writer.text(&fields.email, contact.get("email"));
}

fn map_interpreter(
    writer: &mut AssignmentWriter<'_>,
    fields: &InterpreterFields,
    node: Node<'_>,
) {
    map_name(writer, &fields.name, node.get("name"));
    writer.text(&fields.business, node.get("business"));
    map_address(writer, &fields.address, node.get("address").or(node));
    map_contact(writer, &fields.contact, node.get("contact"));
    writer.text(&fields.language, node.get("language"));
}

fn map_preparer(writer: &mut AssignmentWriter<'_>, fields: &PreparerFields, node: Node<'_>) {
    map_name(writer, &fields.name, node.get("name"));
    writer.text(&fields.business, node.get("business"));
    map_address(writer, &fields.address, node.get("address").or(node));
    map_contact(writer, &fields.contact, node.get("contact"));
}
