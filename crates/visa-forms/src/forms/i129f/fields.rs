//! Physical field names of the I-129F (Petition for Alien Fiancé(e)) AcroForm.
//!
//! This is the single source of truth for the names; the mapper only ever reaches
//! the form through these tables.

use crate::forms::descriptor::{
    ChoiceFields, Describe, FieldDescriptor, MaritalFields, SexFields, TextField, UnitFields,
    YesNoFields,
};
use crate::forms::normalizer::{CitizenshipBasis, PetitionType};

#[derive(Debug, Clone, Copy)]
pub struct NameFields {
    pub last: TextField,
    pub first: TextField,
    pub middle: Option<TextField>,
}

#[derive(Debug, Clone, Copy)]
pub struct AddressFields {
    pub in_care_of: Option<TextField>,
    pub street: TextField,
    pub unit: Option<UnitFields>,
    pub city: TextField,
    pub state: Option<TextField>,
    pub zip: Option<TextField>,
    pub province: Option<TextField>,
    pub postal: Option<TextField>,
    pub country: Option<TextField>,
}

#[derive(Debug, Clone, Copy)]
pub struct DateRangeFields {
    pub from: TextField,
    pub to: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct ResidenceFields {
    pub address: AddressFields,
    pub dates: DateRangeFields,
}

#[derive(Debug, Clone, Copy)]
pub struct EmploymentFields {
    pub employer: TextField,
    pub address: AddressFields,
    pub occupation: TextField,
    pub dates: DateRangeFields,
}

#[derive(Debug, Clone, Copy)]
pub struct ParentFields {
    pub name: NameFields,
    pub dob: TextField,
    pub sex: SexFields,
    pub country_birth: TextField,
    pub city_residence: TextField,
    pub country_residence: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactFields {
    pub daytime_phone: TextField,
    pub mobile_phone: Option<TextField>,
    pub email: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct PriorMarriageFields {
    pub previously_married: YesNoFields,
    pub spouse: NameFields,
    pub ended: TextField,
}

/// Blocks the petitioner and beneficiary parts share.
#[derive(Debug, Clone, Copy)]
pub struct PersonFields {
    pub a_number: TextField,
    pub ssn: TextField,
    pub uscis_online_account: Option<TextField>,
    pub name: NameFields,
    pub other_name: NameFields,
    pub dob: TextField,
    pub sex: SexFields,
    pub marital: MaritalFields,
    pub city_birth: TextField,
    pub province_birth: Option<TextField>,
    pub country_birth: TextField,
    pub mailing: AddressFields,
    pub mailing_same_as_physical: YesNoFields,
    /// Index 0 is the current address.
    pub physical: [ResidenceFields; 2],
    /// Index 0 is the current employer.
    pub employment: [EmploymentFields; 2],
    pub parents: [ParentFields; 2],
    pub prior_marriage: PriorMarriageFields,
    pub contact: ContactFields,
}

#[derive(Debug, Clone, Copy)]
pub struct CitizenshipFields {
    pub acquired_through: ChoiceFields<CitizenshipBasis>,
    pub certificate_obtained: YesNoFields,
    pub certificate_number: TextField,
    pub place_of_issuance: TextField,
    pub date_of_issuance: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct PetitionerFields {
    pub person: PersonFields,
    pub classification: ChoiceFields<PetitionType>,
    /// K-3 only.
    pub i130_filed: YesNoFields,
    pub citizenship: CitizenshipFields,
}

#[derive(Debug, Clone, Copy)]
pub struct UsStatusFields {
    pub class_of_admission: TextField,
    pub i94_number: TextField,
    pub date_of_arrival: TextField,
    pub authorized_stay_expires: TextField,
    pub passport_number: TextField,
    pub travel_document_number: TextField,
    pub passport_country: TextField,
    pub passport_expires: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct BeneficiaryFields {
    pub person: PersonFields,
    pub country_citizenship: TextField,
    pub in_us: YesNoFields,
    pub us_address: AddressFields,
    pub us_status: UsStatusFields,
    pub address_abroad: AddressFields,
}

#[derive(Debug, Clone, Copy)]
pub struct InterpreterFields {
    pub name: NameFields,
    pub business: TextField,
    pub address: AddressFields,
    pub contact: ContactFields,
    pub language: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct PreparerFields {
    pub name: NameFields,
    pub business: TextField,
    pub address: AddressFields,
    pub contact: ContactFields,
}

/// One continuation line of Part 8, keyed by its answer name.
#[derive(Debug, Clone, Copy)]
pub struct Part8Line {
    pub key: &'static str,
    pub field: TextField,
}

#[derive(Debug, Clone, Copy)]
pub struct I129fFields {
    pub petitioner: PetitionerFields,
    pub beneficiary: BeneficiaryFields,
    pub interpreter: InterpreterFields,
    pub preparer: PreparerFields,
    pub part8: &'static [Part8Line],
}

impl I129fFields {
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        let mut out = Vec::new();
        self.describe(&mut out);
        out
    }

    pub fn physical_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .descriptors()
            .iter()
            .flat_map(FieldDescriptor::physical_names)
            .collect();
        names.sort_unstable();
        names
    }
}

impl Describe for I129fFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.petitioner.describe(out);
        self.beneficiary.describe(out);
        self.interpreter.describe(out);
        self.preparer.describe(out);
        for line in self.part8 {
            line.field.describe(out);
        }
    }
}

impl Describe for NameFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.last.describe(out);
        self.first.describe(out);
        self.middle.describe(out);
    }
}

impl Describe for AddressFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.in_care_of.describe(out);
        self.street.describe(out);
        self.unit.describe(out);
        self.city.describe(out);
        self.state.describe(out);
        self.zip.describe(out);
        self.province.describe(out);
        self.postal.describe(out);
        self.country.describe(out);
    }
}

impl Describe for DateRangeFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.from.describe(out);
        self.to.describe(out);
    }
}

impl Describe for ResidenceFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.address.describe(out);
        self.dates.describe(out);
    }
}

impl Describe for EmploymentFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.employer.describe(out);
        self.address.describe(out);
        self.occupation.describe(out);
        self.dates.describe(out);
    }
}

impl Describe for ParentFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.name.describe(out);
        self.dob.describe(out);
        self.sex.describe(out);
        self.country_birth.describe(out);
        self.city_residence.describe(out);
        self.country_residence.describe(out);
    }
}

impl Describe for ContactFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.daytime_phone.describe(out);
        self.mobile_phone.describe(out);
        self.email.describe(out);
    }
}

impl Describe for PriorMarriageFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.previously_married.describe(out);
        self.spouse.describe(out);
        self.ended.describe(out);
    }
}

impl Describe for PersonFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.a_number.describe(out);
        self.ssn.describe(out);
        self.uscis_online_account.describe(out);
        self.name.describe(out);
        self.other_name.describe(out);
        self.dob.describe(out);
        self.sex.describe(out);
        self.marital.describe(out);
        self.city_birth.describe(out);
        self.province_birth.describe(out);
        self.country_birth.describe(out);
        self.mailing.describe(out);
        self.mailing_same_as_physical.describe(out);
        self.physical.describe(out);
        self.employment.describe(out);
        self.parents.describe(out);
        self.prior_marriage.describe(out);
        self.contact.describe(out);
    }
}

impl Describe for CitizenshipFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.acquired_through.describe(out);
        self.certificate_obtained.describe(out);
        self.certificate_number.describe(out);
        self.place_of_issuance.describe(out);
        self.date_of_issuance.describe(out);
    }
}

impl Describe for PetitionerFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.person.describe(out);
        self.classification.describe(out);
        self.i130_filed.describe(out);
        self.citizenship.describe(out);
    }
}

impl Describe for UsStatusFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        for field in [
            &self.class_of_admission,
            &self.i94_number,
            &self.date_of_arrival,
            &self.authorized_stay_expires,
            &self.passport_number,
            &self.travel_document_number,
            &self.passport_country,
            &self.passport_expires,
        ] {
            field.describe(out);
        }
    }
}

impl Describe for BeneficiaryFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.person.describe(out);
        self.country_citizenship.describe(out);
        self.in_us.describe(out);
        self.us_address.describe(out);
        self.us_status.describe(out);
        self.address_abroad.describe(out);
    }
}

impl Describe for InterpreterFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.name.describe(out);
        self.business.describe(out);
        self.address.describe(out);
        self.contact.describe(out);
        self.language.describe(out);
    }
}

impl Describe for PreparerFields {
    fn describe(&self, out: &mut Vec<FieldDescriptor>) {
        self.name.describe(out);
        self.business.describe(out);
        self.address.describe(out);
        self.contact.describe(out);
    }
}

pub const I129F: I129fFields = I129fFields {
    petitioner: PetitionerFields {
        person: PersonFields {
            a_number: TextField::Variants(&[
                "form1[0].#subform[0].#area[0].Pt1Line1_AlienNumber[0]",
                "form1[0].#subform[0].Pt1Line1_AlienNumber[0]",
            ]),
            ssn: TextField::Single("form1[0].#subform[0].Pt1Line3_SSN[0]"),
            uscis_online_account: Some(TextField::Single(
                "form1[0].#subform[0].Pt1Line2_AcctIdentifier[0]",
            )),
            name: NameFields {
                last: TextField::Single("form1[0].#subform[0].Pt1Line6a_FamilyName[0]"),
                first: TextField::Single("form1[0].#subform[0].Pt1Line6b_GivenName[0]"),
                middle: Some(TextField::Single("form1[0].#subform[0].Pt1Line6c_MiddleName[0]")),
            },
            other_name: NameFields {
                last: TextField::Single("form1[0].#subform[0].Pt1Line7a_FamilyName[0]"),
                first: TextField::Single("form1[0].#subform[0].Pt1Line7b_GivenName[0]"),
                middle: Some(TextField::Single("form1[0].#subform[0].Pt1Line7c_MiddleName[0]")),
            },
            dob: TextField::Single("form1[0].#subform[2].Pt1Line22_DateofBirth[0]"),
            sex: SexFields {
                male: "form1[0].#subform[2].Pt1Line21_Male[0]",
                female: "form1[0].#subform[2].Pt1Line21_Female[0]",
            },
            marital: MaritalFields {
                single: "form1[0].#subform[2].Pt1Line23_Single[0]",
                married: "form1[0].#subform[2].Pt1Line23_Married[0]",
                divorced: "form1[0].#subform[2].Pt1Line23_Divorced[0]",
                widowed: "form1[0].#subform[2].Pt1Line23_Widowed[0]",
            },
            city_birth: TextField::Single("form1[0].#subform[2].Pt1Line24_CityTownOfBirth[0]"),
            province_birth: Some(TextField::Single(
                "form1[0].#subform[2].Pt1Line25_ProvinceOrStateOfBirth[0]",
            )),
            country_birth: TextField::Single("form1[0].#subform[2].Pt1Line26_CountryOfBirth[0]"),
            mailing: AddressFields {
                in_care_of: Some(TextField::Single(
                    "form1[0].#subform[0].Pt1Line8_InCareofName[0]",
                )),
                street: TextField::Single("form1[0].#subform[0].Pt1Line8_StreetNumberName[0]"),
                unit: Some(UnitFields {
                    apt: "form1[0].#subform[0].Pt1Line8_Unit[0]",
                    ste: "form1[0].#subform[0].Pt1Line8_Unit[1]",
                    flr: "form1[0].#subform[0].Pt1Line8_Unit[2]",
                    number: TextField::Variants(&[
                        "form1[0].#subform[0].Pt1Line8_AptSteFlrNumber[0]",
                        "form1[0].#subform[0].Pt1Line8c_AptSteFlrNumber[0]",
                    ]),
                }),
                city: TextField::Single("form1[0].#subform[0].Pt1Line8_CityOrTown[0]"),
                state: Some(TextField::Single("form1[0].#subform[0].Pt1Line8_State[0]")),
                zip: Some(TextField::Single("form1[0].#subform[0].Pt1Line8_ZipCode[0]")),
                province: Some(TextField::Single("form1[0].#subform[0].Pt1Line8_Province[0]")),
                postal: Some(TextField::Single("form1[0].#subform[0].Pt1Line8_PostalCode[0]")),
                country: Some(TextField::Single("form1[0].#subform[0].Pt1Line8_Country[0]")),
            },
            mailing_same_as_physical: YesNoFields {
                yes: "form1[0].#subform[0].Pt1Line8j_Yes[0]",
                no: "form1[0].#subform[0].Pt1Line8j_No[0]",
            },
            physical: [
                ResidenceFields {
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[1].Pt1Line9_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[1].Pt1Line9_Unit[0]",
                            ste: "form1[0].#subform[1].Pt1Line9_Unit[1]",
                            flr: "form1[0].#subform[1].Pt1Line9_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[1].Pt1Line9_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[1].Pt1Line9_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[1].Pt1Line9_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[1].Pt1Line9_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line9_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line9_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line9_Country[0]",
                        )),
                    },
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[1].Pt1Line10a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[1].Pt1Line10b_DateTo[0]"),
                    },
                },
                ResidenceFields {
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[1].Pt1Line11_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[1].Pt1Line11_Unit[0]",
                            ste: "form1[0].#subform[1].Pt1Line11_Unit[1]",
                            flr: "form1[0].#subform[1].Pt1Line11_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[1].Pt1Line11_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[1].Pt1Line11_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[1].Pt1Line11_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[1].Pt1Line11_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line11_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line11_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line11_Country[0]",
                        )),
                    },
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[1].Pt1Line12a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[1].Pt1Line12b_DateTo[0]"),
                    },
                },
            ],
            employment: [
                EmploymentFields {
                    employer: TextField::Single("form1[0].#subform[1].Pt1Line13_NameofEmployer[0]"),
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[1].Pt1Line14_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[1].Pt1Line14_Unit[0]",
                            ste: "form1[0].#subform[1].Pt1Line14_Unit[1]",
                            flr: "form1[0].#subform[1].Pt1Line14_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[1].Pt1Line14_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[1].Pt1Line14_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[1].Pt1Line14_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[1].Pt1Line14_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line14_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line14_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line14_Country[0]",
                        )),
                    },
                    occupation: TextField::Single("form1[0].#subform[1].Pt1Line15_Occupation[0]"),
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[1].Pt1Line16a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[1].Pt1Line16b_DateTo[0]"),
                    },
                },
                EmploymentFields {
                    employer: TextField::Single("form1[0].#subform[1].Pt1Line17_NameofEmployer[0]"),
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[1].Pt1Line18_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[1].Pt1Line18_Unit[0]",
                            ste: "form1[0].#subform[1].Pt1Line18_Unit[1]",
                            flr: "form1[0].#subform[1].Pt1Line18_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[1].Pt1Line18_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[1].Pt1Line18_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[1].Pt1Line18_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[1].Pt1Line18_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line18_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line18_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[1].Pt1Line18_Country[0]",
                        )),
                    },
                    occupation: TextField::Single("form1[0].#subform[1].Pt1Line19_Occupation[0]"),
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[1].Pt1Line20a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[1].Pt1Line20b_DateTo[0]"),
                    },
                },
            ],
            parents: [
                ParentFields {
                    name: NameFields {
                        last: TextField::Single("form1[0].#subform[2].Pt1Line27a_FamilyName[0]"),
                        first: TextField::Single("form1[0].#subform[2].Pt1Line27b_GivenName[0]"),
                        middle: Some(TextField::Single(
                            "form1[0].#subform[2].Pt1Line27c_MiddleName[0]",
                        )),
                    },
                    dob: TextField::Single("form1[0].#subform[2].Pt1Line28_DateofBirth[0]"),
                    sex: SexFields {
                        male: "form1[0].#subform[2].Pt1Line29_Male[0]",
                        female: "form1[0].#subform[2].Pt1Line29_Female[0]",
                    },
                    country_birth: TextField::Single(
                        "form1[0].#subform[2].Pt1Line30_CountryofBirth[0]",
                    ),
                    city_residence: TextField::Single(
                        "form1[0].#subform[2].Pt1Line31a_CityTownOrVillageOfResidence[0]",
                    ),
                    country_residence: TextField::Single(
                        "form1[0].#subform[2].Pt1Line31b_CountryOfResidence[0]",
                    ),
                },
                ParentFields {
                    name: NameFields {
                        last: TextField::Single("form1[0].#subform[2].Pt1Line32a_FamilyName[0]"),
                        first: TextField::Single("form1[0].#subform[2].Pt1Line32b_GivenName[0]"),
                        middle: Some(TextField::Single(
                            "form1[0].#subform[2].Pt1Line32c_MiddleName[0]",
                        )),
                    },
                    dob: TextField::Single("form1[0].#subform[2].Pt1Line33_DateofBirth[0]"),
                    sex: SexFields {
                        male: "form1[0].#subform[2].Pt1Line34_Male[0]",
                        female: "form1[0].#subform[2].Pt1Line34_Female[0]",
                    },
                    country_birth: TextField::Single(
                        "form1[0].#subform[2].Pt1Line35_CountryofBirth[0]",
                    ),
                    city_residence: TextField::Single(
                        "form1[0].#subform[2].Pt1Line36a_CityTownOrVillageOfResidence[0]",
                    ),
                    country_residence: TextField::Single(
                        "form1[0].#subform[2].Pt1Line36b_CountryOfResidence[0]",
                    ),
                },
            ],
            prior_marriage: PriorMarriageFields {
                previously_married: YesNoFields {
                    yes: "form1[0].#subform[2].Pt1Line37_Yes[0]",
                    no: "form1[0].#subform[2].Pt1Line37_No[0]",
                },
                spouse: NameFields {
                    last: TextField::Single("form1[0].#subform[2].Pt1Line38a_FamilyName[0]"),
                    first: TextField::Single("form1[0].#subform[2].Pt1Line38b_GivenName[0]"),
                    middle: Some(TextField::Single(
                        "form1[0].#subform[2].Pt1Line38c_MiddleName[0]",
                    )),
                },
                ended: TextField::Single("form1[0].#subform[2].Pt1Line39_DateMarriageEnded[0]"),
            },
            contact: ContactFields {
                daytime_phone: TextField::Single(
                    "form1[0].#subform[7].Pt5Line1_DaytimePhoneNumber1[0]",
                ),
                mobile_phone: Some(TextField::Single(
                    "form1[0].#subform[7].Pt5Line2_MobileNumber1[0]",
                )),
                email: TextField::Single("form1[0].#subform[7].Pt5Line3_Email[0]"),
            },
        },
        classification: ChoiceFields {
            options: &[
                (PetitionType::K1, "form1[0].#subform[0].Pt1Line4a_Checkbox[0]"),
                (PetitionType::K3, "form1[0].#subform[0].Pt1Line4b_Checkbox[0]"),
            ],
        },
        i130_filed: YesNoFields {
            yes: "form1[0].#subform[0].Pt1Line5_Yes[0]",
            no: "form1[0].#subform[0].Pt1Line5_No[0]",
        },
        citizenship: CitizenshipFields {
            acquired_through: ChoiceFields {
                options: &[
                    (CitizenshipBasis::Birth, "form1[0].#subform[3].Pt1Line40_Birth[0]"),
                    (
                        CitizenshipBasis::Naturalization,
                        "form1[0].#subform[3].Pt1Line40_Naturalization[0]",
                    ),
                    (CitizenshipBasis::Parents, "form1[0].#subform[3].Pt1Line40_Parents[0]"),
                ],
            },
            certificate_obtained: YesNoFields {
                yes: "form1[0].#subform[3].Pt1Line41_Yes[0]",
                no: "form1[0].#subform[3].Pt1Line41_No[0]",
            },
            certificate_number: TextField::Single(
                "form1[0].#subform[3].Pt1Line42a_CertificateNumber[0]",
            ),
            place_of_issuance: TextField::Single(
                "form1[0].#subform[3].Pt1Line42b_PlaceOfIssuance[0]",
            ),
            date_of_issuance: TextField::Single(
                "form1[0].#subform[3].Pt1Line42c_DateOfIssuance[0]",
            ),
        },
    },
    beneficiary: BeneficiaryFields {
        person: PersonFields {
            a_number: TextField::Variants(&[
                "form1[0].#subform[3].#area[0].Pt2Line2_AlienNumber[0]",
                "form1[0].#subform[3].Pt2Line2_AlienNumber[0]",
            ]),
            ssn: TextField::Single("form1[0].#subform[3].Pt2Line3_SSN[0]"),
            uscis_online_account: None,
            name: NameFields {
                last: TextField::Single("form1[0].#subform[3].Pt2Line1a_FamilyName[0]"),
                first: TextField::Single("form1[0].#subform[3].Pt2Line1b_GivenName[0]"),
                middle: Some(TextField::Single("form1[0].#subform[3].Pt2Line1c_MiddleName[0]")),
            },
            other_name: NameFields {
                last: TextField::Single("form1[0].#subform[3].Pt2Line11a_FamilyName[0]"),
                first: TextField::Single("form1[0].#subform[3].Pt2Line11b_GivenName[0]"),
                middle: Some(TextField::Single("form1[0].#subform[3].Pt2Line11c_MiddleName[0]")),
            },
            dob: TextField::Single("form1[0].#subform[3].Pt2Line4_DateofBirth[0]"),
            sex: SexFields {
                male: "form1[0].#subform[3].Pt2Line5_Male[0]",
                female: "form1[0].#subform[3].Pt2Line5_Female[0]",
            },
            marital: MaritalFields {
                single: "form1[0].#subform[3].Pt2Line6_Single[0]",
                married: "form1[0].#subform[3].Pt2Line6_Married[0]",
                divorced: "form1[0].#subform[3].Pt2Line6_Divorced[0]",
                widowed: "form1[0].#subform[3].Pt2Line6_Widowed[0]",
            },
            city_birth: TextField::Single("form1[0].#subform[3].Pt2Line7_CityTownOfBirth[0]"),
            province_birth: Some(TextField::Single(
                "form1[0].#subform[3].Pt2Line8_ProvinceOrStateOfBirth[0]",
            )),
            country_birth: TextField::Single("form1[0].#subform[3].Pt2Line9_CountryOfBirth[0]"),
            mailing: AddressFields {
                in_care_of: Some(TextField::Single(
                    "form1[0].#subform[3].Pt2Line12_InCareofName[0]",
                )),
                street: TextField::Single("form1[0].#subform[3].Pt2Line12_StreetNumberName[0]"),
                unit: Some(UnitFields {
                    apt: "form1[0].#subform[3].Pt2Line12_Unit[0]",
                    ste: "form1[0].#subform[3].Pt2Line12_Unit[1]",
                    flr: "form1[0].#subform[3].Pt2Line12_Unit[2]",
                    number: TextField::Variants(&[
                        "form1[0].#subform[3].Pt2Line12_AptSteFlrNumber[0]",
                        "form1[0].#subform[3].Pt2Line12c_AptSteFlrNumber[0]",
                    ]),
                }),
                city: TextField::Single("form1[0].#subform[3].Pt2Line12_CityOrTown[0]"),
                state: Some(TextField::Single("form1[0].#subform[3].Pt2Line12_State[0]")),
                zip: Some(TextField::Single("form1[0].#subform[3].Pt2Line12_ZipCode[0]")),
                province: Some(TextField::Single("form1[0].#subform[3].Pt2Line12_Province[0]")),
                postal: Some(TextField::Single("form1[0].#subform[3].Pt2Line12_PostalCode[0]")),
                country: Some(TextField::Single("form1[0].#subform[3].Pt2Line12_Country[0]")),
            },
            mailing_same_as_physical: YesNoFields {
                yes: "form1[0].#subform[3].Pt2Line12j_Yes[0]",
                no: "form1[0].#subform[3].Pt2Line12j_No[0]",
            },
            physical: [
                ResidenceFields {
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[4].Pt2Line13_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[4].Pt2Line13_Unit[0]",
                            ste: "form1[0].#subform[4].Pt2Line13_Unit[1]",
                            flr: "form1[0].#subform[4].Pt2Line13_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[4].Pt2Line13_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[4].Pt2Line13_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[4].Pt2Line13_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[4].Pt2Line13_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line13_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line13_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line13_Country[0]",
                        )),
                    },
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[4].Pt2Line14a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[4].Pt2Line14b_DateTo[0]"),
                    },
                },
                ResidenceFields {
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[4].Pt2Line15_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[4].Pt2Line15_Unit[0]",
                            ste: "form1[0].#subform[4].Pt2Line15_Unit[1]",
                            flr: "form1[0].#subform[4].Pt2Line15_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[4].Pt2Line15_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[4].Pt2Line15_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[4].Pt2Line15_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[4].Pt2Line15_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line15_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line15_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line15_Country[0]",
                        )),
                    },
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[4].Pt2Line16a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[4].Pt2Line16b_DateTo[0]"),
                    },
                },
            ],
            employment: [
                EmploymentFields {
                    employer: TextField::Single("form1[0].#subform[4].Pt2Line17_NameofEmployer[0]"),
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[4].Pt2Line18_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[4].Pt2Line18_Unit[0]",
                            ste: "form1[0].#subform[4].Pt2Line18_Unit[1]",
                            flr: "form1[0].#subform[4].Pt2Line18_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[4].Pt2Line18_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[4].Pt2Line18_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[4].Pt2Line18_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[4].Pt2Line18_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line18_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line18_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line18_Country[0]",
                        )),
                    },
                    occupation: TextField::Single("form1[0].#subform[4].Pt2Line19_Occupation[0]"),
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[4].Pt2Line20a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[4].Pt2Line20b_DateTo[0]"),
                    },
                },
                EmploymentFields {
                    employer: TextField::Single("form1[0].#subform[4].Pt2Line21_NameofEmployer[0]"),
                    address: AddressFields {
                        in_care_of: None,
                        street: TextField::Single(
                            "form1[0].#subform[4].Pt2Line22_StreetNumberName[0]",
                        ),
                        unit: Some(UnitFields {
                            apt: "form1[0].#subform[4].Pt2Line22_Unit[0]",
                            ste: "form1[0].#subform[4].Pt2Line22_Unit[1]",
                            flr: "form1[0].#subform[4].Pt2Line22_Unit[2]",
                            number: TextField::Single(
                                "form1[0].#subform[4].Pt2Line22_AptSteFlrNumber[0]",
                            ),
                        }),
                        city: TextField::Single("form1[0].#subform[4].Pt2Line22_CityOrTown[0]"),
                        state: Some(TextField::Single("form1[0].#subform[4].Pt2Line22_State[0]")),
                        zip: Some(TextField::Single("form1[0].#subform[4].Pt2Line22_ZipCode[0]")),
                        province: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line22_Province[0]",
                        )),
                        postal: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line22_PostalCode[0]",
                        )),
                        country: Some(TextField::Single(
                            "form1[0].#subform[4].Pt2Line22_Country[0]",
                        )),
                    },
                    occupation: TextField::Single("form1[0].#subform[4].Pt2Line23_Occupation[0]"),
                    dates: DateRangeFields {
                        from: TextField::Single("form1[0].#subform[4].Pt2Line24a_DateFrom[0]"),
                        to: TextField::Single("form1[0].#subform[4].Pt2Line24b_DateTo[0]"),
                    },
                },
            ],
            parents: [
                ParentFields {
                    name: NameFields {
                        last: TextField::Single("form1[0].#subform[5].Pt2Line25a_FamilyName[0]"),
                        first: TextField::Single("form1[0].#subform[5].Pt2Line25b_GivenName[0]"),
                        middle: Some(TextField::Single(
                            "form1[0].#subform[5].Pt2Line25c_MiddleName[0]",
                        )),
                    },
                    dob: TextField::Single("form1[0].#subform[5].Pt2Line26_DateofBirth[0]"),
                    sex: SexFields {
                        male: "form1[0].#subform[5].Pt2Line27_Male[0]",
                        female: "form1[0].#subform[5].Pt2Line27_Female[0]",
                    },
                    country_birth: TextField::Single(
                        "form1[0].#subform[5].Pt2Line28_CountryofBirth[0]",
                    ),
                    city_residence: TextField::Single(
                        "form1[0].#subform[5].Pt2Line29a_CityTownOrVillageOfResidence[0]",
                    ),
                    country_residence: TextField::Single(
                        "form1[0].#subform[5].Pt2Line29b_CountryOfResidence[0]",
                    ),
                },
                ParentFields {
                    name: NameFields {
                        last: TextField::Single("form1[0].#subform[5].Pt2Line30a_FamilyName[0]"),
                        first: TextField::Single("form1[0].#subform[5].Pt2Line30b_GivenName[0]"),
                        middle: Some(TextField::Single(
                            "form1[0].#subform[5].Pt2Line30c_MiddleName[0]",
                        )),
                    },
                    dob: TextField::Single("form1[0].#subform[5].Pt2Line31_DateofBirth[0]"),
                    sex: SexFields {
                        male: "form1[0].#subform[5].Pt2Line32_Male[0]",
                        female: "form1[0].#subform[5].Pt2Line32_Female[0]",
                    },
                    country_birth: TextField::Single(
                        "form1[0].#subform[5].Pt2Line33_CountryofBirth[0]",
                    ),
                    city_residence: TextField::Single(
                        "form1[0].#subform[5].Pt2Line34a_CityTownOrVillageOfResidence[0]",
                    ),
                    country_residence: TextField::Single(
                        "form1[0].#subform[5].Pt2Line34b_CountryOfResidence[0]",
                    ),
                },
            ],
            prior_marriage: PriorMarriageFields {
                previously_married: YesNoFields {
                    yes: "form1[0].#subform[5].Pt2Line35_Yes[0]",
                    no: "form1[0].#subform[5].Pt2Line35_No[0]",
                },
                spouse: NameFields {
                    last: TextField::Single("form1[0].#subform[5].Pt2Line36a_FamilyName[0]"),
                    first: TextField::Single("form1[0].#subform[5].Pt2Line36b_GivenName[0]"),
                    middle: Some(TextField::Single(
                        "form1[0].#subform[5].Pt2Line36c_MiddleName[0]",
                    )),
                },
                ended: TextField::Single("form1[0].#subform[5].Pt2Line37_DateMarriageEnded[0]"),
            },
            contact: ContactFields {
                daytime_phone: TextField::Single(
                    "form1[0].#subform[6].Pt2Line49_DaytimePhoneNumber1[0]",
                ),
                mobile_phone: Some(TextField::Single(
                    "form1[0].#subform[6].Pt2Line50_MobileNumber1[0]",
                )),
                email: TextField::Single("form1[0].#subform[6].Pt2Line51_Email[0]"),
            },
        },
        country_citizenship: TextField::Single(
            "form1[0].#subform[3].Pt2Line10_CountryOfCitizenship[0]",
        ),
        in_us: YesNoFields {
            yes: "form1[0].#subform[6].Pt2Line38_Yes[0]",
            no: "form1[0].#subform[6].Pt2Line38_No[0]",
        },
        us_address: AddressFields {
            in_care_of: None,
            street: TextField::Single("form1[0].#subform[6].Pt2Line47_StreetNumberName[0]"),
            unit: Some(UnitFields {
                apt: "form1[0].#subform[6].Pt2Line47_Unit[0]",
                ste: "form1[0].#subform[6].Pt2Line47_Unit[1]",
                flr: "form1[0].#subform[6].Pt2Line47_Unit[2]",
                number: TextField::Single("form1[0].#subform[6].Pt2Line47_AptSteFlrNumber[0]"),
            }),
            city: TextField::Single("form1[0].#subform[6].Pt2Line47_CityOrTown[0]"),
            state: Some(TextField::Single("form1[0].#subform[6].Pt2Line47_State[0]")),
            zip: Some(TextField::Single("form1[0].#subform[6].Pt2Line47_ZipCode[0]")),
            province: None,
            postal: None,
            country: None,
        },
        us_status: UsStatusFields {
            class_of_admission: TextField::Single(
                "form1[0].#subform[6].Pt2Line39_ClassOfAdmission[0]",
            ),
            i94_number: TextField::Single("form1[0].#subform[6].Pt2Line40_I94Number[0]"),
            date_of_arrival: TextField::Single("form1[0].#subform[6].Pt2Line41_DateOfArrival[0]"),
            authorized_stay_expires: TextField::Single(
                "form1[0].#subform[6].Pt2Line42_DateAuthorizedStayExpires[0]",
            ),
            passport_number: TextField::Single("form1[0].#subform[6].Pt2Line43_PassportNumber[0]"),
            travel_document_number: TextField::Single(
                "form1[0].#subform[6].Pt2Line44_TravelDocNumber[0]",
            ),
            passport_country: TextField::Single(
                "form1[0].#subform[6].Pt2Line45_CountryOfIssuance[0]",
            ),
            passport_expires: TextField::Single("form1[0].#subform[6].Pt2Line46_ExpDate[0]"),
        },
        address_abroad: AddressFields {
            in_care_of: None,
            street: TextField::Single("form1[0].#subform[6].Pt2Line48_StreetNumberName[0]"),
            unit: Some(UnitFields {
                apt: "form1[0].#subform[6].Pt2Line48_Unit[0]",
                ste: "form1[0].#subform[6].Pt2Line48_Unit[1]",
                flr: "form1[0].#subform[6].Pt2Line48_Unit[2]",
                number: TextField::Single("form1[0].#subform[6].Pt2Line48_AptSteFlrNumber[0]"),
            }),
            city: TextField::Single("form1[0].#subform[6].Pt2Line48_CityOrTown[0]"),
            state: None,
            zip: None,
            province: Some(TextField::Single("form1[0].#subform[6].Pt2Line48_Province[0]")),
            postal: Some(TextField::Single("form1[0].#subform[6].Pt2Line48_PostalCode[0]")),
            country: Some(TextField::Single("form1[0].#subform[6].Pt2Line48_Country[0]")),
        },
    },
    interpreter: InterpreterFields {
        name: NameFields {
            last: TextField::Single("form1[0].#subform[7].Pt6Line1a_InterpreterFamilyName[0]"),
            first: TextField::Single("form1[0].#subform[7].Pt6Line1b_InterpreterGivenName[0]"),
            middle: None,
        },
        business: TextField::Single("form1[0].#subform[7].Pt6Line2_InterpreterBusinessorOrg[0]"),
        address: AddressFields {
            in_care_of: None,
            street: TextField::Single("form1[0].#subform[7].Pt6Line3_StreetNumberName[0]"),
            unit: Some(UnitFields {
                apt: "form1[0].#subform[7].Pt6Line3_Unit[0]",
                ste: "form1[0].#subform[7].Pt6Line3_Unit[1]",
                flr: "form1[0].#subform[7].Pt6Line3_Unit[2]",
                number: TextField::Single("form1[0].#subform[7].Pt6Line3_AptSteFlrNumber[0]"),
            }),
            city: TextField::Single("form1[0].#subform[7].Pt6Line3_CityOrTown[0]"),
            state: Some(TextField::Single("form1[0].#subform[7].Pt6Line3_State[0]")),
            zip: Some(TextField::Single("form1[0].#subform[7].Pt6Line3_ZipCode[0]")),
            province: Some(TextField::Single("form1[0].#subform[7].Pt6Line3_Province[0]")),
            postal: Some(TextField::Single("form1[0].#subform[7].Pt6Line3_PostalCode[0]")),
            country: Some(TextField::Single("form1[0].#subform[7].Pt6Line3_Country[0]")),
        },
        contact: ContactFields {
            daytime_phone: TextField::Single(
                "form1[0].#subform[7].Pt6Line4_InterpreterDaytimeTelephone[0]",
            ),
            mobile_phone: Some(TextField::Single(
                "form1[0].#subform[7].Pt6Line5_InterpreterMobileTelephone[0]",
            )),
            email: TextField::Single("form1[0].#subform[7].Pt6Line6_InterpreterEmailAddress[0]"),
        },
        language: TextField::Single("form1[0].#subform[7].Pt6_NameOfLanguage[0]"),
    },
    preparer: PreparerFields {
        name: NameFields {
            last: TextField::Single("form1[0].#subform[8].Pt7Line1a_PreparerFamilyName[0]"),
            first: TextField::Single("form1[0].#subform[8].Pt7Line1b_PreparerGivenName[0]"),
            middle: None,
        },
        business: TextField::Single("form1[0].#subform[8].Pt7Line2_PreparerBusinessorOrg[0]"),
        address: AddressFields {
            in_care_of: None,
            street: TextField::Single("form1[0].#subform[8].Pt7Line3_StreetNumberName[0]"),
            unit: Some(UnitFields {
                apt: "form1[0].#subform[8].Pt7Line3_Unit[0]",
                ste: "form1[0].#subform[8].Pt7Line3_Unit[1]",
                flr: "form1[0].#subform[8].Pt7Line3_Unit[2]",
                number: TextField::Single("form1[0].#subform[8].Pt7Line3_AptSteFlrNumber[0]"),
            }),
            city: TextField::Single("form1[0].#subform[8].Pt7Line3_CityOrTown[0]"),
            state: Some(TextField::Single("form1[0].#subform[8].Pt7Line3_State[0]")),
            zip: Some(TextField::Single("form1[0].#subform[8].Pt7Line3_ZipCode[0]")),
            province: Some(TextField::Single("form1[0].#subform[8].Pt7Line3_Province[0]")),
            postal: Some(TextField::Single("form1[0].#subform[8].Pt7Line3_PostalCode[0]")),
            country: Some(TextField::Single("form1[0].#subform[8].Pt7Line3_Country[0]")),
        },
        contact: ContactFields {
            daytime_phone: TextField::Single(
                "form1[0].#subform[8].Pt7Line4_PreparerDaytimeTelephone[0]",
            ),
            mobile_phone: Some(TextField::Single(
                "form1[0].#subform[8].Pt7Line5_PreparerMobileTelephone[0]",
            )),
            email: TextField::Single("form1[0].#subform[8].Pt7Line6_PreparerEmailAddress[0]"),
        },
    },
    part8: &[
        Part8Line {
            key: "line3a",
            field: TextField::Single("form1[0].#subform[9].Pt8Line3a_PageNumber[0]"),
        },
        Part8Line {
            key: "line3b",
            field: TextField::Single("form1[0].#subform[9].Pt8Line3b_PartNumber[0]"),
        },
        Part8Line {
            key: "line3c",
            field: TextField::Single("form1[0].#subform[9].Pt8Line3c_ItemNumber[0]"),
        },
        Part8Line {
            key: "line3d",
            field: TextField::Single("form1[0].#subform[9].Pt8Line3d_AdditionalInfo[0]"),
        },
        Part8Line {
            key: "line4a",
            field: TextField::Single("form1[0].#subform[9].Pt8Line4a_PageNumber[0]"),
        },
        Part8Line {
            key: "line4b",
            field: TextField::Single("form1[0].#subform[9].Pt8Line4b_PartNumber[0]"),
        },
        Part8Line {
            key: "line4c",
            field: TextField::Single("form1[0].#subform[9].Pt8Line4c_ItemNumber[0]"),
        },
        Part8Line {
            key: "line4d",
            field: TextField::Single("form1[0].#subform[9].Pt8Line4d_AdditionalInfo[0]"),
        },
        Part8Line {
            key: "line5a",
            field: TextField::Single("form1[0].#subform[9].Pt8Line5a_PageNumber[0]"),
        },
        Part8Line {
            key: "line5b",
            field: TextField::Single("form1[0].#subform[9].Pt8Line5b_PartNumber[0]"),
        },
        Part8Line {
            key: "line5c",
            field: TextField::Single("form1[0].#subform[9].Pt8Line5c_ItemNumber[0]"),
        },
        Part8Line {
            key: "line5d",
            field: TextField::Single("form1[0].#subform[9].Pt8Line5d_AdditionalInfo[0]"),
        },
        Part8Line {
            key: "line6a",
            field: TextField::Single("form1[0].#subform[9].Pt8Line6a_PageNumber[0]"),
        },
        Part8Line {
            key: "line6b",
            field: TextField::Single("form1[0].#subform[9].Pt8Line6b_PartNumber[0]"),
        },
        Part8Line {
            key: "line6c",
            field: TextField::Single("form1[0].#subform[9].Pt8Line6c_ItemNumber[0]"),
        },
        Part8Line {
            key: "line6d",
            field: TextField::Single("form1[0].#subform[9].Pt8Line6d_AdditionalInfo[0]"),
        },
    ],
};
