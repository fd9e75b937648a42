use crate::column::Callback;
use crate::column::ColumnSet;
use crate::column::Field;
use crate::column::factory;
use crate::model::FamilyOfficeContact;

type Contact = FamilyOfficeContact;

const FULL_NAME: Field<Contact, str> = Field::new("full_name", |r| r.full_name.as_deref());
const ROLE: Field<Contact, str> = Field::new("role", |r| r.role.as_deref());
const FAMILY_OFFICE: Field<Contact, str> =
    Field::new("family_office", |r| r.family_office.as_deref());
const EMAIL: Field<Contact, str> = Field::new("email", |r| r.email.as_deref());
const PHONE: Field<Contact, str> = Field::new("phone", |r| r.phone.as_deref());
const REVEALED: Field<Contact, bool> = Field::new("revealed", |r| Some(&r.revealed));
const LINKEDIN: Field<Contact, str> = Field::new("linkedin", |r| r.linkedin.as_deref());

/// Name, Role, Family office, Email, Phone, LinkedIn.
///
/// Email and phone stay masked until revealed; `on_reveal` receives the
/// contact id.
pub fn family_office_contact_columns(on_reveal: Callback<String>) -> ColumnSet<Contact> {
    vec![
        factory::avatar_column("full_name", FULL_NAME, "Name"),
        factory::role_column(ROLE),
        factory::text_column("family_office", FAMILY_OFFICE, "Family office"),
        factory::masked_column("email", EMAIL, REVEALED, "Email", on_reveal.clone()),
        factory::masked_column("phone", PHONE, REVEALED, "Phone", on_reveal),
        factory::linkedin_column(LINKEDIN, None),
    ]
}
