//! Family office and family office contact rows

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::RawValue;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_bool;
use super::value::deserialize_lax_text;

/// A single or multi family office.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyOffice {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub firm_type: Option<String>,
    pub aum: Option<RawValue>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub country: Option<String>,
    pub founded_year: Option<RawValue>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub description: Option<String>,
}

impl Row for FamilyOffice {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for FamilyOffice {
    const KIND: EntityKind = EntityKind::FamilyOffice;
}

/// A person working at a family office.
///
/// Email and phone are masked by the backend until a staff member reveals
/// them; `revealed` tells whether the values are the real ones.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyOfficeContact {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub full_name: Option<String>,
    /// Comma separated roles, e.g. `"CIO,Partner"`.
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub role: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub family_office: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub linkedin: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_bool")]
    pub revealed: bool,
}

impl Row for FamilyOfficeContact {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for FamilyOfficeContact {
    const KIND: EntityKind = EntityKind::FamilyOfficeContact;
}
