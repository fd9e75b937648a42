//! Company rows

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::RawValue;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_text;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Company {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub country: Option<String>,
    pub founded_year: Option<RawValue>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub linkedin: Option<String>,
}

impl Row for Company {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Company {
    const KIND: EntityKind = EntityKind::Company;
}
