//! Person rows

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_text;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub full_name: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub country: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub linkedin: Option<String>,
}

impl Row for Person {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Person {
    const KIND: EntityKind = EntityKind::Person;
}
