//! Deal rows

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::RawValue;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_text;

/// A financing round or transaction.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Deal {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub company_name: Option<String>,
    /// Comma separated deal types, e.g. `"Seed,Convertible"`.
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub deal_type: Option<String>,
    /// Deal size in millions.
    pub amount: Option<RawValue>,
    pub announced_at: Option<RawValue>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub investors: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub website: Option<String>,
}

impl Row for Deal {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Deal {
    const KIND: EntityKind = EntityKind::Deal;
}
