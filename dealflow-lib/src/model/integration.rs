//! Integration records

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::RawValue;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_text;

/// A connection to an external data provider and its last sync state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Integration {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub provider: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub status: Option<String>,
    pub records_synced: Option<RawValue>,
    pub last_synced_at: Option<RawValue>,
    pub created_at: Option<RawValue>,
}

impl Row for Integration {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Integration {
    const KIND: EntityKind = EntityKind::Integration;
}
