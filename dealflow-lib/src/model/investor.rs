//! Investor rows

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::RawValue;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_text;

/// An institutional investor.
///
/// `aum` is expressed in millions and may arrive as a number or a numeric
/// string. `firm_type` is a comma separated list of tags.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Investor {
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
    /// Number of funds under management.
    pub funds: Option<RawValue>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub linkedin: Option<String>,
}

impl Row for Investor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Investor {
    const KIND: EntityKind = EntityKind::Investor;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sparse_row() {
        let investor: Investor = serde_json::from_str(r#"{"id": 7, "name": "Acme Capital"}"#).unwrap();
        assert_eq!(investor.id, "7");
        assert_eq!(investor.name.as_deref(), Some("Acme Capital"));
        assert!(investor.aum.is_none());
    }

    #[test]
    fn test_deserialize_lax_aum() {
        let investor: Investor =
            serde_json::from_str(r#"{"id": "a1", "aum": "2500", "founded_year": 1998}"#).unwrap();
        assert_eq!(investor.aum, Some(RawValue::Text("2500".to_string())));
        assert_eq!(investor.founded_year, Some(RawValue::Number(1998.0)));
    }
}
