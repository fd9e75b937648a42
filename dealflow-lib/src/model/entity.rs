//! Entity kinds and the row traits shared by all models

use serde::de::DeserializeOwned;

/// The entity collections exposed by the CRM API.
///
/// # Examples
///
/// ```
/// use dealflow_lib::model::EntityKind;
///
/// let kind: EntityKind = "family-offices".parse().unwrap();
/// assert_eq!(kind, EntityKind::FamilyOffice);
/// assert_eq!(kind.collection(), "family-offices");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Investor,
    FamilyOffice,
    FamilyOfficeContact,
    User,
    Order,
    Deal,
    Company,
    Person,
    Integration,
}

impl EntityKind {
    /// Every entity kind, in menu order.
    pub const ALL: [EntityKind; 9] = [
        EntityKind::Investor,
        EntityKind::FamilyOffice,
        EntityKind::FamilyOfficeContact,
        EntityKind::User,
        EntityKind::Order,
        EntityKind::Deal,
        EntityKind::Company,
        EntityKind::Person,
        EntityKind::Integration,
    ];

    /// Returns the collection name used in API URLs (`/api/{collection}`).
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Investor => "investors",
            Self::FamilyOffice => "family-offices",
            Self::FamilyOfficeContact => "family-office-contacts",
            Self::User => "users",
            Self::Order => "orders",
            Self::Deal => "deals",
            Self::Company => "companies",
            Self::Person => "people",
            Self::Integration => "integrations",
        }
    }

    /// Returns a human readable, singular label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Investor => "investor",
            Self::FamilyOffice => "family office",
            Self::FamilyOfficeContact => "family office contact",
            Self::User => "user",
            Self::Order => "order",
            Self::Deal => "deal",
            Self::Company => "company",
            Self::Person => "person",
            Self::Integration => "integration",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}

impl std::str::FromStr for EntityKind {
    type Err = String;

    /// Accepts the collection name or the singular label, with `-`, `_` or
    /// spaces as separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        EntityKind::ALL
            .into_iter()
            .find(|kind| {
                kind.collection() == normalized || kind.label().replace(' ', "-") == normalized
            })
            .ok_or_else(|| format!("unknown entity '{}'", s))
    }
}

/// A table row with a stable identifier.
///
/// Columns that wire callbacks (delete, reveal, status change) need to know
/// which row they act on; they require `R: Row`.
pub trait Row {
    /// Unique identifier of this row.
    fn id(&self) -> &str;
}

/// A row type that can be fetched from the API as a collection.
pub trait Resource: Row + DeserializeOwned + Send + 'static {
    /// The collection this resource is served from.
    const KIND: EntityKind;
}
