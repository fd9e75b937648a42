//! Subscribers, orders and their selectable states

use serde::Deserialize;
use serde::Serialize;

use super::EntityKind;
use super::RawValue;
use super::Resource;
use super::Row;
use super::value::deserialize_id;
use super::value::deserialize_lax_text;

/// A closed set of values offered in an inline selector.
pub trait Choice: Copy + Sized + 'static {
    /// Every value, in display order.
    const ALL: &'static [Self];

    /// The wire and display form of this value.
    fn as_str(&self) -> &'static str;

    /// The selector options, in display order.
    fn options() -> Vec<String> {
        Self::ALL.iter().map(|c| c.as_str().to_string()).collect()
    }

    /// Looks up a value by its wire form, ignoring case.
    fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Choice for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$name as Choice>::parse(s).ok_or_else(|| {
                    format!("unknown {} '{}'", stringify!($name), s)
                })
            }
        }
    };
}

choice! {
    /// Subscription plan of a user.
    Plan {
        Free => "free",
        Starter => "starter",
        Pro => "pro",
        Enterprise => "enterprise",
    }
}

choice! {
    /// Account state of a user.
    UserStatus {
        Active => "active",
        Suspended => "suspended",
        Cancelled => "cancelled",
    }
}

choice! {
    /// Payment state of an order.
    OrderStatus {
        Pending => "pending",
        Paid => "paid",
        Refunded => "refunded",
        Cancelled => "cancelled",
    }
}

/// A registered user and their subscription.
///
/// `plan` and `status` are kept as strings so that values unknown to this
/// client still display.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub display_name: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub plan: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub status: Option<String>,
    pub created_at: Option<RawValue>,
    pub subscription_ends_at: Option<RawValue>,
}

impl Row for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for User {
    const KIND: EntityKind = EntityKind::User;
}

/// A subscription purchase.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub customer_email: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub plan: Option<String>,
    pub amount: Option<RawValue>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub currency: Option<String>,
    #[serde(deserialize_with = "deserialize_lax_text")]
    pub status: Option<String>,
    pub created_at: Option<RawValue>,
}

impl Row for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Order {
    const KIND: EntityKind = EntityKind::Order;
}
