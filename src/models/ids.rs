//! Typed identifiers for budgets, expenses and categories
//!
//! Each id is a UUID behind its own newtype so a `BudgetId` can never be
//! passed where an `ExpenseId` is expected. Ids are shown as a short
//! prefixed form (`exp-550e8400`) and accepted in snapshots either bare or
//! with their full prefixed form (`exp-550e8400-e29b-...`).

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Display prefix for this kind of id
            pub const PREFIX: &'static str = $prefix;
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let simple = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &simple[..8])
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let bare = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(bare).map(Self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                self.0.serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(de::Error::custom)
            }
        }
    };
}

define_id!(
    /// Identifies a budget
    BudgetId,
    "bud-"
);
define_id!(
    /// Identifies an expense
    ExpenseId,
    "exp-"
);
define_id!(
    /// Identifies the category an expense was filed under
    CategoryId,
    "cat-"
);
