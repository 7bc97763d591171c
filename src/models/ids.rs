//! Strongly-typed ID wrappers for all entity types
//!
//! Ids in this system are opaque strings minted by the external document
//! store, so the wrappers carry a `String` rather than a parsed UUID. Using
//! newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. `generate()` mints a fresh v4 UUID string
//! for the rare cases where this core creates records itself (derived
//! mirror transactions).

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an externally-supplied id
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh random id
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Get the underlying id string
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

define_id!(AccountId);
define_id!(TransactionId);
define_id!(LineItemId);
define_id!(GroupId);
define_id!(OwnerId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_wraps_external_string() {
        let id = AccountId::new("acct-123");
        assert_eq!(id.as_str(), "acct-123");
        assert_eq!(format!("{}", id), "acct-123");
    }

    #[test]
    fn test_generate_is_unique() {
        let a = TransactionId::generate();
        let b = TransactionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = GroupId::new("ops");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ops\"");

        let deserialized: GroupId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // Different ID types are distinct at compile time; only the
        // underlying strings can be compared.
        let account_id = AccountId::new("x");
        let group_id = GroupId::new("x");
        assert_eq!(account_id.as_str(), group_id.as_str());
    }
}
