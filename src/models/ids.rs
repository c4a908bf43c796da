//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, OnceLock, PoisonError};
use uuid::Uuid;

/// Stored form of an ID: a UUID, or an opaque string written by older
/// clients (e.g. an ISO timestamp), kept verbatim so it survives a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum IdValue {
    Uuid(Uuid),
    Legacy(&'static str),
}

impl IdValue {
    fn from_stored(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(match Uuid::parse_str(raw) {
            Ok(uuid) => Self::Uuid(uuid),
            Err(_) => Self::Legacy(intern_legacy(raw)),
        })
    }
}

/// Legacy IDs live for the whole process; interning keeps repeated loads of
/// the same collection from allocating them again.
fn intern_legacy(raw: &str) -> &'static str {
    static LEGACY_IDS: OnceLock<Mutex<HashSet<&'static str>>> = OnceLock::new();

    let mut ids = LEGACY_IDS
        .get_or_init(Default::default)
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(&existing) = ids.get(raw) {
        return existing;
    }
    let leaked: &'static str = Box::leak(raw.to_owned().into_boxed_str());
    ids.insert(leaked);
    leaked
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(IdValue);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(IdValue::Uuid(Uuid::new_v4()))
            }

            /// Get the underlying UUID, if this is not a legacy ID
            pub fn as_uuid(&self) -> Option<&Uuid> {
                match &self.0 {
                    IdValue::Uuid(uuid) => Some(uuid),
                    IdValue::Legacy(_) => None,
                }
            }

            /// Whether this ID was written by an older client in a non-UUID form
            pub fn is_legacy(&self) -> bool {
                matches!(self.0, IdValue::Legacy(_))
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(IdValue::Uuid(Uuid::parse_str(s)?)))
            }

            /// Check whether user input refers to this ID, either as the
            /// full UUID (optionally prefixed), the short display form, or
            /// the verbatim legacy string
            pub fn matches(&self, input: &str) -> bool {
                let input = input.trim();
                match self.0 {
                    IdValue::Legacy(raw) => input == raw,
                    IdValue::Uuid(_) => {
                        input.eq_ignore_ascii_case(&self.to_string())
                            || input.parse::<Self>().map(|id| id == *self).unwrap_or(false)
                    }
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match &self.0 {
                    IdValue::Uuid(uuid) => write!(f, "{}{}", $display_prefix, &uuid.to_string()[..8]),
                    IdValue::Legacy(raw) => write!(f, "{}", raw),
                }
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(IdValue::Uuid(uuid))
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(IdValue::Uuid(uuid)));
                }
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(IdValue::Uuid(Uuid::parse_str(s)?)))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match &self.0 {
                    IdValue::Uuid(uuid) => serializer.collect_str(uuid),
                    IdValue::Legacy(raw) => serializer.serialize_str(raw),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                IdValue::from_stored(&raw)
                    .map(Self)
                    .ok_or_else(|| de::Error::custom("id cannot be empty"))
            }
        }
    };
}

define_id!(IncomeId, "inc-");
define_id!(ExpenseId, "exp-");
define_id!(InvestmentId, "inv-");
define_id!(GoalId, "goal-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = IncomeId::new();
        assert!(!id.as_uuid().unwrap().is_nil());
        assert!(!id.is_legacy());
    }

    #[test]
    fn test_id_display() {
        let id = InvestmentId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("inv-"));
        assert_eq!(display.len(), 12);

        let goal = GoalId::new().to_string();
        assert!(goal.starts_with("goal-"));
        assert_eq!(goal.len(), 13);
    }

    #[test]
    fn test_id_serialization() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = IncomeId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().unwrap().to_string(), uuid_str);

        let prefixed: IncomeId = format!("inc-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_matches_short_and_full_forms() {
        let id = IncomeId::parse("550e8400-e29b-41d4-a716-446655440000").unwrap();

        assert!(id.matches("inc-550e8400"));
        assert!(id.matches("INC-550E8400"));
        assert!(id.matches("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!id.matches("inc-00000000"));
        assert!(!id.matches("Salary"));
    }

    #[test]
    fn test_legacy_string_id_is_kept_verbatim() {
        let id: ExpenseId = serde_json::from_str(r#""2024-05-01T10:00:00.000Z""#).unwrap();

        assert!(id.is_legacy());
        assert!(id.as_uuid().is_none());
        assert_eq!(id.to_string(), "2024-05-01T10:00:00.000Z");
        assert!(id.matches("2024-05-01T10:00:00.000Z"));
        assert!(!id.matches("2024-05-01"));
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            r#""2024-05-01T10:00:00.000Z""#
        );

        let again: ExpenseId = serde_json::from_str(r#""2024-05-01T10:00:00.000Z""#).unwrap();
        assert_eq!(id, again);
        assert_ne!(id, ExpenseId::new());
    }

    #[test]
    fn test_empty_id_is_rejected() {
        assert!(serde_json::from_str::<GoalId>(r#""""#).is_err());
        assert!(serde_json::from_str::<GoalId>(r#""   ""#).is_err());
    }
}
