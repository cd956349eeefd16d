//! Shared entity primitives.
//!
//! Every persisted record embeds a [`BaseEntity`] carrying the
//! storage-generated key and the creation/modification timestamps. The
//! [`Entity`] capability trait lets the repository, service and HTTP layers be
//! written once and instantiated per entity type.

use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::validation::ValidationErrors;

/// Key type usable as an entity primary key.
pub trait EntityKey:
    Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Convert a monotonically increasing sequence value into a key.
    ///
    /// Returns `None` once the sequence no longer fits the key type.
    fn from_sequence(value: u64) -> Option<Self>;
}

impl EntityKey for i32 {
    fn from_sequence(value: u64) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

impl EntityKey for i64 {
    fn from_sequence(value: u64) -> Option<Self> {
        Self::try_from(value).ok()
    }
}

/// Fields common to every persisted entity.
///
/// Clients may omit all three fields; storage assigns them. Missing values
/// deserialise to the key's default and the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
#[serde(bound(deserialize = "K: Deserialize<'de> + Default"))]
pub struct BaseEntity<K> {
    /// Storage-generated primary key; immutable once assigned.
    pub id: K,
    /// When the row was first stored.
    pub created_date: DateTime<Utc>,
    /// When the row was last written.
    pub updated_date: DateTime<Utc>,
}

impl<K> BaseEntity<K> {
    /// Build a base record with both timestamps set to `now`.
    pub const fn stamped(id: K, now: DateTime<Utc>) -> Self {
        Self {
            id,
            created_date: now,
            updated_date: now,
        }
    }
}

/// Capability trait implemented by every CRUD-managed record.
pub trait Entity:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Primary key type.
    type Key: EntityKey;

    /// Singular resource name used in log events and error messages.
    const RESOURCE: &'static str;

    /// Shared fields.
    fn base(&self) -> &BaseEntity<Self::Key>;

    /// Mutable access to the shared fields, used by storage adapters.
    fn base_mut(&mut self) -> &mut BaseEntity<Self::Key>;

    /// The entity's primary key.
    fn id(&self) -> Self::Key {
        self.base().id
    }

    /// Check required fields, reporting every violation at once.
    ///
    /// # Errors
    /// Returns the collected [`ValidationErrors`] when any check fails.
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Some(0))]
    #[case(42, Some(42))]
    #[case(u64::from(u32::MAX), None)]
    fn i32_sequence_conversion_is_checked(#[case] value: u64, #[case] expected: Option<i32>) {
        assert_eq!(i32::from_sequence(value), expected);
    }

    #[rstest]
    fn missing_base_fields_use_defaults() {
        let base: BaseEntity<i32> = serde_json::from_str("{}").expect("empty object parses");

        assert_eq!(base, BaseEntity::default());
    }

    #[rstest]
    fn stamped_sets_both_timestamps() {
        let now = Utc::now();
        let base = BaseEntity::stamped(7_i64, now);

        assert_eq!(base.id, 7);
        assert_eq!(base.created_date, now);
        assert_eq!(base.updated_date, now);
    }
}
