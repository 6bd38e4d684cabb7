//! Identifier newtypes shared across the index surface.
//!
//! All four are opaque unsigned integers handed over by the enclosing
//! storage layer. Any value is valid; there are no construction errors.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

///
/// ModelId
///
/// Identifies one registered component model in the owning storage layer.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct ModelId(u64);

impl ModelId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// TableId
///
/// Identifies one table of the owning storage layer.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct TableId(u64);

impl TableId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// PartitionId
///
/// Identifies one partition of a table. Buckets under different partitions
/// of the same `(model, table)` never see each other's entries.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct PartitionId(u64);

impl PartitionId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// EntityId
///
/// Opaque identifier of a row/entity in the owning storage system. The
/// index never interprets it; it only stores and compares it.
///

#[repr(transparent)]
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct EntityId(u64);

impl EntityId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_integers() {
        let json = serde_json::to_string(&EntityId::new(420)).expect("serialize EntityId");
        assert_eq!(json, "420");

        let id: EntityId = serde_json::from_str("420").expect("deserialize EntityId");
        assert_eq!(id, EntityId::new(420));
    }

    #[test]
    fn ids_order_by_inner_value() {
        assert!(PartitionId::new(1) < PartitionId::new(2));
        assert!(EntityId::new(420) < EntityId::new(1337));
    }

    #[test]
    fn ids_round_trip_their_inner_value() {
        assert_eq!(ModelId::new(7).get(), 7);
        assert_eq!(TableId::new(69).get(), 69);
        assert_eq!(PartitionId::new(1).get(), 1);
        assert_eq!(EntityId::new(1337).get(), 1337);
    }
}
