use crate::types::EntityId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

///
/// Bucket
///
/// Ordered, duplicate-free list of entity identifiers for one composite key.
///
/// - Order is insertion order until a removal occurs. Removal is
///   swap-remove: the tail element moves into the vacated slot, so order is
///   not preserved across removals. Callers depend on that exact reordering
///   for reproducible fixtures; do not "repair" it to a shifting remove.
/// - Membership is decided by scanning the whole bucket, never by checking
///   the tail alone. Buckets are index fan-out and expected to stay small.
///

#[repr(transparent)]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bucket(Vec<EntityId>);

impl Bucket {
    /// Create an empty bucket.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Build a bucket, discarding duplicate identifiers.
    #[must_use]
    pub fn from_entities(entities: Vec<EntityId>) -> Self {
        let mut bucket = Self::new();
        for entity in entities {
            bucket.insert(entity);
        }
        bucket
    }

    /// Return the number of identifiers in the bucket.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the bucket is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the bucket contains the identifier.
    #[must_use]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.0.contains(&entity)
    }

    /// Append an identifier, returning `true` if it was newly inserted.
    pub fn insert(&mut self, entity: EntityId) -> bool {
        if self.contains(entity) {
            return false;
        }
        self.0.push(entity);

        #[cfg(debug_assertions)]
        self.assert_unique();

        true
    }

    /// Remove an identifier, returning `true` if it was present.
    ///
    /// The bucket's current last element is moved into the vacated slot and
    /// the length shrinks by one.
    pub fn swap_remove(&mut self, entity: EntityId) -> bool {
        match self.0.iter().position(|candidate| *candidate == entity) {
            Some(index) => {
                self.0.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Clear all identifiers from the bucket.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Borrow the bucket contents in their current order.
    #[must_use]
    pub fn as_slice(&self) -> &[EntityId] {
        &self.0
    }

    /// Return an iterator over the identifiers.
    pub fn iter(&self) -> std::slice::Iter<'_, EntityId> {
        self.0.iter()
    }

    /// Independent snapshot of the bucket contents.
    #[must_use]
    pub fn to_vec(&self) -> Vec<EntityId> {
        self.0.clone()
    }

    /// Locate a duplicate identifier, should the bucket ever be corrupted.
    pub(crate) fn find_duplicate(&self) -> Option<EntityId> {
        for (i, entity) in self.0.iter().enumerate() {
            if self.0[..i].contains(entity) {
                return Some(*entity);
            }
        }
        None
    }

    #[cfg(debug_assertions)]
    fn assert_unique(&self) {
        debug_assert!(
            self.find_duplicate().is_none(),
            "invariant violation (debug-only): bucket contains a duplicate entity"
        );
    }
}

impl IntoIterator for Bucket {
    type Item = EntityId;
    type IntoIter = std::vec::IntoIter<EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Bucket {
    type Item = &'a EntityId;
    type IntoIter = std::slice::Iter<'a, EntityId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Bucket {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Bucket {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entities = Vec::<EntityId>::deserialize(deserializer)?;
        Ok(Self::from_entities(entities))
    }
}

///
/// TESTS
///
