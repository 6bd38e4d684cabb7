mod bucket;
mod key;

#[cfg(test)]
mod tests;

pub use bucket::Bucket;
pub use key::IndexKey;

use crate::{
    obs::sink::{self, MetricsEvent},
    types::{EntityId, ModelId, PartitionId, TableId},
};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// IndexCorruption
///
/// Internal-consistency defect surfaced by [`ValueIndex::verify`].
///
/// Duplicates cannot be produced through the public operations; one showing
/// up means a defect in this crate, never bad caller input. The contract
/// operations themselves are total and have no error paths.
///

#[derive(Debug, ThisError)]
pub enum IndexCorruption {
    #[error("bucket {key} contains duplicate entity {entity}")]
    DuplicateEntity { key: IndexKey, entity: EntityId },
}

///
/// IndexInsertOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexInsertOutcome {
    Inserted,
    Skipped,
}

///
/// IndexRemoveOutcome
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IndexRemoveOutcome {
    Removed,
    Skipped,
}

///
/// ValueIndex
///
/// Mapping from composite `(model, table, partition)` keys to buckets of
/// entity identifiers.
///
/// - Buckets are created lazily; a key that was never written is
///   indistinguishable from an empty bucket.
/// - The index owns its buckets exclusively. Queries hand back independent
///   snapshots; callers never hold references into a live bucket.
/// - Every operation is a single synchronous step bounded by the size of
///   one bucket. The structure defines no locking policy; hosts serving
///   concurrent callers wrap it in their own mutual exclusion boundary.
///

#[derive(Clone, Debug, Default)]
pub struct ValueIndex {
    buckets: BTreeMap<IndexKey, Bucket>,
}

impl ValueIndex {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Insert `entity` into the bucket for `(model, table, partition)`.
    ///
    /// Idempotent: if the entity is already present anywhere in that bucket
    /// the call changes nothing and reports [`IndexInsertOutcome::Skipped`].
    /// A bucket never holds the same identifier twice, no matter how often
    /// `create` is repeated. Never fails; never shrinks a bucket.
    pub fn create(
        &mut self,
        model: ModelId,
        table: TableId,
        entity: EntityId,
        partition: PartitionId,
    ) -> IndexInsertOutcome {
        let key = IndexKey::new(model, table, partition);
        let bucket = self.buckets.entry(key).or_default();

        let outcome = if bucket.insert(entity) {
            IndexInsertOutcome::Inserted
        } else {
            IndexInsertOutcome::Skipped
        };

        sink::record(MetricsEvent::Create { outcome });

        outcome
    }

    /// Full ordered snapshot of the bucket for `(model, table, partition)`.
    ///
    /// A key that was never created yields an empty vec, not an error.
    /// Entries stored under a different partition of the same
    /// `(model, table)` are never returned. The result is a value copy;
    /// mutating it does not affect the index. Two calls without an
    /// intervening mutation return identical sequences.
    #[must_use]
    pub fn query(&self, model: ModelId, table: TableId, partition: PartitionId) -> Vec<EntityId> {
        let key = IndexKey::new(model, table, partition);
        let entities = self
            .buckets
            .get(&key)
            .map(Bucket::to_vec)
            .unwrap_or_default();

        sink::record(MetricsEvent::Query {
            rows: entities.len() as u64,
        });

        entities
    }

    /// Returns `true` if `entity` is present in the bucket for
    /// `(model, table, partition)`.
    ///
    /// Existence is a per-partition fact: this check addresses the same
    /// composite key `create` and `delete` use. Pure lookup, no mutation.
    #[must_use]
    pub fn exists(
        &self,
        model: ModelId,
        table: TableId,
        entity: EntityId,
        partition: PartitionId,
    ) -> bool {
        let key = IndexKey::new(model, table, partition);
        let present = self
            .buckets
            .get(&key)
            .is_some_and(|bucket| bucket.contains(entity));

        sink::record(MetricsEvent::Exists);

        present
    }

    /// Remove `entity` from the bucket for `(model, table, partition)`.
    ///
    /// Removal is swap-remove: the bucket's last element moves into the
    /// vacated slot, so order is not preserved across deletions. Deleting
    /// an absent entity, whether wrong partition, wrong table, never
    /// inserted, or already removed, is a silent no-op reported as
    /// [`IndexRemoveOutcome::Skipped`]. The emptied bucket stays resident.
    pub fn delete(
        &mut self,
        model: ModelId,
        table: TableId,
        entity: EntityId,
        partition: PartitionId,
    ) -> IndexRemoveOutcome {
        let key = IndexKey::new(model, table, partition);
        let removed = self
            .buckets
            .get_mut(&key)
            .is_some_and(|bucket| bucket.swap_remove(entity));

        let outcome = if removed {
            IndexRemoveOutcome::Removed
        } else {
            IndexRemoveOutcome::Skipped
        };

        sink::record(MetricsEvent::Delete { outcome });

        outcome
    }

    /// Number of resident buckets, including ones emptied by deletion.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of indexed identifiers across all buckets.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.buckets.values().map(Bucket::len).sum()
    }

    /// Returns `true` if no bucket holds any identifier.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.values().all(Bucket::is_empty)
    }

    /// Drop every bucket. This is the process-wide state release; there is
    /// no finer-grained teardown.
    pub fn clear(&mut self) {
        self.buckets.clear();
    }

    /// Snapshot all buckets in key order (diagnostics only).
    #[must_use]
    pub fn entries(&self) -> Vec<(IndexKey, Vec<EntityId>)> {
        self.buckets
            .iter()
            .map(|(key, bucket)| (*key, bucket.to_vec()))
            .collect()
    }

    /// Approximate bytes retained by keys and bucket slots.
    #[must_use]
    pub fn memory_bytes(&self) -> u64 {
        let key_bytes = size_of::<IndexKey>() as u64;
        let slot_bytes = size_of::<EntityId>() as u64;

        self.buckets
            .values()
            .map(|bucket| key_bytes + slot_bytes * bucket.len() as u64)
            .sum()
    }

    /// Walk every bucket and report the first duplicate identifier.
    pub fn verify(&self) -> Result<(), IndexCorruption> {
        for (key, bucket) in &self.buckets {
            if let Some(entity) = bucket.find_duplicate() {
                return Err(IndexCorruption::DuplicateEntity { key: *key, entity });
            }
        }

        Ok(())
    }

    pub(crate) fn iter_buckets(&self) -> impl Iterator<Item = (&IndexKey, &Bucket)> {
        self.buckets.iter()
    }
}
