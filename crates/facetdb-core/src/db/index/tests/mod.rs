mod property;

use crate::{
    db::index::ValueIndex,
    types::{EntityId, ModelId, PartitionId, TableId},
};

/// Shorthand constructors so scenarios read as plain integer tuples.
pub(super) fn ids(
    model: u64,
    table: u64,
    partition: u64,
) -> (ModelId, TableId, PartitionId) {
    (
        ModelId::new(model),
        TableId::new(table),
        PartitionId::new(partition),
    )
}

pub(super) fn create(index: &mut ValueIndex, model: u64, table: u64, entity: u64, partition: u64) {
    let (m, t, p) = ids(model, table, partition);
    index.create(m, t, EntityId::new(entity), p);
}

pub(super) fn query(index: &ValueIndex, model: u64, table: u64, partition: u64) -> Vec<u64> {
    let (m, t, p) = ids(model, table, partition);
    index.query(m, t, p).into_iter().map(EntityId::get).collect()
}

pub(super) fn exists(index: &ValueIndex, model: u64, table: u64, entity: u64, partition: u64) -> bool {
    let (m, t, p) = ids(model, table, partition);
    index.exists(m, t, EntityId::new(entity), p)
}

pub(super) fn delete(index: &mut ValueIndex, model: u64, table: u64, entity: u64, partition: u64) {
    let (m, t, p) = ids(model, table, partition);
    index.delete(m, t, EntityId::new(entity), p);
}
