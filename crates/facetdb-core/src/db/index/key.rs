use crate::types::{ModelId, PartitionId, TableId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// IndexKey
///
/// Composite key identifying one bucket: `(model, table, partition)`.
///
/// - Equality is structural; all three fields participate.
/// - Ordering is lexicographic in field order, so map iteration and
///   diagnostic snapshots are deterministic.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct IndexKey {
    pub model: ModelId,
    pub table: TableId,
    pub partition: PartitionId,
}

impl IndexKey {
    #[must_use]
    pub const fn new(model: ModelId, table: TableId, partition: PartitionId) -> Self {
        Self {
            model,
            table,
            partition,
        }
    }
}

impl Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.model, self.table, self.partition)
    }
}

///
/// TESTS
///
