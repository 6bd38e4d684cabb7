//! ## Crate layout
//! - `core`: runtime value index, keys, buckets, and observability.
//!
//! The `prelude` module mirrors the runtime surface a host storage engine
//! uses when wiring the index into its own call context.

pub use facetdb_core as core;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// using _ brings traits into scope and avoids name conflicts
///

pub mod prelude {
    pub use crate::core::{
        db::{
            IndexReport,
            index::{
                Bucket, IndexCorruption, IndexInsertOutcome, IndexKey, IndexRemoveOutcome,
                ValueIndex,
            },
        },
        obs::{index_report, metrics_report, metrics_reset},
        types::{EntityId, ModelId, PartitionId, TableId},
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn facade_exposes_the_runtime_surface() {
        metrics_reset();

        let mut index = ValueIndex::new();

        index.create(
            ModelId::new(0),
            TableId::new(69),
            EntityId::new(420),
            PartitionId::new(1),
        );

        assert!(index.exists(
            ModelId::new(0),
            TableId::new(69),
            EntityId::new(420),
            PartitionId::new(1),
        ));

        let report = index_report(&index);
        assert_eq!(report.buckets, 1);
        assert_eq!(report.entries, 1);

        let metrics = metrics_report();
        assert_eq!(metrics.ops.create_calls, 1);
        assert_eq!(metrics.ops.exists_calls, 1);
    }

    #[test]
    fn version_matches_the_workspace_package() {
        assert_eq!(crate::VERSION, env!("CARGO_PKG_VERSION"));
    }
}
