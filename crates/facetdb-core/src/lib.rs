//! Core runtime for FacetDB: the partitioned value index, its key and
//! bucket types, and the observability surface exported via the `prelude`.
//!
//! The index is a single-threaded, run-to-completion structure. Every
//! operation is one synchronous step bounded by the size of one bucket;
//! hosts that serve concurrent callers wrap the index in their own mutual
//! exclusion boundary.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod db;
pub mod obs;
pub mod types;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, reports, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        db::index::{Bucket, IndexInsertOutcome, IndexKey, IndexRemoveOutcome, ValueIndex},
        types::{EntityId, ModelId, PartitionId, TableId},
    };
}
