pub mod diagnostics;
pub mod index;

pub use diagnostics::IndexReport;
pub use index::{
    Bucket, IndexCorruption, IndexInsertOutcome, IndexKey, IndexRemoveOutcome, ValueIndex,
};
