use crate::db::index::ValueIndex;
use serde::{Deserialize, Serialize};

///
/// IndexReport
/// Live index snapshot report.
///

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct IndexReport {
    /// Resident buckets, including ones emptied by deletion.
    pub buckets: u64,

    /// Buckets currently holding no identifiers.
    pub empty_buckets: u64,

    /// Indexed identifiers across all buckets.
    pub entries: u64,

    /// Approximate bytes used (keys + slots).
    pub memory_bytes: u64,

    /// Buckets containing a duplicate identifier. Non-zero means a defect
    /// in this crate, not bad caller input.
    pub corrupted_buckets: u64,
}

impl ValueIndex {
    /// Build a point-in-time snapshot of bucket and entry accounting for
    /// observability surfaces.
    #[must_use]
    pub fn report(&self) -> IndexReport {
        let mut report = IndexReport::default();

        for (_, bucket) in self.iter_buckets() {
            report.buckets += 1;
            report.entries += bucket.len() as u64;
            if bucket.is_empty() {
                report.empty_buckets += 1;
            }
            if bucket.find_duplicate().is_some() {
                report.corrupted_buckets += 1;
            }
        }

        report.memory_bytes = self.memory_bytes();

        report
    }
}
