//! Categorical counting over the row sequence.
//!
//! Folds rows into label → count buckets, starting from an empty
//! mapping. Rows whose field is absent land in the reserved
//! [`UNKNOWN_LABEL`] bucket rather than being dropped, so the bucket
//! totals always account for every input row.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::VehicleRecord;

/// Reserved bucket label for rows whose categorical field is absent.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Counts per value of a categorical field.
///
/// Values are non-negative and sum to the number of rows that produced
/// the count. Key order carries no meaning; display ordering belongs to
/// the consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoricalCount {
    counts: BTreeMap<String, u64>,
}

impl CategoricalCount {
    /// Count rows per manufacturer.
    #[must_use]
    pub fn by_make(rows: &[VehicleRecord]) -> Self {
        count_by(rows, |r| r.make.as_deref())
    }

    /// The count for `label`, zero when the label never occurred.
    #[must_use]
    pub fn get(&self, label: &str) -> u64 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Total across all buckets, equal to the number of counted rows.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no rows were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(label, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(label, &count)| (label.as_str(), count))
    }
}

/// Count rows per value of `field`.
///
/// Every row increments exactly one bucket: the one keyed by its field
/// value, or [`UNKNOWN_LABEL`] when the value is absent. The result is
/// the same for any permutation of `rows`.
#[must_use]
pub fn count_by<'a, F>(rows: &'a [VehicleRecord], field: F) -> CategoricalCount
where
    F: Fn(&'a VehicleRecord) -> Option<&'a str>,
{
    let mut counts = BTreeMap::new();
    for row in rows {
        let label = field(row).unwrap_or(UNKNOWN_LABEL);
        *counts.entry(label.to_owned()).or_insert(0) += 1;
    }
    CategoricalCount { counts }
}
