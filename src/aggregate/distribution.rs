//! Ungrouped category distribution.
//!
//! Structurally the same fold as [`count_by`](super::count_by), kept as
//! its own operation and result type: it feeds the distribution view,
//! whose category vocabulary (vehicle types) is closed and may grow its
//! own validation, unlike the open-ended make labels.

use std::collections::BTreeMap;

use serde::Serialize;

use super::count::UNKNOWN_LABEL;
use crate::record::VehicleRecord;

/// Share of each category value across the whole population.
///
/// Values sum to the total row count; rows with an absent category are
/// collected under [`UNKNOWN_LABEL`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    counts: BTreeMap<String, u64>,
}

impl Distribution {
    /// Count rows per vehicle type.
    #[must_use]
    pub fn by_vehicle_type(rows: &[VehicleRecord]) -> Self {
        distribution_by(rows, |r| r.vehicle_type.as_deref())
    }

    /// The count for `category`, zero when it never occurred.
    #[must_use]
    pub fn get(&self, category: &str) -> u64 {
        self.counts.get(category).copied().unwrap_or(0)
    }

    /// Total across all categories, equal to the number of counted rows.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no rows were counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(category, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(category, &count)| (category.as_str(), count))
    }
}

/// Count rows per value of `field`, ungrouped.
///
/// Same identity element and combining rule as the categorical counter:
/// each row increments exactly one bucket, with absent values collected
/// under [`UNKNOWN_LABEL`].
#[must_use]
pub fn distribution_by<'a, F>(rows: &'a [VehicleRecord], field: F) -> Distribution
where
    F: Fn(&'a VehicleRecord) -> Option<&'a str>,
{
    let mut counts = BTreeMap::new();
    for row in rows {
        let category = field(row).unwrap_or(UNKNOWN_LABEL);
        *counts.entry(category.to_owned()).or_insert(0) += 1;
    }
    Distribution { counts }
}
