//! The aggregation pipeline.
//!
//! Pure transformations from a vehicle record sequence to the four
//! chart-ready summary structures of the population dashboard:
//!
//! - **Categorical count**: rows per value of a categorical field, with
//!   an unknown bucket for absent values.
//! - **Yearly average**: mean of a numeric field per group key, absent
//!   values excluded rather than zeroed.
//! - **Trend matrix**: group × category counts flattened into aligned
//!   per-category sequences over a numerically sorted axis.
//! - **Distribution**: ungrouped category counts.
//!
//! Each aggregator is an explicit fold with an empty mapping as its
//! identity element, total over any finite input (the empty sequence
//! yields the structurally valid empty result), and independent of the
//! other three — they only ever read the shared row slice. A
//! [`Snapshot`] runs all four and hands the results over as one value.

mod average;
mod count;
mod distribution;
mod trend;

pub use average::{average_by, YearlyAverage};
pub use count::{count_by, CategoricalCount, UNKNOWN_LABEL};
pub use distribution::{distribution_by, Distribution};
pub use trend::{build_trend, TrendMatrix};

use serde::Serialize;

use crate::record::VehicleRecord;

/// One aggregate view, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AggregateResult {
    /// Counts per value of a categorical field.
    CategoricalCount(CategoricalCount),
    /// Per-group mean of a numeric field.
    YearlyAverage(YearlyAverage),
    /// Group × category count matrix.
    TrendMatrix(TrendMatrix),
    /// Ungrouped category distribution.
    Distribution(Distribution),
}

/// All four dashboard views computed from one row sequence.
///
/// Delivered as a single value so consumers never observe partial
/// results. A snapshot holds no incremental state: it is recomputed
/// wholesale from the rows and replaced, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    /// Vehicle count per manufacturer.
    pub make_counts: CategoricalCount,
    /// Mean electric range per model year.
    pub range_by_year: YearlyAverage,
    /// Vehicle-type counts per model year.
    pub type_trend: TrendMatrix,
    /// Overall vehicle-type distribution.
    pub type_distribution: Distribution,
}

impl Snapshot {
    /// Run the four independent aggregators over `rows`.
    #[must_use]
    pub fn compute(rows: &[VehicleRecord]) -> Self {
        Self {
            make_counts: CategoricalCount::by_make(rows),
            range_by_year: YearlyAverage::range_by_year(rows),
            type_trend: TrendMatrix::type_by_year(rows),
            type_distribution: Distribution::by_vehicle_type(rows),
        }
    }

    /// The snapshot's views as tagged values, in dashboard order
    /// (makes, range, trend, distribution).
    #[must_use]
    pub fn results(&self) -> [AggregateResult; 4] {
        [
            AggregateResult::CategoricalCount(self.make_counts.clone()),
            AggregateResult::YearlyAverage(self.range_by_year.clone()),
            AggregateResult::TrendMatrix(self.type_trend.clone()),
            AggregateResult::Distribution(self.type_distribution.clone()),
        ]
    }
}
