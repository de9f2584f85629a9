//! # EVPop-Viz
//!
//! Aggregation library for vehicle-population dashboards.
//!
//! Turns a flat table of vehicle records into four independent,
//! chart-ready summary views: counts per manufacturer, mean electric
//! range per model year, a year × vehicle-type trend matrix, and the
//! overall vehicle-type distribution. The aggregation pipeline is pure —
//! CSV loading, chart shaping, and color assignment sit around it as
//! separate modules and never leak into it.
//!
//! ## Quick Start
//!
//! ```rust
//! use evpop_viz::prelude::*;
//!
//! let rows = vec![
//!     VehicleRecord {
//!         make: Some("Tesla".to_string()),
//!         model_year: Some(2020),
//!         electric_range: Some(250.0),
//!         vehicle_type: Some("BEV".to_string()),
//!     },
//!     VehicleRecord {
//!         make: Some("Nissan".to_string()),
//!         model_year: Some(2020),
//!         electric_range: Some(150.0),
//!         vehicle_type: Some("BEV".to_string()),
//!     },
//! ];
//!
//! let snapshot = Snapshot::compute(&rows);
//! assert_eq!(snapshot.make_counts.get("Tesla"), 1);
//! assert_eq!(snapshot.range_by_year.get(2020), Some(Some(200.0)));
//!
//! let charts = dashboard_charts(&snapshot, &mut SeriesPalette::with_seed(0));
//! assert_eq!(charts.len(), 4);
//! ```
//!
//! ## Design
//!
//! - Every aggregator is a pure, total function of the row slice; the
//!   empty input yields structurally valid empty results.
//! - Absent fields are policy, not errors: flat counters keep an
//!   `"Unknown"` bucket, the averager excludes absent values from both
//!   sum and divisor, and the trend matrix skips rows missing either
//!   axis.
//! - The trend axis is ordered by numeric year value, never by string
//!   representation.
//! - Results are plain immutable values; recomputation replaces them
//!   wholesale.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]

// ============================================================================
// Core Modules
// ============================================================================

/// The vehicle record model.
pub mod record;

/// Row acquisition from CSV input.
pub mod reader;

/// The aggregation pipeline (counts, averages, trend matrix, distribution).
pub mod aggregate;

// ============================================================================
// Presentation Modules
// ============================================================================

/// Chart-shaped views of the aggregates.
pub mod chart;

/// Color types for chart series.
pub mod color;

/// Deterministic series-color assignment.
pub mod palette;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for evpop-viz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust,ignore
/// use evpop_viz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::aggregate::{
        average_by, build_trend, count_by, distribution_by, AggregateResult, CategoricalCount,
        Distribution, Snapshot, TrendMatrix, YearlyAverage, UNKNOWN_LABEL,
    };
    pub use crate::chart::{dashboard_charts, ChartData, ChartKind, Series};
    pub use crate::color::{Hsla, Rgba};
    pub use crate::error::{Error, Result};
    pub use crate::palette::SeriesPalette;
    pub use crate::reader::{read_records, read_records_from_path};
    pub use crate::record::VehicleRecord;
}
