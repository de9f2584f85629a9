//! Year × category trend matrix.
//!
//! The reshaping heart of the pipeline: a nested group × category count
//! flattened into one count sequence per category, all aligned to a
//! shared, numerically sorted group axis.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::record::VehicleRecord;

/// Counts of a categorical field over a sorted numeric group axis.
///
/// `years` holds the distinct group keys in strictly ascending numeric
/// order; every category's sequence has exactly that length, with zero
/// in each cell the input never touched. The category set is stable
/// within one matrix, so sequences and axis always line up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrendMatrix {
    years: Vec<i32>,
    series: BTreeMap<String, Vec<u64>>,
}

impl TrendMatrix {
    /// Vehicle-type counts per model year.
    #[must_use]
    pub fn type_by_year(rows: &[VehicleRecord]) -> Self {
        build_trend(rows, |r| r.model_year, |r| r.vehicle_type.as_deref())
    }

    /// The group axis, strictly ascending.
    #[must_use]
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The aligned count sequence for `category`, if it occurred.
    #[must_use]
    pub fn series(&self, category: &str) -> Option<&[u64]> {
        self.series.get(category).map(Vec::as_slice)
    }

    /// The distinct categories observed in the input.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Iterate over `(category, aligned counts)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u64])> {
        self.series
            .iter()
            .map(|(category, counts)| (category.as_str(), counts.as_slice()))
    }

    /// Whether the matrix holds no cells (empty axis, empty category set).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

/// Build the group × category count matrix, flattened per category.
///
/// Pass one folds the rows into a nested count keyed by group then
/// category; a row missing either field has no 2-D cell to land in and
/// is skipped (unlike the flat counters, which keep an unknown bucket).
/// Pass two derives the group axis from the `i32` keys — ascending by
/// numeric value, so year 2 can never sort after year 19 the way its
/// string form would — and emits one zero-filled sequence per category
/// over that axis.
#[must_use]
pub fn build_trend<'a, G, C>(
    rows: &'a [VehicleRecord],
    group_field: G,
    category_field: C,
) -> TrendMatrix
where
    G: Fn(&'a VehicleRecord) -> Option<i32>,
    C: Fn(&'a VehicleRecord) -> Option<&'a str>,
{
    let mut cells: BTreeMap<i32, BTreeMap<&str, u64>> = BTreeMap::new();
    for row in rows {
        let (Some(key), Some(category)) = (group_field(row), category_field(row)) else {
            continue;
        };
        *cells.entry(key).or_default().entry(category).or_insert(0) += 1;
    }

    let years: Vec<i32> = cells.keys().copied().collect();
    let categories: BTreeSet<&str> = cells.values().flat_map(|row| row.keys().copied()).collect();

    let series = categories
        .into_iter()
        .map(|category| {
            let counts = years
                .iter()
                .map(|year| cells[year].get(category).copied().unwrap_or(0))
                .collect();
            (category.to_owned(), counts)
        })
        .collect();

    TrendMatrix { years, series }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: Option<i32>, vtype: Option<&str>) -> VehicleRecord {
        VehicleRecord {
            model_year: year,
            vehicle_type: vtype.map(str::to_owned),
            ..VehicleRecord::default()
        }
    }

    #[test]
    fn test_trend_axis_and_series() {
        let rows = vec![
            record(Some(2020), Some("BEV")),
            record(Some(2020), Some("BEV")),
            record(Some(2021), Some("PHEV")),
        ];
        let trend = TrendMatrix::type_by_year(&rows);
        assert_eq!(trend.years(), &[2020, 2021]);
        assert_eq!(trend.series("BEV"), Some(&[2, 0][..]));
        assert_eq!(trend.series("PHEV"), Some(&[0, 1][..]));
    }

    #[test]
    fn test_trend_axis_sorts_numerically() {
        // As strings, 2 would sort after 19; the axis must not.
        let rows = vec![
            record(Some(19), Some("BEV")),
            record(Some(2), Some("BEV")),
            record(Some(100), Some("BEV")),
        ];
        let trend = TrendMatrix::type_by_year(&rows);
        assert_eq!(trend.years(), &[2, 19, 100]);
    }

    #[test]
    fn test_trend_zero_fills_missing_cells() {
        let rows = vec![
            record(Some(2019), Some("BEV")),
            record(Some(2020), Some("PHEV")),
            record(Some(2021), Some("BEV")),
        ];
        let trend = TrendMatrix::type_by_year(&rows);
        assert_eq!(trend.series("BEV"), Some(&[1, 0, 1][..]));
        assert_eq!(trend.series("PHEV"), Some(&[0, 1, 0][..]));
    }

    #[test]
    fn test_trend_skips_rows_missing_either_field() {
        let rows = vec![
            record(Some(2020), Some("BEV")),
            record(None, Some("BEV")),
            record(Some(2020), None),
        ];
        let trend = TrendMatrix::type_by_year(&rows);
        assert_eq!(trend.years(), &[2020]);
        assert_eq!(trend.series("BEV"), Some(&[1][..]));
    }

    #[test]
    fn test_trend_series_lengths_match_axis() {
        let rows = vec![
            record(Some(2018), Some("BEV")),
            record(Some(2019), Some("PHEV")),
            record(Some(2020), Some("FCEV")),
        ];
        let trend = TrendMatrix::type_by_year(&rows);
        for (_, counts) in trend.iter() {
            assert_eq!(counts.len(), trend.years().len());
        }
    }

    #[test]
    fn test_trend_column_sums_match_row_counts() {
        let rows = vec![
            record(Some(2020), Some("BEV")),
            record(Some(2020), Some("PHEV")),
            record(Some(2020), Some("BEV")),
            record(Some(2021), Some("BEV")),
        ];
        let trend = TrendMatrix::type_by_year(&rows);
        let col_2020: u64 = trend.iter().map(|(_, counts)| counts[0]).sum();
        let col_2021: u64 = trend.iter().map(|(_, counts)| counts[1]).sum();
        assert_eq!(col_2020, 3);
        assert_eq!(col_2021, 1);
    }

    #[test]
    fn test_trend_empty_input() {
        let trend = TrendMatrix::type_by_year(&[]);
        assert!(trend.is_empty());
        assert_eq!(trend.years(), &[] as &[i32]);
        assert_eq!(trend.categories().count(), 0);
    }

    #[test]
    fn test_trend_unknown_category_has_no_series() {
        let trend = TrendMatrix::type_by_year(&[record(Some(2020), Some("BEV"))]);
        assert_eq!(trend.series("FCEV"), None);
    }

    #[test]
    fn test_trend_idempotent() {
        let rows = vec![
            record(Some(2020), Some("BEV")),
            record(Some(2021), Some("PHEV")),
        ];
        assert_eq!(TrendMatrix::type_by_year(&rows), TrendMatrix::type_by_year(&rows));
    }
}
