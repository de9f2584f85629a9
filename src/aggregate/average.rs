//! Grouped averaging of a numeric field.
//!
//! Folds rows into a per-group `(sum, present-count)` accumulator and
//! divides at the end. Absent values are excluded from both sum and
//! divisor; a group whose rows all lack the value is reported as
//! `None`, never as a numeric zero.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::record::VehicleRecord;

/// Mean of a numeric field per group key.
///
/// Keyed by group value in ascending numeric order. An entry of `None`
/// marks a group that occurred in the input but had no present values;
/// consumers must render it as a gap, not as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct YearlyAverage {
    averages: BTreeMap<i32, Option<f64>>,
}

impl YearlyAverage {
    /// Mean electric range per model year.
    #[must_use]
    pub fn range_by_year(rows: &[VehicleRecord]) -> Self {
        average_by(rows, |r| r.model_year, |r| r.electric_range)
    }

    /// The average for `year`.
    ///
    /// Outer `None`: the year never occurred. Inner `None`: the year
    /// occurred but no row carried a present value.
    #[must_use]
    pub fn get(&self, year: i32) -> Option<Option<f64>> {
        self.averages.get(&year).copied()
    }

    /// Number of distinct groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.averages.len()
    }

    /// Whether no groups were observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.averages.is_empty()
    }

    /// Iterate over `(year, average)` pairs in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, Option<f64>)> + '_ {
        self.averages.iter().map(|(&year, &avg)| (year, avg))
    }
}

/// Group rows by `group_field` and average `value_field` within each group.
///
/// Rows with an absent group key belong to no group and are skipped.
/// Rows with an absent value are excluded from both the sum and the
/// divisor for their group, so absent values never drag the mean toward
/// zero. Every distinct group key present in the input is emitted, even
/// when its average is undefined.
#[must_use]
pub fn average_by<G, V>(rows: &[VehicleRecord], group_field: G, value_field: V) -> YearlyAverage
where
    G: Fn(&VehicleRecord) -> Option<i32>,
    V: Fn(&VehicleRecord) -> Option<f64>,
{
    // (sum of present values, number of present values) per group
    let mut groups: BTreeMap<i32, (f64, u32)> = BTreeMap::new();
    for row in rows {
        let Some(key) = group_field(row) else { continue };
        let entry = groups.entry(key).or_insert((0.0, 0));
        if let Some(value) = value_field(row) {
            entry.0 += value;
            entry.1 += 1;
        }
    }

    let averages = groups
        .into_iter()
        .map(|(key, (sum, present))| {
            let mean = (present > 0).then(|| sum / f64::from(present));
            (key, mean)
        })
        .collect();

    YearlyAverage { averages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(year: Option<i32>, range: Option<f64>) -> VehicleRecord {
        VehicleRecord {
            model_year: year,
            electric_range: range,
            ..VehicleRecord::default()
        }
    }

    #[test]
    fn test_average_per_year() {
        let rows = vec![
            record(Some(2020), Some(250.0)),
            record(Some(2020), Some(150.0)),
            record(Some(2021), Some(300.0)),
        ];
        let avg = YearlyAverage::range_by_year(&rows);
        assert_relative_eq!(avg.get(2020).unwrap().unwrap(), 200.0);
        assert_relative_eq!(avg.get(2021).unwrap().unwrap(), 300.0);
    }

    #[test]
    fn test_average_excludes_absent_values() {
        // The absent range must not count as zero: mean is 250, not 125.
        let rows = vec![record(Some(2020), Some(250.0)), record(Some(2020), None)];
        let avg = YearlyAverage::range_by_year(&rows);
        assert_relative_eq!(avg.get(2020).unwrap().unwrap(), 250.0);
    }

    #[test]
    fn test_average_all_absent_is_undefined() {
        let rows = vec![record(Some(2019), None), record(Some(2019), None)];
        let avg = YearlyAverage::range_by_year(&rows);
        assert_eq!(avg.get(2019), Some(None));
    }

    #[test]
    fn test_average_emits_every_group() {
        let rows = vec![record(Some(2019), None), record(Some(2020), Some(100.0))];
        let avg = YearlyAverage::range_by_year(&rows);
        assert_eq!(avg.len(), 2);
    }

    #[test]
    fn test_average_skips_rows_without_group_key() {
        let rows = vec![record(None, Some(500.0)), record(Some(2020), Some(100.0))];
        let avg = YearlyAverage::range_by_year(&rows);
        assert_eq!(avg.len(), 1);
        assert_relative_eq!(avg.get(2020).unwrap().unwrap(), 100.0);
    }

    #[test]
    fn test_average_empty_input() {
        let avg = YearlyAverage::range_by_year(&[]);
        assert!(avg.is_empty());
        assert_eq!(avg.get(2020), None);
    }

    #[test]
    fn test_average_iter_ascending_years() {
        let rows = vec![
            record(Some(2021), Some(1.0)),
            record(Some(2019), Some(1.0)),
            record(Some(2020), Some(1.0)),
        ];
        let avg = YearlyAverage::range_by_year(&rows);
        let years: Vec<i32> = avg.iter().map(|(year, _)| year).collect();
        assert_eq!(years, vec![2019, 2020, 2021]);
    }

    #[test]
    fn test_average_idempotent() {
        let rows = vec![record(Some(2020), Some(250.0)), record(Some(2020), None)];
        assert_eq!(YearlyAverage::range_by_year(&rows), YearlyAverage::range_by_year(&rows));
    }
}
