//! Chart-shaped views of the aggregates.
//!
//! A chart is an axis of labels plus one or more named numeric series
//! aligned to that axis — the shape bar/line/pie widgets consume. The
//! conversions here do the reshaping; series colors come from an
//! injected [`SeriesPalette`] at the very end, so the aggregates stay
//! color-free.

use serde::Serialize;

use crate::aggregate::{
    AggregateResult, CategoricalCount, Distribution, Snapshot, TrendMatrix, YearlyAverage,
};
use crate::color::Rgba;
use crate::palette::SeriesPalette;

/// Widget family a chart is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartKind {
    /// Vertical bars, one per label.
    Bar,
    /// Connected points over the label axis.
    Line,
    /// Proportional slices, one per label.
    Pie,
}

/// One named numeric sequence aligned to its chart's label axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend label.
    pub label: String,
    /// Values aligned to the chart labels; `None` is a gap, not a zero.
    pub values: Vec<Option<f64>>,
    /// Decorative color, assigned via [`ChartData::colored`].
    pub color: Option<Rgba>,
}

impl Series {
    /// Create an uncolored series.
    #[must_use]
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self {
            label: label.into(),
            values,
            color: None,
        }
    }
}

/// A complete chart payload: kind, title, labels, and aligned series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    /// Widget family.
    pub kind: ChartKind,
    /// Chart title.
    pub title: String,
    /// Axis labels.
    pub labels: Vec<String>,
    /// Aligned series; every `values` has `labels.len()` entries.
    pub series: Vec<Series>,
}

impl ChartData {
    /// Reshape a categorical count into a bar chart
    /// (labels = bucket keys, one series = bucket values).
    #[must_use]
    pub fn from_counts(title: &str, series_label: &str, counts: &CategoricalCount) -> Self {
        let labels = counts.iter().map(|(label, _)| label.to_owned()).collect();
        let values = counts.iter().map(|(_, count)| Some(count as f64)).collect();
        Self {
            kind: ChartKind::Bar,
            title: title.to_owned(),
            labels,
            series: vec![Series::new(series_label, values)],
        }
    }

    /// Reshape a distribution into a pie chart
    /// (labels = categories, one series = their counts).
    #[must_use]
    pub fn from_distribution(title: &str, series_label: &str, dist: &Distribution) -> Self {
        let labels = dist.iter().map(|(category, _)| category.to_owned()).collect();
        let values = dist.iter().map(|(_, count)| Some(count as f64)).collect();
        Self {
            kind: ChartKind::Pie,
            title: title.to_owned(),
            labels,
            series: vec![Series::new(series_label, values)],
        }
    }

    /// Reshape a yearly average into a line chart
    /// (labels = years, one series of per-year means).
    ///
    /// Years whose average is undefined stay `None` in the series — a
    /// gap in the line, never a zero.
    #[must_use]
    pub fn from_yearly_average(title: &str, series_label: &str, avg: &YearlyAverage) -> Self {
        let labels = avg.iter().map(|(year, _)| year.to_string()).collect();
        let values = avg.iter().map(|(_, mean)| mean).collect();
        Self {
            kind: ChartKind::Line,
            title: title.to_owned(),
            labels,
            series: vec![Series::new(series_label, values)],
        }
    }

    /// Reshape a trend matrix into a multi-series line chart
    /// (labels = year axis, one named series per category).
    #[must_use]
    pub fn from_trend(title: &str, trend: &TrendMatrix) -> Self {
        let labels = trend.years().iter().map(ToString::to_string).collect();
        let series = trend
            .iter()
            .map(|(category, counts)| {
                let values = counts.iter().map(|&count| Some(count as f64)).collect();
                Series::new(category, values)
            })
            .collect();
        Self {
            kind: ChartKind::Line,
            title: title.to_owned(),
            labels,
            series,
        }
    }

    /// Reshape any tagged aggregate into its default chart kind.
    ///
    /// `series_label` names the single series of count, distribution,
    /// and average charts; trend charts name one series per category
    /// and ignore it.
    #[must_use]
    pub fn from_aggregate(title: &str, series_label: &str, aggregate: &AggregateResult) -> Self {
        match aggregate {
            AggregateResult::CategoricalCount(counts) => {
                Self::from_counts(title, series_label, counts)
            }
            AggregateResult::YearlyAverage(avg) => {
                Self::from_yearly_average(title, series_label, avg)
            }
            AggregateResult::TrendMatrix(trend) => Self::from_trend(title, trend),
            AggregateResult::Distribution(dist) => {
                Self::from_distribution(title, series_label, dist)
            }
        }
    }

    /// Assign one palette color to each series, in order.
    #[must_use]
    pub fn colored(mut self, palette: &mut SeriesPalette) -> Self {
        for series in &mut self.series {
            series.color = Some(palette.next_color());
        }
        self
    }
}

/// Build the four titled dashboard views from one snapshot, colored
/// from `palette`.
#[must_use]
pub fn dashboard_charts(snapshot: &Snapshot, palette: &mut SeriesPalette) -> Vec<ChartData> {
    vec![
        ChartData::from_counts(
            "EV Distribution by Make",
            "Number of Electric Vehicles",
            &snapshot.make_counts,
        )
        .colored(palette),
        ChartData::from_yearly_average(
            "Average Electric Range by Model Year",
            "Average Electric Range by Year",
            &snapshot.range_by_year,
        )
        .colored(palette),
        ChartData::from_trend("Trend of Electric Vehicle Types by Year", &snapshot.type_trend)
            .colored(palette),
        ChartData::from_distribution(
            "Distribution of Electric Vehicle Types",
            "Electric Vehicle Type Distribution",
            &snapshot.type_distribution,
        )
        .colored(palette),
    ]
}
