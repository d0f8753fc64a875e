//! Trend-chart projection of year summaries.
//!
//! The projector maps year rows into a labeled two-series dataset for an
//! external chart renderer. It preserves caller order and never sorts;
//! callers that want a numeric year axis sort before projecting.

use serde::{Deserialize, Serialize};

use crate::constants::chart;
use crate::data::YearSummary;
use crate::types::YearLabel;

/// Vertical axis a trend series is plotted against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesAxis {
    /// Left axis.
    Primary,
    /// Right axis. Renderers keep its gridlines off the chart area.
    Secondary,
}

/// One labeled, axis-tagged series of the trend chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Display label for the series legend.
    pub label: String,
    /// Vertical axis assignment.
    pub axis: SeriesAxis,
    /// Values positionally aligned to the dataset labels.
    pub points: Vec<f64>,
}

/// Two-series dataset positionally aligned to `labels` (same index = same
/// year).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendDataset {
    /// Year labels in projection order.
    pub labels: Vec<YearLabel>,
    /// Distinct-title counts per year, on the primary axis.
    pub job_counts: TrendSeries,
    /// Average salaries per year, rounded for display, on the secondary
    /// axis.
    pub average_salaries: TrendSeries,
}

impl TrendDataset {
    /// `true` when there is nothing to plot; consumers show their "no data"
    /// fallback.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Serialize the dataset for an external chart renderer.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("trend dataset serializes")
    }
}

/// Round a salary to two decimal places for display parity with the tables.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Project year summaries into a chart dataset, preserving caller order.
pub fn project_year_trend(summaries: &[YearSummary]) -> TrendDataset {
    TrendDataset {
        labels: summaries.iter().map(|row| row.year.to_string()).collect(),
        job_counts: TrendSeries {
            label: chart::SERIES_LABEL_JOBS.to_string(),
            axis: SeriesAxis::Primary,
            points: summaries
                .iter()
                .map(|row| row.distinct_titles as f64)
                .collect(),
        },
        average_salaries: TrendSeries {
            label: chart::SERIES_LABEL_SALARY.to_string(),
            axis: SeriesAxis::Secondary,
            points: summaries
                .iter()
                .map(|row| round_currency(row.average_salary))
                .collect(),
        },
    }
}
