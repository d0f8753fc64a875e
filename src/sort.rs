//! Stable sort application over aggregate rows.
//!
//! The engine is stateless per call: it takes the current `SortSpec` as
//! input and never owns the header toggle rule. The toggle transition lives
//! on `SortSpec::request` so view layers share one implementation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::data::{TitleSummary, YearSummary};

/// Sort direction for a table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest value first.
    Ascending,
    /// Largest value first.
    Descending,
}

/// Sortable column of the year-summary table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearSortKey {
    /// Order by calendar year.
    Year,
    /// Order by distinct-title count.
    DistinctTitles,
    /// Order by average salary.
    AverageSalary,
}

/// Sortable column of the title-summary table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleSortKey {
    /// Order lexicographically by job title.
    Title,
    /// Order by row count.
    Count,
    /// Order by average salary.
    AverageSalary,
}

/// The `(key, direction)` pair governing display order of a table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    /// Column the table is ordered by.
    pub key: K,
    /// Direction applied to the key comparison.
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortSpec<K> {
    /// Spec ordering `key` ascending.
    pub fn ascending(key: K) -> Self {
        Self {
            key,
            direction: SortDirection::Ascending,
        }
    }

    /// Header toggle transition: requesting the active key flips an
    /// ascending spec to descending; any other request resets to ascending
    /// on the requested key.
    #[must_use]
    pub fn request(self, key: K) -> Self {
        if self.key == key && self.direction == SortDirection::Ascending {
            Self {
                key,
                direction: SortDirection::Descending,
            }
        } else {
            Self::ascending(key)
        }
    }
}

/// Row type comparable under key enum `K`.
pub trait SortableBy<K> {
    /// Compare `self` to `other` under `key` in ascending terms.
    fn compare_by(&self, other: &Self, key: K) -> Ordering;
}

impl SortableBy<YearSortKey> for YearSummary {
    fn compare_by(&self, other: &Self, key: YearSortKey) -> Ordering {
        match key {
            YearSortKey::Year => self.year.cmp(&other.year),
            YearSortKey::DistinctTitles => self.distinct_titles.cmp(&other.distinct_titles),
            YearSortKey::AverageSalary => self.average_salary.total_cmp(&other.average_salary),
        }
    }
}

impl SortableBy<TitleSortKey> for TitleSummary {
    fn compare_by(&self, other: &Self, key: TitleSortKey) -> Ordering {
        match key {
            TitleSortKey::Title => self.title.cmp(&other.title),
            TitleSortKey::Count => self.count.cmp(&other.count),
            TitleSortKey::AverageSalary => self.average_salary.total_cmp(&other.average_salary),
        }
    }
}

/// Stable in-place sort of `rows` under `spec`.
///
/// Rows comparing equal under the key keep their relative input order in
/// both directions; descending reverses the comparator, not the slice.
pub fn sort_rows<T, K>(rows: &mut [T], spec: SortSpec<K>)
where
    T: SortableBy<K>,
    K: Copy,
{
    rows.sort_by(|a, b| {
        let ordering = a.compare_by(b, spec.key);
        match spec.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
