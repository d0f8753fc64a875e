//! Year and title aggregation pipelines.
//!
//! Both pipelines share one shape: a single pass over eligible rows into an
//! insertion-ordered accumulator map, finalized to summary rows after the
//! pass. A grouping key exists only once an eligible row created it, so
//! every finalized average divides by a count of at least one.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::warn;

use crate::constants::columns;
use crate::data::{RawRecord, TitleSummary, YearSummary};
use crate::types::JobTitle;
use crate::utils::{parse_salary, parse_year, trimmed_non_empty};

/// One eligible row with its required fields normalized.
struct EligibleRow<'a> {
    year: i32,
    title: &'a str,
    salary: f64,
}

/// Extract and normalize the required fields, or `None` when the row is
/// ineligible.
///
/// Missing or blank fields drop the row silently. A present-but-unparseable
/// year or salary also drops the row, with a diagnostic, so a malformed
/// number can never corrupt a running sum.
fn eligible(record: &RawRecord) -> Option<EligibleRow<'_>> {
    let year_raw = trimmed_non_empty(record.field(columns::WORK_YEAR)?)?;
    let title = record.field(columns::JOB_TITLE)?;
    trimmed_non_empty(title)?;
    let salary_raw = trimmed_non_empty(record.field(columns::SALARY_IN_USD)?)?;

    let Some(year) = parse_year(year_raw) else {
        warn!("[paylens:aggregate] dropping row with unparseable work_year '{year_raw}'");
        return None;
    };
    let Some(salary) = parse_salary(salary_raw) else {
        warn!("[paylens:aggregate] dropping row with unparseable salary_in_usd '{salary_raw}'");
        return None;
    };
    Some(EligibleRow {
        year,
        title,
        salary,
    })
}

/// Per-year accumulator state for the overview pipeline.
struct YearAccumulator {
    titles: HashSet<JobTitle>,
    total_salary: f64,
    rows: usize,
}

/// Group eligible rows by work year, keyed in first-seen year order.
///
/// Output order is insertion order, not numeric year order; callers sort
/// downstream. Duplicate titles within a year count once toward
/// `distinct_titles`.
pub fn aggregate_by_year(records: &[RawRecord]) -> IndexMap<i32, YearSummary> {
    let mut groups: IndexMap<i32, YearAccumulator> = IndexMap::new();
    for record in records {
        let Some(row) = eligible(record) else {
            continue;
        };
        let group = groups.entry(row.year).or_insert_with(|| YearAccumulator {
            titles: HashSet::new(),
            total_salary: 0.0,
            rows: 0,
        });
        group.titles.insert(row.title.to_string());
        group.total_salary += row.salary;
        group.rows += 1;
    }
    groups
        .into_iter()
        .map(|(year, group)| {
            (
                year,
                YearSummary {
                    year,
                    distinct_titles: group.titles.len(),
                    average_salary: group.total_salary / group.rows as f64,
                },
            )
        })
        .collect()
}

/// Per-title accumulator state for the drill-down pipeline.
struct TitleAccumulator {
    total_salary: f64,
    rows: usize,
}

/// Group the eligible rows of `year` by job title, keyed in first-seen
/// title order.
///
/// An empty result means the year has no eligible rows; consumers treat
/// that as "no data", not an error.
pub fn aggregate_by_title(records: &[RawRecord], year: i32) -> IndexMap<JobTitle, TitleSummary> {
    let mut groups: IndexMap<JobTitle, TitleAccumulator> = IndexMap::new();
    for record in records {
        let Some(row) = eligible(record) else {
            continue;
        };
        if row.year != year {
            continue;
        }
        let group = groups
            .entry(row.title.to_string())
            .or_insert_with(|| TitleAccumulator {
                total_salary: 0.0,
                rows: 0,
            });
        group.total_salary += row.salary;
        group.rows += 1;
    }
    groups
        .into_iter()
        .map(|(title, group)| {
            let summary = TitleSummary {
                title: title.clone(),
                count: group.rows,
                average_salary: group.total_salary / group.rows as f64,
            };
            (title, summary)
        })
        .collect()
}
