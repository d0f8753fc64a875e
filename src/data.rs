use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use crate::types::{FieldName, FieldValue, JobTitle, SourceId};

/// A named field in a raw dataset row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordField {
    /// Stable column/field name from the header row.
    pub name: FieldName,
    /// Raw value exactly as supplied by the parser.
    pub value: FieldValue,
}

/// One raw tabular row as a field-string mapping.
///
/// Columns beyond the required three are carried through untouched so
/// sources stay agnostic of what aggregation consumes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawRecord {
    /// Named fields in header order.
    pub fields: Vec<RecordField>,
}

impl RawRecord {
    /// Build a record from `(name, value)` pairs.
    pub fn from_pairs<N, V>(pairs: impl IntoIterator<Item = (N, V)>) -> Self
    where
        N: Into<FieldName>,
        V: Into<FieldValue>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(name, value)| RecordField {
                    name: name.into(),
                    value: value.into(),
                })
                .collect(),
        }
    }

    /// Return the value for `name`, or `None` when the column is absent.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}

/// Result of a single fetch from a `RecordSource`.
#[derive(Clone, Debug)]
pub struct DatasetSnapshot {
    /// Raw rows returned by the source.
    pub records: Vec<RawRecord>,
    /// When the snapshot was produced.
    pub loaded_at: DateTime<Utc>,
}

/// Aggregate row for one work year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// Calendar year the row summarizes.
    pub year: i32,
    /// Number of unique job titles seen that year.
    pub distinct_titles: usize,
    /// Arithmetic mean of `salary_in_usd` over the year's eligible rows.
    pub average_salary: f64,
}

/// Aggregate row for one job title within the selected year.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TitleSummary {
    /// Job title the row summarizes.
    pub title: JobTitle,
    /// Number of rows carrying this title in the selected year.
    pub count: usize,
    /// Arithmetic mean of `salary_in_usd` over this title's rows.
    pub average_salary: f64,
}
