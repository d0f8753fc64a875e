#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Year and title aggregation pipelines.
pub mod aggregate;
/// Trend-chart projection of year summaries.
pub mod chart;
/// Centralized constants for dataset columns and chart labels.
pub mod constants;
/// Raw row and summary data types.
pub mod data;
/// Stable sort application over aggregate rows.
pub mod sort;
/// Record source traits and built-in sources.
pub mod source;
/// Shared type aliases.
pub mod types;
/// Field normalization and parsing helpers.
pub mod utils;
/// Selection-driven drill-down view state.
pub mod view;

mod errors;

pub use aggregate::{aggregate_by_title, aggregate_by_year};
pub use chart::{project_year_trend, round_currency, SeriesAxis, TrendDataset, TrendSeries};
pub use data::{DatasetSnapshot, RawRecord, RecordField, TitleSummary, YearSummary};
pub use errors::SurveyError;
pub use sort::{sort_rows, SortDirection, SortSpec, SortableBy, TitleSortKey, YearSortKey};
pub use source::{CsvFileSource, CsvSourceConfig, InMemorySource, RecordSource};
pub use types::{FieldName, FieldValue, JobTitle, SourceId, YearLabel};
pub use view::SurveyView;
