//! Record sources that supply raw tabular rows.
//!
//! Ownership model:
//! - `RecordSource` is the aggregation-facing seam; implementations own all
//!   transport and format concerns and deliver field-keyed rows.
//! - Eligibility filtering happens in the aggregators, never here: a source
//!   hands over every parsed row as-is.

use std::sync::Arc;

use chrono::Utc;

use crate::data::{DatasetSnapshot, RawRecord};
use crate::errors::SurveyError;
use crate::types::SourceId;

/// CSV-file record source.
pub mod csv_file;
pub use csv_file::{CsvFileSource, CsvSourceConfig};

/// Aggregation-facing record source interface.
///
/// The fetch is the only suspending step of the pipeline; for a fixed
/// dataset state its output should be deterministic.
pub trait RecordSource: Send + Sync {
    /// Stable source identifier used in errors and diagnostics.
    fn id(&self) -> &str;
    /// Fetch the full record sequence for the current dataset state.
    fn fetch_records(&self) -> Result<DatasetSnapshot, SurveyError>;
}

/// In-memory record source for tests and small datasets.
pub struct InMemorySource {
    id: SourceId,
    records: Arc<Vec<RawRecord>>,
}

impl InMemorySource {
    /// Create an in-memory source from prebuilt records.
    pub fn new(id: impl Into<SourceId>, records: Vec<RawRecord>) -> Self {
        Self {
            id: id.into(),
            records: Arc::new(records),
        }
    }
}

impl RecordSource for InMemorySource {
    fn id(&self) -> &str {
        &self.id
    }

    fn fetch_records(&self) -> Result<DatasetSnapshot, SurveyError> {
        Ok(DatasetSnapshot {
            records: self.records.as_ref().clone(),
            loaded_at: Utc::now(),
        })
    }
}
