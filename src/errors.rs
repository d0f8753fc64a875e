use std::io;

use thiserror::Error;

use crate::types::SourceId;

/// Error type for record-source, IO, and configuration failures.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("record source '{source_id}' is unavailable: {reason}")]
    SourceUnavailable { source_id: SourceId, reason: String },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("configuration error: {0}")]
    Configuration(String),
}
