use std::path::PathBuf;

use chrono::Utc;
use csv::ReaderBuilder;
use tracing::debug;

use super::RecordSource;
use crate::constants::columns;
use crate::data::{DatasetSnapshot, RawRecord, RecordField};
use crate::errors::SurveyError;
use crate::types::SourceId;

/// Configuration for a CSV-file record source.
#[derive(Clone, Debug)]
pub struct CsvSourceConfig {
    /// Stable source id used in errors and diagnostics.
    pub source_id: SourceId,
    /// Path to the UTF-8, comma-delimited, headered CSV resource.
    pub path: PathBuf,
    /// Header columns that must be present for the dataset to load.
    pub required_columns: Vec<String>,
    /// Whether rows with a column-count mismatch are tolerated instead of
    /// failing the whole load.
    pub flexible: bool,
}

impl CsvSourceConfig {
    /// Create a config requiring the canonical salary-survey columns.
    pub fn new(source_id: impl Into<SourceId>, path: impl Into<PathBuf>) -> Self {
        Self {
            source_id: source_id.into(),
            path: path.into(),
            required_columns: columns::REQUIRED
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            flexible: true,
        }
    }

    /// Override the required header columns.
    pub fn with_required_columns(mut self, required_columns: Vec<String>) -> Self {
        self.required_columns = required_columns;
        self
    }

    /// Override whether ragged rows are tolerated.
    pub fn with_flexible(mut self, flexible: bool) -> Self {
        self.flexible = flexible;
        self
    }
}

/// Record source reading a headered CSV file through the `csv` parser.
///
/// The header row determines field names; delimiter and quoting rules are
/// entirely the parser's concern. Ragged rows zip short against the header,
/// and the absent fields make the row ineligible downstream.
pub struct CsvFileSource {
    config: CsvSourceConfig,
}

impl CsvFileSource {
    /// Create a source over `config`.
    pub fn new(config: CsvSourceConfig) -> Self {
        Self { config }
    }

    fn unavailable(&self, reason: impl Into<String>) -> SurveyError {
        SurveyError::SourceUnavailable {
            source_id: self.config.source_id.clone(),
            reason: reason.into(),
        }
    }
}

impl RecordSource for CsvFileSource {
    fn id(&self) -> &str {
        &self.config.source_id
    }

    fn fetch_records(&self) -> Result<DatasetSnapshot, SurveyError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(self.config.flexible)
            .from_path(&self.config.path)
            .map_err(|err| {
                self.unavailable(format!(
                    "failed opening {}: {err}",
                    self.config.path.display()
                ))
            })?;

        let headers = reader
            .headers()
            .map_err(|err| self.unavailable(format!("failed reading header row: {err}")))?
            .clone();
        for required in &self.config.required_columns {
            if !headers.iter().any(|name| name == required) {
                return Err(SurveyError::Configuration(format!(
                    "source '{}' is missing required column '{required}'",
                    self.config.source_id
                )));
            }
        }

        let mut records = Vec::new();
        for row in reader.records() {
            let row =
                row.map_err(|err| self.unavailable(format!("failed reading row: {err}")))?;
            let fields = headers
                .iter()
                .zip(row.iter())
                .map(|(name, value)| RecordField {
                    name: name.to_string(),
                    value: value.to_string(),
                })
                .collect();
            records.push(RawRecord { fields });
        }
        debug!(
            "[paylens:csv] source '{}' loaded {} rows from {}",
            self.config.source_id,
            records.len(),
            self.config.path.display()
        );
        Ok(DatasetSnapshot {
            records,
            loaded_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        file.flush().expect("flush csv");
        file
    }

    #[test]
    fn loads_headered_rows_as_field_mappings() {
        let file = write_csv(
            "work_year,experience_level,job_title,salary_in_usd\n\
             2023,SE,Data Engineer,185900\n\
             2022,MI,Analyst,80000\n",
        );
        let source = CsvFileSource::new(CsvSourceConfig::new("salaries", file.path()));
        let snapshot = source.fetch_records().unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].field("work_year"), Some("2023"));
        assert_eq!(snapshot.records[0].field("job_title"), Some("Data Engineer"));
        assert_eq!(snapshot.records[0].field("experience_level"), Some("SE"));
        assert_eq!(snapshot.records[1].field("salary_in_usd"), Some("80000"));
    }

    #[test]
    fn missing_required_column_is_a_configuration_error() {
        let file = write_csv("work_year,job_title\n2023,Data Engineer\n");
        let source = CsvFileSource::new(CsvSourceConfig::new("salaries", file.path()));
        let err = source.fetch_records().unwrap_err();
        assert!(matches!(
            err,
            SurveyError::Configuration(msg) if msg.contains("salary_in_usd")
        ));
    }

    #[test]
    fn missing_file_maps_to_source_unavailable() {
        let source = CsvFileSource::new(CsvSourceConfig::new(
            "salaries",
            "/nonexistent/salaries.csv",
        ));
        let err = source.fetch_records().unwrap_err();
        assert!(matches!(
            err,
            SurveyError::SourceUnavailable { source_id, .. } if source_id == "salaries"
        ));
    }

    #[test]
    fn ragged_rows_zip_short_against_the_header() {
        let file = write_csv(
            "work_year,job_title,salary_in_usd\n\
             2023,Data Engineer\n\
             2022,Analyst,80000\n",
        );
        let source = CsvFileSource::new(CsvSourceConfig::new("salaries", file.path()));
        let snapshot = source.fetch_records().unwrap();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].field("salary_in_usd"), None);
        assert_eq!(snapshot.records[1].field("salary_in_usd"), Some("80000"));
    }

    #[test]
    fn quoted_fields_are_delegated_to_the_parser() {
        let file = write_csv(
            "work_year,job_title,salary_in_usd\n\
             2023,\"Engineer, Platform\",150000\n",
        );
        let source = CsvFileSource::new(CsvSourceConfig::new("salaries", file.path()));
        let snapshot = source.fetch_records().unwrap();
        assert_eq!(
            snapshot.records[0].field("job_title"),
            Some("Engineer, Platform")
        );
    }

    #[test]
    fn custom_required_columns_are_honored() {
        let file = write_csv("year,title\n2023,Engineer\n");
        let config = CsvSourceConfig::new("custom", file.path())
            .with_required_columns(vec!["year".to_string(), "title".to_string()]);
        let snapshot = CsvFileSource::new(config).fetch_records().unwrap();
        assert_eq!(snapshot.records[0].field("year"), Some("2023"));
    }
}
