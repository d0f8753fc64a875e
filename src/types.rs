/// Identifier for the source that produced a dataset.
/// Examples: `salaries_csv`, `fixture`
pub type SourceId = String;
/// Column/field name taken from a dataset header row.
/// Examples: `work_year`, `job_title`, `salary_in_usd`
pub type FieldName = String;
/// Raw field value exactly as supplied by the parser.
/// Examples: `2023`, `Data Engineer`, `185900`
pub type FieldValue = String;
/// Job title string as it appears in the dataset.
/// Examples: `Data Engineer`, `ML Engineer`
pub type JobTitle = String;
/// Year rendered as a chart or table label.
/// Example: `2023`
pub type YearLabel = String;
