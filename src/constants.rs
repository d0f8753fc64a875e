/// Constants for canonical dataset column names.
pub mod columns {
    /// Column holding the string-encoded work year.
    pub const WORK_YEAR: &str = "work_year";
    /// Column holding the job title.
    pub const JOB_TITLE: &str = "job_title";
    /// Column holding the string-encoded USD salary.
    pub const SALARY_IN_USD: &str = "salary_in_usd";
    /// Columns a row must carry to be eligible for aggregation.
    pub const REQUIRED: [&str; 3] = [WORK_YEAR, JOB_TITLE, SALARY_IN_USD];
}

/// Constants used by trend-chart projection.
pub mod chart {
    /// Display label for the distinct-title-count series.
    pub const SERIES_LABEL_JOBS: &str = "Total Jobs";
    /// Display label for the average-salary series.
    pub const SERIES_LABEL_SALARY: &str = "Average Salary (USD)";
}
