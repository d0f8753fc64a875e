//! Field normalization and parsing helpers shared by sources and aggregation.

/// Trim `value` and return it only when something remains.
pub fn trimmed_non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Parse a `work_year` field into its canonical integer form.
///
/// Year equality throughout the crate is integer equality; values that do
/// not parse make the row ineligible.
pub fn parse_year(value: &str) -> Option<i32> {
    trimmed_non_empty(value)?.parse().ok()
}

/// Parse a `salary_in_usd` field into a finite decimal.
///
/// Non-finite parses (`NaN`, `inf`) are rejected so they can never reach a
/// running sum.
pub fn parse_salary(value: &str) -> Option<f64> {
    let parsed: f64 = trimmed_non_empty(value)?.parse().ok()?;
    parsed.is_finite().then_some(parsed)
}
