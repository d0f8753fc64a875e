use paylens::{
    InMemorySource, RawRecord, SortDirection, SurveyView, TitleSortKey, YearSortKey,
};

fn record(year: &str, title: &str, salary: &str) -> RawRecord {
    RawRecord::from_pairs([
        ("work_year", year),
        ("job_title", title),
        ("salary_in_usd", salary),
    ])
}

fn build_view() -> SurveyView<InMemorySource> {
    let rows = vec![
        record("2023", "ML Engineer", "160000"),
        record("2022", "Data Engineer", "110000"),
        record("2022", "Data Engineer", "120000"),
        record("2022", "Data Analyst", "80000"),
        record("2021", "Data Analyst", "70000"),
    ];
    let mut view = SurveyView::new(InMemorySource::new("fixture", rows));
    view.reload();
    view
}

#[test]
fn overview_rows_and_trend_agree_on_order_and_values() {
    let view = build_view();
    let years = view.year_rows();
    assert_eq!(
        years.iter().map(|row| row.year).collect::<Vec<_>>(),
        vec![2021, 2022, 2023]
    );

    let trend = view.trend();
    assert_eq!(trend.labels, vec!["2021", "2022", "2023"]);
    assert_eq!(trend.job_counts.points, vec![1.0, 2.0, 1.0]);
    let expected_2022: f64 = (110000.0 + 120000.0 + 80000.0) / 3.0;
    assert!((trend.average_salaries.points[1] - (expected_2022 * 100.0).round() / 100.0).abs() < 1e-9);
}

#[test]
fn drill_down_follows_the_selected_year() {
    let mut view = build_view();

    view.select_year(2022);
    let rows = view.title_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title, "Data Analyst");
    assert_eq!(rows[1].title, "Data Engineer");
    assert_eq!(rows[1].count, 2);
    assert!((rows[1].average_salary - 115000.0).abs() < f64::EPSILON);

    // Re-selecting replaces the detail set entirely; nothing from 2022 may
    // survive into the 2021 view.
    view.select_year(2021);
    let rows = view.title_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Data Analyst");
    assert_eq!(rows[0].count, 1);
    assert!((rows[0].average_salary - 70000.0).abs() < f64::EPSILON);
}

#[test]
fn header_toggles_flip_only_the_requested_table() {
    let mut view = build_view();
    view.select_year(2022);

    view.request_title_sort(TitleSortKey::AverageSalary);
    assert_eq!(view.title_sort().key, TitleSortKey::AverageSalary);
    assert_eq!(view.title_sort().direction, SortDirection::Ascending);
    assert_eq!(view.year_sort().key, YearSortKey::Year);

    view.request_title_sort(TitleSortKey::AverageSalary);
    assert_eq!(view.title_sort().direction, SortDirection::Descending);
    let rows = view.title_rows();
    assert_eq!(rows[0].title, "Data Engineer");

    view.request_year_sort(YearSortKey::DistinctTitles);
    view.request_year_sort(YearSortKey::DistinctTitles);
    let years: Vec<i32> = view.year_rows().iter().map(|row| row.year).collect();
    assert_eq!(years[0], 2022);
    // Equal distinct-title counts keep first-seen order under the stable
    // sort: 2023 entered the aggregate before 2021.
    assert_eq!(&years[1..], &[2023, 2021]);
}

#[test]
fn selection_and_sort_state_survive_a_reload() {
    let mut view = build_view();
    view.select_year(2022);
    view.request_title_sort(TitleSortKey::Count);
    view.request_title_sort(TitleSortKey::Count);

    view.reload();
    assert_eq!(view.selected_year(), Some(2022));
    assert_eq!(view.title_sort().direction, SortDirection::Descending);
    let rows = view.title_rows();
    assert_eq!(rows[0].title, "Data Engineer");
    assert_eq!(rows[0].count, 2);
}
