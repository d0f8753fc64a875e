//! Selection-driven drill-down view state.
//!
//! `SurveyView` owns every piece of mutable UI-facing state (dataset rows,
//! selected year, retained sort specs) and calls the pure aggregation,
//! sort, and projection transforms on demand. Fetch, aggregate, and publish
//! run as one synchronous sequence per trigger, so a changed selection
//! always replaces the prior title rows wholesale and stale output cannot
//! outlive it.

use tracing::{debug, warn};

use crate::aggregate::{aggregate_by_title, aggregate_by_year};
use crate::chart::{project_year_trend, TrendDataset};
use crate::data::{RawRecord, TitleSummary, YearSummary};
use crate::sort::{sort_rows, SortSpec, TitleSortKey, YearSortKey};
use crate::source::RecordSource;

/// Title-level drill-down rows scoped to one selected year.
#[derive(Clone, Debug)]
struct Selection {
    year: i32,
    rows: Vec<TitleSummary>,
}

/// Drill-down controller over one record source.
pub struct SurveyView<S> {
    source: S,
    records: Vec<RawRecord>,
    year_rows: Vec<YearSummary>,
    year_sort: SortSpec<YearSortKey>,
    title_sort: SortSpec<TitleSortKey>,
    selection: Option<Selection>,
}

impl<S: RecordSource> SurveyView<S> {
    /// Create a view over `source` with the default sort specs (year table
    /// by year ascending, title table by title ascending). No data is
    /// loaded until `reload`.
    pub fn new(source: S) -> Self {
        Self {
            source,
            records: Vec::new(),
            year_rows: Vec::new(),
            year_sort: SortSpec::ascending(YearSortKey::Year),
            title_sort: SortSpec::ascending(TitleSortKey::Title),
            selection: None,
        }
    }

    /// Fetch the dataset and recompute every summary from scratch.
    ///
    /// A fetch failure is logged and published as an empty dataset rather
    /// than propagated; tables and chart then show their "no data"
    /// fallback. Sort specs and the selected year survive the reload.
    pub fn reload(&mut self) {
        self.records = match self.source.fetch_records() {
            Ok(snapshot) => {
                debug!(
                    "[paylens:view] source '{}' loaded {} rows at {}",
                    self.source.id(),
                    snapshot.records.len(),
                    snapshot.loaded_at
                );
                snapshot.records
            }
            Err(err) => {
                warn!(
                    "[paylens:view] source '{}' fetch failed, publishing empty dataset: {err}",
                    self.source.id()
                );
                Vec::new()
            }
        };
        self.year_rows = aggregate_by_year(&self.records).into_values().collect();
        if let Some(year) = self.selected_year() {
            self.rebuild_selection(year);
        }
    }

    /// Currently selected year, if any.
    pub fn selected_year(&self) -> Option<i32> {
        self.selection.as_ref().map(|selection| selection.year)
    }

    /// Select `year` and rebuild its title rows. The prior selection's rows
    /// are discarded wholesale, never merged into.
    pub fn select_year(&mut self, year: i32) {
        self.rebuild_selection(year);
    }

    /// Clear the drill-down selection and its title rows.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    fn rebuild_selection(&mut self, year: i32) {
        let rows = aggregate_by_title(&self.records, year)
            .into_values()
            .collect();
        self.selection = Some(Selection { year, rows });
    }

    /// Year-summary rows sorted under the retained year sort spec.
    pub fn year_rows(&self) -> Vec<YearSummary> {
        let mut rows = self.year_rows.clone();
        sort_rows(&mut rows, self.year_sort);
        rows
    }

    /// Title-summary rows for the selected year, sorted under the retained
    /// title sort spec. Empty when nothing is selected or the selected year
    /// has no eligible rows.
    pub fn title_rows(&self) -> Vec<TitleSummary> {
        let Some(selection) = &self.selection else {
            return Vec::new();
        };
        let mut rows = selection.rows.clone();
        sort_rows(&mut rows, self.title_sort);
        rows
    }

    /// Apply the header toggle rule to the year table sort.
    pub fn request_year_sort(&mut self, key: YearSortKey) {
        self.year_sort = self.year_sort.request(key);
    }

    /// Apply the header toggle rule to the title table sort.
    pub fn request_title_sort(&mut self, key: TitleSortKey) {
        self.title_sort = self.title_sort.request(key);
    }

    /// Current year table sort spec, for header indicators.
    pub fn year_sort(&self) -> SortSpec<YearSortKey> {
        self.year_sort
    }

    /// Current title table sort spec, for header indicators.
    pub fn title_sort(&self) -> SortSpec<TitleSortKey> {
        self.title_sort
    }

    /// Trend dataset over the year rows in their current sorted order.
    pub fn trend(&self) -> TrendDataset {
        project_year_trend(&self.year_rows())
    }
}
