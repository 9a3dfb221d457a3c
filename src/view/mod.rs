//! Sort/filter view core.
//!
//! [`SortFilterView`] is the layer the presentation side talks to: it holds
//! the current [`SearchState`] and the resolved locale services, and turns a
//! data-source snapshot into a filtered, ordered row set once per refresh
//! tick. A new tick simply supersedes the previous result; nothing here
//! blocks or mutates the source.

mod compare;
mod filter;
mod search;

pub use search::SearchState;

use serde::{Deserialize, Serialize};

use crate::source::{Column, RowId, TableSource};
use crate::text::LocaleContext;

/// Sort direction for an ordered pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filtering and ordering over a tabular process snapshot.
///
/// Locale-dependent behavior is fixed at construction: pass
/// [`LocaleContext::system`] in the application and
/// [`LocaleContext::fixed`] in tests.
#[derive(Debug, Clone)]
pub struct SortFilterView {
    locale: LocaleContext,
    search: SearchState,
}

impl SortFilterView {
    pub fn new(locale: LocaleContext) -> Self {
        let search = SearchState::empty(&locale);
        Self { locale, search }
    }

    /// View bound to the current system locale.
    pub fn with_system_locale() -> Self {
        Self::new(LocaleContext::system())
    }

    /// Replaces the search state. Derived pattern state (compiled regex,
    /// latinization) is recomputed here and nowhere else.
    pub fn set_search_pattern(&mut self, pattern: &str) {
        self.search = SearchState::new(pattern, &self.locale);
    }

    /// The active search state.
    pub fn search(&self) -> &SearchState {
        &self.search
    }

    /// The locale this view was built with.
    pub fn locale(&self) -> &LocaleContext {
        &self.locale
    }

    /// Whether `row` is visible under the current search pattern.
    pub fn is_row_visible(&self, source: &dyn TableSource, row: RowId) -> bool {
        filter::accepts(source, row, &self.search)
    }

    /// Columns are never filtered; searching only affects row visibility.
    pub fn is_column_visible(&self, _column: Column) -> bool {
        true
    }

    /// Whether `left` sorts strictly before `right` under `column`
    /// (ascending sense). Strict weak ordering for every column.
    pub fn compare_rows(
        &self,
        source: &dyn TableSource,
        left: RowId,
        right: RowId,
        column: Column,
    ) -> bool {
        compare::less(source, left, right, column, self.locale.collation())
    }

    /// Rows visible under the current pattern, in source order.
    pub fn visible_rows(&self, source: &dyn TableSource) -> Vec<RowId> {
        (0..source.row_count())
            .filter(|&row| filter::accepts(source, row, &self.search))
            .collect()
    }

    /// One full pass: filter, then order by `column`. The sort is stable,
    /// so equivalent rows keep their source order and the result is
    /// deterministic across ticks.
    pub fn ordered_rows(
        &self,
        source: &dyn TableSource,
        column: Column,
        order: SortOrder,
    ) -> Vec<RowId> {
        let mut rows = self.visible_rows(source);
        let collation = self.locale.collation();
        rows.sort_by(|&a, &b| {
            let ord = compare::ordering(source, a, b, column, collation);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockRow, MockSource};

    fn fixture() -> MockSource {
        MockSource::new(vec![
            MockRow {
                name: "firefox".into(),
                image: "/usr/lib/firefox/firefox-bin".into(),
                user: "alice".into(),
                pid: 300,
                cpu: 12.0,
                memory: 900,
                nice: 0,
                ..Default::default()
            },
            MockRow {
                name: "bash".into(),
                image: "/bin/bash".into(),
                user: "alice".into(),
                pid: 100,
                cpu: 1.0,
                memory: 100,
                nice: 5,
                ..Default::default()
            },
            MockRow {
                name: "kswapd0".into(),
                image: String::new(),
                user: "root".into(),
                pid: 200,
                cpu: 1.0,
                memory: 100,
                nice: -5,
                ..Default::default()
            },
        ])
    }

    fn view() -> SortFilterView {
        SortFilterView::new(crate::text::LocaleContext::fixed("en-US"))
    }

    #[test]
    fn empty_pattern_keeps_all_rows_visible() {
        let source = fixture();
        let view = view();
        assert_eq!(view.visible_rows(&source), vec![0, 1, 2]);
    }

    #[test]
    fn pattern_prunes_then_sort_orders() {
        let source = fixture();
        let mut view = view();
        view.set_search_pattern("a");
        // "a" matches firefox (user alice), bash (name), kswapd0 (name).
        assert_eq!(view.visible_rows(&source), vec![0, 1, 2]);

        view.set_search_pattern("bash");
        let rows = view.ordered_rows(&source, Column::Pid, SortOrder::Ascending);
        assert_eq!(rows, vec![1]);
    }

    #[test]
    fn ordered_rows_respects_direction() {
        let source = fixture();
        let view = view();
        let asc = view.ordered_rows(&source, Column::Pid, SortOrder::Ascending);
        assert_eq!(asc, vec![1, 2, 0]);
        let desc = view.ordered_rows(&source, Column::Pid, SortOrder::Descending);
        assert_eq!(desc, vec![0, 2, 1]);
    }

    #[test]
    fn priority_ascending_puts_higher_priority_first() {
        let source = fixture();
        let view = view();
        let rows = view.ordered_rows(&source, Column::Priority, SortOrder::Ascending);
        // nice -5 (higher scheduling priority) leads, then 0, then 5.
        assert_eq!(rows, vec![2, 0, 1]);
    }

    #[test]
    fn compare_rows_matches_ordered_rows() {
        let source = fixture();
        let view = view();
        assert!(view.compare_rows(&source, 1, 0, Column::Pid));
        assert!(!view.compare_rows(&source, 0, 1, Column::Pid));
    }

    #[test]
    fn every_column_stays_visible() {
        let view = view();
        for &column in Column::all() {
            assert!(view.is_column_visible(column));
        }
    }

    #[test]
    fn clearing_the_pattern_restores_all_rows() {
        let source = fixture();
        let mut view = view();
        view.set_search_pattern("firefox");
        assert_eq!(view.visible_rows(&source), vec![0]);
        view.set_search_pattern("");
        assert_eq!(view.visible_rows(&source), vec![0, 1, 2]);
        assert!(view.search().matches_all());
    }
}
