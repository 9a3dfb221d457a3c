//! Row visibility predicate.
//!
//! A row stays visible while the search pattern matches any of: display
//! name, alternate searchable text, PID as a decimal string, or owning user
//! name. In Chinese locales the alternate text is additionally matched
//! phonetically. Purely read-only; a bad row never aborts the pass.

use crate::source::{Column, Role, RowId, TableSource};

use super::search::SearchState;

/// Decides whether `row` is visible under `search`.
///
/// Invalid handles are treated as "no match"; fields the source does not
/// carry read as empty text and contribute no match.
pub(crate) fn accepts(source: &dyn TableSource, row: RowId, search: &SearchState) -> bool {
    if search.matches_all() {
        return true;
    }
    if row >= source.row_count() {
        return false;
    }
    let Some(regex) = search.regex() else {
        return true;
    };

    let name = text_at(source, row, Column::Name, Role::Display);
    if regex.is_match(&name) {
        return true;
    }
    let alt = text_at(source, row, Column::Name, Role::Search);
    if regex.is_match(&alt) {
        return true;
    }
    if let Some(pid) = source
        .value(row, Column::Pid, Role::Raw)
        .and_then(|v| v.as_u64())
    {
        if regex.is_match(&pid.to_string()) {
            return true;
        }
    }
    let user = text_at(source, row, Column::User, Role::Display);
    if regex.is_match(&user) {
        return true;
    }

    search.phonetic_match(&alt)
}

fn text_at(source: &dyn TableSource, row: RowId, column: Column, role: Role) -> String {
    source
        .value(row, column, role)
        .and_then(|v| v.as_text().map(str::to_string))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{MockRow, MockSource};
    use crate::text::LocaleContext;

    fn fixture() -> MockSource {
        MockSource::new(vec![
            MockRow {
                name: "firefox".into(),
                image: "/usr/lib/firefox/firefox-bin".into(),
                user: "alice".into(),
                pid: 1234,
                ..Default::default()
            },
            MockRow {
                name: "深度监视器".into(),
                image: "深度监视器".into(),
                user: "root".into(),
                pid: 777,
                ..Default::default()
            },
        ])
    }

    fn en() -> LocaleContext {
        LocaleContext::fixed("en-US")
    }

    #[test]
    fn empty_pattern_accepts_every_row() {
        let source = fixture();
        let search = SearchState::empty(&en());
        for row in 0..source.row_count() {
            assert!(accepts(&source, row, &search));
        }
    }

    #[test]
    fn matches_name_alt_text_pid_and_user() {
        let source = fixture();
        for pattern in ["fire", "FOX", "firefox-bin", "1234", "alice"] {
            let search = SearchState::new(pattern, &en());
            assert!(
                accepts(&source, 0, &search),
                "pattern {pattern:?} must match row 0"
            );
        }
        let search = SearchState::new("chrome", &en());
        assert!(!accepts(&source, 0, &search));
    }

    #[test]
    fn out_of_range_row_is_hidden() {
        let source = fixture();
        let search = SearchState::new("fire", &en());
        assert!(!accepts(&source, 99, &search));
    }

    #[test]
    fn invalid_regex_hides_nothing() {
        let source = fixture();
        let search = SearchState::new("fire(", &en());
        for row in 0..source.row_count() {
            assert!(accepts(&source, row, &search));
        }
    }

    #[test]
    fn phonetic_initials_match_in_chinese_locale_only() {
        let source = fixture();
        // 深度监视器 latinizes to "shen du jian shi qi": initials "sdjsq".
        let zh = SearchState::new("sdjsq", &LocaleContext::fixed("zh-CN"));
        assert!(accepts(&source, 1, &zh));

        let latin = SearchState::new("sdjsq", &en());
        assert!(!accepts(&source, 1, &latin));
    }

    #[test]
    fn phonetic_syllables_match_in_chinese_locale() {
        let source = fixture();
        let search = SearchState::new("jianshi", &LocaleContext::fixed("zh-CN"));
        assert!(accepts(&source, 1, &search));
    }

    #[test]
    fn missing_fields_contribute_no_match() {
        let source = MockSource::new(vec![MockRow {
            name: "kworker".into(),
            // no image, no user
            pid: 9,
            ..Default::default()
        }]);
        let search = SearchState::new("bash", &en());
        assert!(!accepts(&source, 0, &search));
    }
}
