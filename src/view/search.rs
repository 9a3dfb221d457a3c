//! Memoized search state.
//!
//! Everything derived from the search pattern is computed here, once per
//! pattern change. Row evaluation never recomputes pattern-side state, so
//! the filter predicate stays cheap under per-tick re-evaluation.

use regex::{Regex, RegexBuilder};
use tracing::warn;

use crate::text::{self, LocaleContext};

/// State derived from one user-typed search pattern.
///
/// Rebuilt (not mutated) on every pattern change. In Chinese locales it
/// additionally carries the latinized pattern and its phonetic-initials
/// reduction, enabling search over hanzi-named processes.
#[derive(Debug, Clone)]
pub struct SearchState {
    pattern: String,
    pattern_lower: String,
    /// Compiled case-insensitive pattern. `None` means "match every row":
    /// either the pattern is empty or it failed to compile as a regex.
    regex: Option<Regex>,
    logographic: bool,
    /// Compact (whitespace-free, lowercase) latinization of the pattern.
    phonetic: String,
    /// First letter of each latinized word of the pattern.
    initials: String,
}

impl SearchState {
    pub fn new(pattern: &str, locale: &LocaleContext) -> Self {
        let regex = if pattern.is_empty() {
            None
        } else {
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(re) => Some(re),
                Err(error) => {
                    // Availability over strictness: a half-typed regex must
                    // not blank the table.
                    warn!(pattern = %pattern, error = %error,
                        "search pattern is not a valid regex; showing all rows");
                    None
                }
            }
        };

        let logographic = locale.is_logographic();
        let (phonetic, initials) = if logographic && !pattern.is_empty() {
            let words = text::to_phonetic(pattern);
            let compact: String = words.split_whitespace().collect();
            (
                compact.to_lowercase(),
                text::phonetic_initials(&words).to_lowercase(),
            )
        } else {
            (String::new(), String::new())
        };

        Self {
            pattern: pattern.to_string(),
            pattern_lower: pattern.to_lowercase(),
            regex,
            logographic,
            phonetic,
            initials,
        }
    }

    /// State for an empty pattern: matches every row.
    pub fn empty(locale: &LocaleContext) -> Self {
        Self::new("", locale)
    }

    /// The original pattern text.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// `true` when every row matches (empty or uncompilable pattern).
    pub fn matches_all(&self) -> bool {
        self.regex.is_none()
    }

    /// Compact latinization of the pattern (empty outside Chinese locales).
    pub fn phonetic(&self) -> &str {
        &self.phonetic
    }

    /// Concatenated first letters of the pattern's latinized words
    /// (empty outside Chinese locales).
    pub fn phonetic_initials(&self) -> &str {
        &self.initials
    }

    pub(crate) fn regex(&self) -> Option<&Regex> {
        self.regex.as_ref()
    }

    /// Phonetic match of the row's alternate searchable text, active only
    /// in logographic locales. Latinizes the row text and accepts it when
    /// it contains the typed syllables, or when its per-word initials
    /// contain the raw pattern ("zj" finds "zhong jie ...").
    pub(crate) fn phonetic_match(&self, alt_text: &str) -> bool {
        if !self.logographic || alt_text.is_empty() {
            return false;
        }
        let words = text::to_phonetic(alt_text);
        if !self.phonetic.is_empty() {
            let compact: String = words.split_whitespace().collect();
            if compact.to_lowercase().contains(&self.phonetic) {
                return true;
            }
        }
        !self.pattern_lower.is_empty()
            && text::phonetic_initials(&words)
                .to_lowercase()
                .contains(&self.pattern_lower)
    }
}
