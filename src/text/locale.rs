//! Locale resolution for the sort/filter core.
//!
//! The active locale is resolved once, when a [`LocaleContext`] is built,
//! and injected into the view. Filter and comparator code never consult the
//! environment themselves, which keeps both testable with a fixed locale.

use std::sync::Arc;

use tracing::warn;

use super::collate::Collation;

/// Strips encoding/modifier suffixes and maps POSIX separators so tags like
/// `"zh_CN.UTF-8"` parse as BCP-47 (`"zh-CN"`).
pub(crate) fn normalize_tag(tag: &str) -> String {
    let base = tag.split(['.', '@']).next().unwrap_or(tag);
    base.trim().replace('_', "-")
}

/// Current system locale tag, if detectable.
pub(crate) fn system_tag() -> Option<String> {
    sys_locale::get_locale()
}

fn primary_subtag(tag: &str) -> String {
    normalize_tag(tag)
        .split('-')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Locale-dependent services and flags, resolved once.
///
/// Holds the collation used for ordering display strings and the flag that
/// enables the pinyin-assisted search path in Chinese locales.
#[derive(Debug, Clone)]
pub struct LocaleContext {
    tag: String,
    logographic: bool,
    collation: Arc<Collation>,
}

impl LocaleContext {
    /// Context for the current system locale, sharing the process-wide
    /// collation singleton. An undetectable locale degrades to
    /// non-logographic behavior.
    pub fn system() -> Self {
        let tag = match system_tag() {
            Some(tag) => tag,
            None => {
                warn!("system locale undetectable; phonetic search disabled");
                String::from("und")
            }
        };
        Self {
            logographic: primary_subtag(&tag) == "zh",
            collation: Collation::global(),
            tag,
        }
    }

    /// Context for a fixed locale tag with its own collation instance.
    /// Deterministic regardless of the host environment.
    pub fn fixed(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            logographic: primary_subtag(tag) == "zh",
            collation: Arc::new(Collation::for_tag(tag)),
        }
    }

    /// The locale tag this context was resolved from.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether the locale uses a logographic script with a latin phonetic
    /// system (Chinese); enables the transliteration search path.
    pub fn is_logographic(&self) -> bool {
        self.logographic
    }

    /// Collation for ordering display strings.
    pub fn collation(&self) -> &Collation {
        &self.collation
    }
}
