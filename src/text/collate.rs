//! Locale collation service.
//!
//! Wraps an ICU collator so display strings order the way the user's locale
//! expects instead of by raw code points. The process-wide instance is built
//! lazily on first use and bound to the system locale for the lifetime of
//! the process; tests and embedders can build their own instance for a
//! fixed locale instead.

use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::Locale;
use tracing::warn;

use super::locale;

/// Error building a collator for a locale tag.
#[derive(Debug, Clone)]
pub struct CollationError {
    pub tag: String,
    pub message: String,
}

impl std::fmt::Display for CollationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "no collation for locale '{}': {}", self.tag, self.message)
    }
}

impl std::error::Error for CollationError {}

/// Locale-correct string comparison.
pub struct Collation {
    collator: Option<Collator>,
}

impl Collation {
    /// Builds a collation for the given BCP-47-ish locale tag
    /// (`"zh-CN"`, `"en_US.UTF-8"`, ...).
    pub fn try_new(tag: &str) -> Result<Self, CollationError> {
        let locale: Locale = locale::normalize_tag(tag)
            .parse()
            .map_err(|e| CollationError {
                tag: tag.to_string(),
                message: format!("unparseable locale tag: {e:?}"),
            })?;
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);
        let collator =
            Collator::try_new(&locale.into(), options).map_err(|e| CollationError {
                tag: tag.to_string(),
                message: format!("collator construction failed: {e}"),
            })?;
        Ok(Self {
            collator: Some(collator),
        })
    }

    /// Builds a collation for `tag`, degrading first to the root locale and
    /// then to raw code-point order rather than failing.
    pub fn for_tag(tag: &str) -> Self {
        match Self::try_new(tag) {
            Ok(c) => c,
            Err(err) => {
                warn!(tag = %tag, error = %err, "falling back to root-locale collation");
                let mut options = CollatorOptions::new();
                options.strength = Some(Strength::Tertiary);
                let collator = Collator::try_new(&Locale::UND.into(), options).ok();
                if collator.is_none() {
                    warn!("root collation unavailable; using code-point order");
                }
                Self { collator }
            }
        }
    }

    /// Process-wide collation bound to the system locale.
    ///
    /// Built once on first use; the locale is read at construction and never
    /// re-read. Initialization goes through `OnceLock`, so concurrent first
    /// calls are safe even though the refresh loop is single-threaded.
    pub fn global() -> Arc<Collation> {
        static GLOBAL: OnceLock<Arc<Collation>> = OnceLock::new();
        GLOBAL
            .get_or_init(|| {
                let tag = locale::system_tag().unwrap_or_else(|| {
                    warn!("system locale undetectable; using root collation");
                    String::from("und")
                });
                Arc::new(Collation::for_tag(&tag))
            })
            .clone()
    }

    /// Compares two display strings in locale order.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl std::fmt::Debug for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collation")
            .field("icu", &self.collator.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collation_differs_from_code_point_order() {
        let c = Collation::for_tag("en-US");
        // Raw order puts all uppercase before lowercase; collation does not.
        assert_eq!(c.compare("apple", "Banana"), Ordering::Less);
        assert_eq!("apple".cmp("Banana"), Ordering::Greater);
    }

    #[test]
    fn equal_strings_compare_equal() {
        let c = Collation::for_tag("en-US");
        assert_eq!(c.compare("top", "top"), Ordering::Equal);
    }

    #[test]
    fn unusable_tag_still_compares() {
        let c = Collation::for_tag("not a locale tag!!");
        assert_eq!(c.compare("a", "b"), Ordering::Less);
    }

    #[test]
    fn global_is_reused() {
        let a = Collation::global();
        let b = Collation::global();
        assert!(Arc::ptr_eq(&a, &b), "global collation must be a singleton");
    }
}
