//! Locale-aware text services: collation and hanzi transliteration.

mod collate;
mod han_latin;
mod locale;

pub use collate::{Collation, CollationError};
pub use han_latin::{phonetic_initials, to_phonetic};
pub use locale::LocaleContext;
