//! Hanzi to latin transliteration.
//!
//! Converts logographic characters to their pinyin spelling so a user can
//! search Chinese-named processes by typing phonetic syllables. Latin text
//! passes through untouched; syllables come out whitespace-delimited so the
//! initials reduction below can work per word.

use pinyin::ToPinyin;

/// Latinizes `text`: each hanzi becomes its (toneless) pinyin syllable,
/// everything else is preserved as-is. Syllables are separated from their
/// neighbors by a single space. Empty input yields empty output.
pub fn to_phonetic(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_syllable = false;
    for ch in text.chars() {
        match ch.to_pinyin() {
            Some(syllable) => {
                if !out.is_empty() && !out.ends_with(char::is_whitespace) {
                    out.push(' ');
                }
                out.push_str(syllable.plain());
                after_syllable = true;
            }
            None => {
                if after_syllable && !ch.is_whitespace() {
                    out.push(' ');
                }
                out.push(ch);
                after_syllable = false;
            }
        }
    }
    out
}

/// Reduces whitespace-delimited phonetic text to the first character of
/// each word, concatenated: `"zhong guo"` becomes `"zg"`. Supports the
/// "type the first letter of each syllable" search shortcut.
pub fn phonetic_initials(phonetic: &str) -> String {
    phonetic
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
