//! Keyword derivation from emoji names.
//!
//! Turns a registry name such as `"man health worker: dark skin tone"` into
//! the search terms `["man", "health", "worker", "dark", "skin", "tone"]`.

/// Characters removed outright (not replaced with a space).
const STRIPPED_PUNCTUATION: &[char] = &[
    ',', '.', '\'', '\u{2019}', '\u{201C}', '\u{201D}', '!', '(', ')', ':',
];

/// Whole-string substitutions applied after punctuation removal, in order.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("-", " "),
    ("1st", "First"),
    ("2nd", "Second"),
    ("3rd", "Third"),
    ("#", "Hash"),
    ("*", "Asterisk"),
];

/// Words dropped from the term list. Compared case-sensitively.
const STOP_WORDS: &[&str] = &[
    "of", "with", "without", "and", "or", "&", "-", "on", "the", "in",
];

/// Derive the ordered keyword list for an emoji name.
///
/// Duplicates are kept; order follows the words of `name` with stop words
/// removed.
pub fn derive_search_terms(name: &str) -> Vec<String> {
    let mut text: String = name
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    for (from, to) in REPLACEMENTS {
        text = text.replace(from, to);
    }

    text.split_whitespace()
        .filter(|word| !STOP_WORDS.contains(word))
        .map(str::to_lowercase)
        .collect()
}
