//! Identifier generation for emitted declarations.

use std::collections::HashSet;

use emoji_forge_registry::EmojiRecord;

/// PascalCase identifier from a record's search terms.
///
/// Terms containing anything but letters and digits (e.g. `"&"` left in a
/// name) are skipped.
pub fn emoji_identifier(record: &EmojiRecord) -> String {
    let words = record
        .search_terms
        .iter()
        .filter(|term| !term.is_empty() && term.chars().all(char::is_alphanumeric))
        .map(String::as_str);
    let identifier = pascal_case(words);
    sanitize(identifier, || format!("Emoji{}", record.index))
}

/// PascalCase identifier from a subgroup name such as `face-smiling`.
pub fn subgroup_identifier(subgroup: &str) -> String {
    let words = subgroup
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty());
    sanitize(pascal_case(words), || "Unnamed".to_string())
}

fn pascal_case<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words.map(capitalize).collect()
}

/// Upper-case the first character, lower-case the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Identifiers may not be empty or start with a digit.
fn sanitize(identifier: String, fallback: impl FnOnce() -> String) -> String {
    match identifier.chars().next() {
        None => fallback(),
        Some(c) if c.is_ascii_digit() => format!("_{identifier}"),
        Some(_) => identifier,
    }
}

/// Hands out unique identifiers, suffixing repeats with 2, 3, ...
#[derive(Debug, Default)]
pub struct IdentifierAllocator {
    taken: HashSet<String>,
}

impl IdentifierAllocator {
    pub fn allocate(&mut self, base: String) -> String {
        let mut candidate = base.clone();
        let mut n = 1;
        while self.taken.contains(&candidate) {
            n += 1;
            candidate = format!("{base}{n}");
        }
        self.taken.insert(candidate.clone());
        candidate
    }
}
