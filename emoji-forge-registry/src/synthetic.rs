//! Vendor compound emoji that are absent from the Unicode registry.
//!
//! Windows renders six "ninja cat" ZWJ sequences. They are injected at the
//! start of the Animals & Nature group so downstream consumers can offer
//! them alongside the standard entries.

use crate::types::{EmojiRecord, Group, SkinTone, Status};

/// Subgroup assigned to every injected record.
pub const SYNTHETIC_SUBGROUP: &str = "windows-ninja-cat";

const CAT_FACE: u32 = 0x1F431;
const ZERO_WIDTH_JOINER: u32 = 0x200D;

/// `(second code point, name, search terms)` for each cat.
const NINJA_CATS: [(u32, &str, [&str; 2]); 6] = [
    (0x1F464, "ninja cat", ["ninja", "cat"]),
    (0x1F453, "hipster cat", ["hipster", "cat"]),
    (0x1F4BB, "hacker cat", ["hacker", "cat"]),
    (0x1F409, "dino cat", ["dino", "cat"]),
    (0x1F3CD, "stunt cat", ["stunt", "cat"]),
    (0x1F680, "astro cat", ["astro", "cat"]),
];

/// Number of records [`ninja_cats`] produces.
pub const SYNTHETIC_COUNT: usize = NINJA_CATS.len();

/// Build the injected records, numbered from `first_index`.
pub fn ninja_cats(first_index: u32) -> Vec<EmojiRecord> {
    NINJA_CATS
        .iter()
        .zip(first_index..)
        .map(|((accessory, name, terms), index)| {
            let code_points = vec![CAT_FACE, ZERO_WIDTH_JOINER, *accessory];
            let rendered = code_points.iter().filter_map(|&cp| char::from_u32(cp)).collect();
            EmojiRecord {
                code_points,
                rendered,
                name: (*name).to_string(),
                search_terms: terms.iter().map(|t| (*t).to_string()).collect(),
                skin_tones: vec![SkinTone::None],
                status: Status::FullyQualified,
                group: Group::AnimalsAndNature,
                subgroup: SYNTHETIC_SUBGROUP.to_string(),
                introduced_in: None,
                index,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ninja_cats_are_numbered_consecutively() {
        let cats = ninja_cats(40);
        assert_eq!(cats.len(), SYNTHETIC_COUNT);
        let indices: Vec<u32> = cats.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![40, 41, 42, 43, 44, 45]);
    }

    #[test]
    fn test_ninja_cat_rendering() {
        let cats = ninja_cats(0);
        assert_eq!(cats[0].rendered, "\u{1F431}\u{200D}\u{1F464}");
        assert_eq!(cats[0].name, "ninja cat");
        assert_eq!(cats[5].code_points, vec![0x1F431, 0x200D, 0x1F680]);
        assert!(cats.iter().all(|c| c.group == Group::AnimalsAndNature));
    }
}
