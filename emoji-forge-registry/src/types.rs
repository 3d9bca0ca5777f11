//! Data model for parsed registry entries.

use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

use crate::error::RegistryError;

/// First skin-tone modifier code point (U+1F3FB, light skin tone).
pub const SKIN_TONE_MODIFIER_FIRST: u32 = 0x1F3FB;

/// Last skin-tone modifier code point (U+1F3FF, dark skin tone).
pub const SKIN_TONE_MODIFIER_LAST: u32 = 0x1F3FF;

/// A `major.minor` version pair, used both for the registry revision and for
/// the per-emoji `E<x.y>` token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Unicode qualification status of an emoji sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Component,
    FullyQualified,
    MinimallyQualified,
    Unqualified,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Component,
        Status::FullyQualified,
        Status::MinimallyQualified,
        Status::Unqualified,
    ];

    /// The token used for this status in `emoji-test.txt`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Component => "component",
            Status::FullyQualified => "fully-qualified",
            Status::MinimallyQualified => "minimally-qualified",
            Status::Unqualified => "unqualified",
        }
    }
}

impl FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(())
    }
}

/// Skin tone carried by an emoji sequence.
///
/// `None` is the default yellow rendering used when the sequence contains no
/// Fitzpatrick modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinTone {
    None,
    Light,
    MediumLight,
    Medium,
    MediumDark,
    Dark,
}

impl SkinTone {
    /// Map a modifier code point (U+1F3FB..=U+1F3FF) to its tone.
    pub fn from_modifier(code_point: u32) -> Option<Self> {
        match code_point {
            0x1F3FB => Some(SkinTone::Light),
            0x1F3FC => Some(SkinTone::MediumLight),
            0x1F3FD => Some(SkinTone::Medium),
            0x1F3FE => Some(SkinTone::MediumDark),
            0x1F3FF => Some(SkinTone::Dark),
            _ => None,
        }
    }

    /// Collect one tone per modifier in `code_points`, left to right.
    ///
    /// Returns exactly `[SkinTone::None]` when no modifier is present.
    pub fn from_code_points(code_points: &[u32]) -> Vec<Self> {
        let tones: Vec<SkinTone> = code_points
            .iter()
            .filter_map(|&cp| Self::from_modifier(cp))
            .collect();
        if tones.is_empty() {
            vec![SkinTone::None]
        } else {
            tones
        }
    }

    /// PascalCase name used in generated declarations.
    pub fn identifier(&self) -> &'static str {
        match self {
            SkinTone::None => "None",
            SkinTone::Light => "Light",
            SkinTone::MediumLight => "MediumLight",
            SkinTone::Medium => "Medium",
            SkinTone::MediumDark => "MediumDark",
            SkinTone::Dark => "Dark",
        }
    }
}

/// Top-level emoji taxonomy group as declared by `# group:` headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Group {
    SmileysAndEmotion,
    PeopleAndBody,
    Component,
    AnimalsAndNature,
    FoodAndDrink,
    TravelAndPlaces,
    Activities,
    Objects,
    Symbols,
    Flags,
}

/// Registry header text for every group.
///
/// Must list each `Group` variant exactly once; `Group::from_registry_name`
/// resolves headers through this table.
const GROUP_NAMES: [(&str, Group); 10] = [
    ("Smileys & Emotion", Group::SmileysAndEmotion),
    ("People & Body", Group::PeopleAndBody),
    ("Component", Group::Component),
    ("Animals & Nature", Group::AnimalsAndNature),
    ("Food & Drink", Group::FoodAndDrink),
    ("Travel & Places", Group::TravelAndPlaces),
    ("Activities", Group::Activities),
    ("Objects", Group::Objects),
    ("Symbols", Group::Symbols),
    ("Flags", Group::Flags),
];

impl Group {
    /// All groups in registry order.
    pub const ALL: [Group; 10] = [
        Group::SmileysAndEmotion,
        Group::PeopleAndBody,
        Group::Component,
        Group::AnimalsAndNature,
        Group::FoodAndDrink,
        Group::TravelAndPlaces,
        Group::Activities,
        Group::Objects,
        Group::Symbols,
        Group::Flags,
    ];

    /// Resolve a `# group:` header name.
    ///
    /// An unknown name means the registry vocabulary changed and is reported
    /// as [`RegistryError::UnknownGroup`].
    pub fn from_registry_name(name: &str) -> Result<Self, RegistryError> {
        let name = name.trim();
        GROUP_NAMES
            .iter()
            .find(|(registry_name, _)| *registry_name == name)
            .map(|(_, group)| *group)
            .ok_or_else(|| RegistryError::UnknownGroup(name.to_string()))
    }

    /// The English header text used in `emoji-test.txt`.
    pub fn registry_name(&self) -> &'static str {
        GROUP_NAMES
            .iter()
            .find(|(_, group)| group == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// PascalCase name used in generated declarations.
    pub fn identifier(&self) -> &'static str {
        match self {
            Group::SmileysAndEmotion => "SmileysAndEmotion",
            Group::PeopleAndBody => "PeopleAndBody",
            Group::Component => "Component",
            Group::AnimalsAndNature => "AnimalsAndNature",
            Group::FoodAndDrink => "FoodAndDrink",
            Group::TravelAndPlaces => "TravelAndPlaces",
            Group::Activities => "Activities",
            Group::Objects => "Objects",
            Group::Symbols => "Symbols",
            Group::Flags => "Flags",
        }
    }
}

/// One emoji sequence from the registry (or a synthetic vendor entry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRecord {
    /// Unicode scalar values of the sequence, never empty.
    pub code_points: Vec<u32>,
    /// Composed display string.
    pub rendered: String,
    /// Canonical name, e.g. "man health worker: dark skin tone".
    pub name: String,
    /// Lower-cased keywords derived from `name`.
    pub search_terms: Vec<String>,
    /// One entry per skin-tone modifier, or `[SkinTone::None]`.
    pub skin_tones: Vec<SkinTone>,
    pub status: Status,
    pub group: Group,
    pub subgroup: String,
    /// Emoji version the sequence was introduced in, when the registry says.
    pub introduced_in: Option<Version>,
    /// Position in the parse output, unique and increasing.
    pub index: u32,
}

impl EmojiRecord {
    /// Formats the code points as upper-case hex tokens joined by spaces.
    pub fn code_point_string(&self) -> String {
        self.code_points
            .iter()
            .map(|cp| format!("{cp:04X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// True if the sequence carries at least one skin-tone modifier.
    pub fn has_skin_tone(&self) -> bool {
        self.skin_tones.iter().any(|tone| *tone != SkinTone::None)
    }
}

/// Everything read from one registry file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    records: Vec<EmojiRecord>,
    version: Option<Version>,
    date: Option<NaiveDateTime>,
}

impl ParseResult {
    pub(crate) fn new(
        records: Vec<EmojiRecord>,
        version: Option<Version>,
        date: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            records,
            version,
            date,
        }
    }

    /// Records in emission order.
    pub fn records(&self) -> &[EmojiRecord] {
        &self.records
    }

    /// Registry revision from the `# Version:` header.
    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// Publication timestamp (GMT) from the `# Date:` header.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to `group`, in emission order.
    pub fn group(&self, group: Group) -> impl Iterator<Item = &EmojiRecord> {
        self.records.iter().filter(move |r| r.group == group)
    }
}
