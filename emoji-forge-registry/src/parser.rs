//! Line-oriented parser for `emoji-test.txt`.
//!
//! The registry is a flat list of data lines interleaved with comment
//! headers. Only four header kinds carry information:
//!
//! ```text
//! # Version: 12.0
//! # Date: 2019-01-15, 12:10:05 GMT
//! # group: Smileys & Emotion
//! # subgroup: face-smiling
//! 1F600 ; fully-qualified # 😀 grinning face
//! ```
//!
//! Everything else starting with `#` is prose and is dropped before the
//! scan. Data lines are parsed by [`parse_data_line`]; a malformed data line
//! is logged and skipped, while an unknown group aborts the whole parse.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

use crate::error::{LineError, RegistryError};
use crate::search_terms::derive_search_terms;
use crate::synthetic;
use crate::types::{EmojiRecord, Group, ParseResult, SkinTone, Status, Version};

const GROUP_PREFIX: &str = "# group:";
const SUBGROUP_PREFIX: &str = "# subgroup:";
const VERSION_PREFIX: &str = "# Version:";
const DATE_PREFIX: &str = "# Date:";

/// Date format of the `# Date:` header, without the trailing ` GMT`.
const DATE_FORMAT: &str = "%Y-%m-%d, %H:%M:%S";

static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();
static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
static EMOJI_VERSION_REGEX: OnceLock<Regex> = OnceLock::new();

fn version_regex() -> &'static Regex {
    VERSION_REGEX.get_or_init(|| {
        Regex::new(r"^# Version: (\d+)\.(\d+)").expect("Failed to compile version regex")
    })
}

fn date_regex() -> &'static Regex {
    DATE_REGEX.get_or_init(|| {
        Regex::new(r"^# Date: (\d{4}-\d{2}-\d{2}, \d{2}:\d{2}:\d{2}) GMT")
            .expect("Failed to compile date regex")
    })
}

/// The `E13.1` token newer registries put between the emoji and its name.
fn emoji_version_regex() -> &'static Regex {
    EMOJI_VERSION_REGEX.get_or_init(|| {
        Regex::new(r"^E(\d+)\.(\d+)$").expect("Failed to compile emoji version regex")
    })
}

/// Parse a complete registry document.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownGroup`] if a `# group:` header names a
/// group outside the known taxonomy. Malformed data lines never fail the
/// parse; they are logged at `warn` level and left out.
pub fn parse_registry(text: &str) -> Result<ParseResult, RegistryError> {
    log::info!("Started parsing emoji list...");

    let mut state = ScanState::default();
    for (line_number, line) in significant_lines(text) {
        state.apply(line_number, line)?;
    }

    log::info!(
        "Finished parsing emoji. Found {} emoji ({} line(s) skipped).",
        state.records.len(),
        state.skipped
    );
    Ok(state.finish())
}

/// Lines that take part in the scan, paired with their 1-based line number.
///
/// Keeps data lines and the four meaningful header kinds; drops blank lines
/// and all other comments.
fn significant_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
        .filter(|(_, line)| {
            !line.starts_with('#')
                || [GROUP_PREFIX, SUBGROUP_PREFIX, VERSION_PREFIX, DATE_PREFIX]
                    .iter()
                    .any(|prefix| line.starts_with(prefix))
        })
}

/// Mutable scan state, owned by a single [`parse_registry`] call.
#[derive(Debug, Default)]
struct ScanState {
    group: Option<Group>,
    subgroup: String,
    index: u32,
    version: Option<Version>,
    date: Option<NaiveDateTime>,
    records: Vec<EmojiRecord>,
    skipped: usize,
}

impl ScanState {
    fn apply(&mut self, line_number: usize, line: &str) -> Result<(), RegistryError> {
        if let Some(name) = line.strip_prefix(GROUP_PREFIX) {
            let group = Group::from_registry_name(name)?;
            self.enter_group(group);
        } else if let Some(name) = line.strip_prefix(SUBGROUP_PREFIX) {
            self.subgroup = name.trim().to_string();
        } else if line.starts_with('#') {
            self.apply_metadata(line);
        } else {
            self.apply_data_line(line_number, line);
        }
        Ok(())
    }

    fn enter_group(&mut self, group: Group) {
        let changed = self.group != Some(group);
        self.group = Some(group);
        log::debug!("Entering group '{}'", group.registry_name());

        if changed && group == Group::AnimalsAndNature {
            let cats = synthetic::ninja_cats(self.index);
            self.index += cats.len() as u32;
            self.records.extend(cats);
        }
    }

    fn apply_metadata(&mut self, line: &str) {
        if let Some(caps) = version_regex().captures(line) {
            match (caps[1].parse::<u32>(), caps[2].parse::<u32>()) {
                (Ok(major), Ok(minor)) => self.version = Some(Version::new(major, minor)),
                _ => log::warn!("Unparseable registry version header: {line}"),
            }
        } else if let Some(caps) = date_regex().captures(line) {
            match NaiveDateTime::parse_from_str(&caps[1], DATE_FORMAT) {
                Ok(date) => self.date = Some(date),
                Err(e) => log::warn!("Unparseable registry date header '{line}': {e}"),
            }
        } else {
            log::debug!("Ignoring header line: {line}");
        }
    }

    fn apply_data_line(&mut self, line_number: usize, line: &str) {
        let Some(group) = self.group else {
            log::warn!("Skipping line {line_number} before any group header: {line}");
            self.skipped += 1;
            return;
        };

        match parse_data_line(line, group, &self.subgroup, self.index) {
            Ok(record) => {
                self.records.push(record);
                self.index += 1;
            }
            Err(e) => {
                log::warn!("Invalid emoji line {line_number} ({e}): {line}");
                self.skipped += 1;
            }
        }
    }

    fn finish(self) -> ParseResult {
        ParseResult::new(self.records, self.version, self.date)
    }
}

/// Parse one data line into a record.
///
/// ```text
/// <hex code points> ; <status> # <emoji> [E<x.y>] <name...>
/// ```
///
/// An unrecognised status is not an error: it is logged and the record is
/// kept with [`Status::Component`].
pub fn parse_data_line(
    line: &str,
    group: Group,
    subgroup: &str,
    index: u32,
) -> Result<EmojiRecord, LineError> {
    let mut sections = line.split(';');
    let (Some(code_section), Some(description_section), None) =
        (sections.next(), sections.next(), sections.next())
    else {
        return Err(LineError::SeparatorCount(line.matches(';').count()));
    };

    let code_points = parse_code_points(code_section)?;

    // Keycap "#" lines end in the delimiter character itself.
    let ends_with_hash = line.trim().ends_with('#');

    let fragments: Vec<&str> = description_section
        .split('#')
        .filter(|fragment| !fragment.trim().is_empty())
        .collect();
    let [status_fragment, description] = fragments[..] else {
        return Err(LineError::FragmentCount(fragments.len()));
    };
    let mut description = description.to_string();
    if ends_with_hash {
        description.push('#');
    }

    let status_text = status_fragment.trim();
    let status = status_text.parse::<Status>().unwrap_or_else(|_| {
        log::warn!("Unknown status found: '{status_text}', using component");
        Status::Component
    });

    let tokens: Vec<&str> = description.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(LineError::MissingName);
    }

    let rendered = restore_rendered(tokens[0], &code_points);

    let mut name_start = 1;
    let mut introduced_in = None;
    if tokens.len() > 2
        && let Some(caps) = emoji_version_regex().captures(tokens[1])
        && let (Ok(major), Ok(minor)) = (caps[1].parse::<u32>(), caps[2].parse::<u32>())
    {
        introduced_in = Some(Version::new(major, minor));
        name_start = 2;
    }
    let name = tokens[name_start..].join(" ");

    Ok(EmojiRecord {
        skin_tones: SkinTone::from_code_points(&code_points),
        search_terms: derive_search_terms(&name),
        code_points,
        rendered,
        name,
        status,
        group,
        subgroup: subgroup.to_string(),
        introduced_in,
        index,
    })
}

fn parse_code_points(section: &str) -> Result<Vec<u32>, LineError> {
    let code_points = section
        .split_whitespace()
        .map(|token| {
            u32::from_str_radix(token, 16).map_err(|_| LineError::InvalidCodePoint(token.to_string()))
        })
        .collect::<Result<Vec<u32>, LineError>>()?;

    if code_points.is_empty() {
        return Err(LineError::NoCodePoints);
    }
    Ok(code_points)
}

/// Undo the loss of a leading `#` in the rendered token.
///
/// The `#️⃣` keycap starts with the same character used as the field
/// delimiter, so splitting on `#` leaves only `FE0F 20E3` behind. When the
/// code points spell exactly `#` followed by the token, the full sequence is
/// used instead.
fn restore_rendered(token: &str, code_points: &[u32]) -> String {
    let composed: String = code_points.iter().filter_map(|&cp| char::from_u32(cp)).collect();
    match composed.strip_suffix(token) {
        Some("#") => composed,
        _ => token.to_string(),
    }
}
