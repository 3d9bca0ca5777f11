//! Shared integration test helpers for emoji-forge.
//!
//! Include with `mod common;` at the top of a test file. The
//! `#[allow(dead_code)]` keeps files that use only some helpers quiet.

#![allow(dead_code)]

use emoji_forge::config::Config;
use emoji_forge_registry::{EmojiRecord, ParseResult, Status, parse_registry};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small emoji-test.txt with qualified/unqualified pairs, a keycap and the
/// Animals & Nature group the synthetic cats are injected into.
pub const REGISTRY: &str = "\
# emoji-test.txt
# Date: 2019-01-15, 12:10:05 GMT
# Version: 12.0

# group: Smileys & Emotion

# subgroup: face-smiling
1F600                                      ; fully-qualified     # 😀 grinning face

# subgroup: face-affection
263A FE0F                                  ; fully-qualified     # ☺️ smiling face
263A                                       ; unqualified         # ☺ smiling face

# group: People & Body

# subgroup: person-role
1F468 1F3FF 200D 2695 FE0F                 ; fully-qualified     # 👨🏿‍⚕️ man health worker: dark skin tone

# group: Component

# subgroup: skin-tone
1F3FB                                      ; component           # 🏻 light skin tone

# group: Animals & Nature

# subgroup: animal-mammal
1F431                                      ; fully-qualified     # 🐱 cat face

# group: Activities

# subgroup: award-medal
1F947                                      ; fully-qualified     # 🥇 1st place medal

# group: Symbols

# subgroup: keycap
0023 FE0F 20E3                             ; fully-qualified     # #️⃣ keycap: #
0023 20E3                                  ; unqualified         # #⃣ keycap: #

#EOF
";

/// `REGISTRY`, parsed.
pub fn parsed_registry() -> ParseResult {
    parse_registry(REGISTRY).expect("Failed to parse test registry")
}

/// The record named `name` with `status`.
pub fn record<'a>(result: &'a ParseResult, name: &str, status: Status) -> &'a EmojiRecord {
    result
        .records()
        .iter()
        .find(|r| r.name == name && r.status == status)
        .unwrap_or_else(|| panic!("no {status:?} record named {name:?}"))
}

/// A config that reads `REGISTRY` from a temp file, writes into the temp
/// dir, and has no usable font.
///
/// Keep the `TempDir` alive until all I/O has completed.
pub fn offline_config() -> (Config, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let registry_path = temp_dir.path().join("emoji-test.txt");
    fs::write(&registry_path, REGISTRY).expect("Failed to write test registry");

    let config = Config {
        source: registry_path.display().to_string(),
        font_path: Some(temp_dir.path().join("missing-font.ttf")),
        font_families: Vec::new(),
        output_dir: temp_dir.path().join("out"),
        ..Config::default()
    };
    (config, temp_dir)
}

/// Path of `name` inside the config's output directory.
pub fn output_file(config: &Config, name: &str) -> PathBuf {
    config.output_dir.join(name)
}
