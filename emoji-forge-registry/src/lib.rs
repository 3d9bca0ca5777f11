//! Unicode emoji registry acquisition and parsing for emoji-forge.
//!
//! This crate provides:
//! - Download of `emoji-test.txt` over HTTPS (or reading a local copy)
//! - A line-oriented parser producing typed [`EmojiRecord`]s
//! - Search-term derivation from emoji names
//! - Injection of vendor-only compound emoji (Windows ninja cats)

pub mod error;
pub mod http;
pub mod parser;
pub mod search_terms;
pub mod source;
pub mod synthetic;
pub mod types;

// Re-export main types for convenience
pub use error::{LineError, RegistryError};
pub use parser::{parse_data_line, parse_registry};
pub use search_terms::derive_search_terms;
pub use source::{DEFAULT_REGISTRY_URL, RegistrySource};
pub use types::{
    EmojiRecord, Group, ParseResult, SKIN_TONE_MODIFIER_FIRST, SKIN_TONE_MODIFIER_LAST, SkinTone,
    Status, Version,
};
