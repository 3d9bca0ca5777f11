//! Where the registry text comes from.

use std::fmt;
use std::path::PathBuf;

use crate::error::RegistryError;
use crate::http;
use crate::parser::parse_registry;
use crate::types::ParseResult;

/// Registry for emoji 12.0, the revision the generated package targets.
pub const DEFAULT_REGISTRY_URL: &str = "https://unicode.org/Public/emoji/12.0/emoji-test.txt";

/// A registry location: a download URL or a local copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrySource {
    Url(String),
    File(PathBuf),
}

impl RegistrySource {
    /// Interpret a user-supplied location. Anything with a URL scheme is a
    /// download; everything else is a file path.
    pub fn from_location(location: &str) -> Self {
        if location.contains("://") {
            RegistrySource::Url(location.to_string())
        } else {
            RegistrySource::File(PathBuf::from(location))
        }
    }

    /// Fetch the whole registry text.
    pub fn fetch(&self) -> Result<String, RegistryError> {
        match self {
            RegistrySource::Url(url) => http::download_registry(url),
            RegistrySource::File(path) => {
                log::info!("Reading emoji list from: {}", path.display());
                std::fs::read_to_string(path).map_err(|source| RegistryError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        }
    }

    /// Fetch and parse. No partial result is produced on a fetch failure.
    pub fn load(&self) -> Result<ParseResult, RegistryError> {
        let text = self.fetch()?;
        parse_registry(&text)
    }
}

impl Default for RegistrySource {
    fn default() -> Self {
        RegistrySource::Url(DEFAULT_REGISTRY_URL.to_string())
    }
}

impl fmt::Display for RegistrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrySource::Url(url) => f.write_str(url),
            RegistrySource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
