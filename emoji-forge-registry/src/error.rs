//! Typed error types for emoji-forge-registry.
//!
//! Two tiers: [`RegistryError`] aborts a whole parse or download, while
//! [`LineError`] describes why a single data line was skipped. The parser
//! logs and drops `LineError`s; callers only ever see `RegistryError`.

use thiserror::Error;

/// Errors that abort acquisition or parsing of the registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A `# group:` header named a group outside the known taxonomy.
    #[error("Unknown emoji group found: '{0}'")]
    UnknownGroup(String),

    /// The registry URL was rejected before any request was made.
    #[error("Registry URL rejected: {0}")]
    InvalidUrl(String),

    /// The download failed (DNS, TLS, non-2xx, truncated body, ...).
    #[error("Registry download failed for '{url}': {details}")]
    Fetch {
        /// URL that was requested.
        url: String,
        /// Human-readable failure description.
        details: String,
    },

    /// A registry file on disk could not be read.
    #[error("Failed to read registry file '{path}': {source}")]
    Read {
        /// Path of the registry file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Reasons a single data line is not turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line did not contain exactly one `;`.
    #[error("expected exactly one ';' separator, found {0}")]
    SeparatorCount(usize),

    /// No hex code point tokens before the `;`.
    #[error("no code points before ';'")]
    NoCodePoints,

    /// A token before the `;` is not a base-16 number.
    #[error("invalid code point token '{0}'")]
    InvalidCodePoint(String),

    /// The text after `;` did not split into a status and a description.
    #[error("expected status and description around '#', found {0} fragment(s)")]
    FragmentCount(usize),

    /// The description lacked a rendered emoji followed by a name.
    #[error("expected an emoji followed by a name")]
    MissingName,
}
