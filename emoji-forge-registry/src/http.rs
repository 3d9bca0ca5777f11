//! HTTP client helper with native-tls support.

use std::time::Duration;
use ureq::Agent;
use ureq::tls::{RootCerts, TlsConfig, TlsProvider};

use crate::error::RegistryError;

/// Global timeout for all HTTP operations (30 seconds).
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size for the registry download (10 MB).
///
/// `emoji-test.txt` is well under 1 MB; anything larger is not a registry.
pub const MAX_REGISTRY_SIZE: u64 = 10 * 1024 * 1024;

/// Hosts the registry may be downloaded from.
const ALLOWED_HOSTS: &[&str] = &["unicode.org", "www.unicode.org"];

/// Validate that a URL is acceptable for a registry download.
///
/// Enforces HTTPS and the Unicode Consortium host allowlist.
pub fn validate_registry_url(url: &str) -> Result<(), RegistryError> {
    let parsed = url::Url::parse(url)
        .map_err(|e| RegistryError::InvalidUrl(format!("Invalid URL '{}': {}", url, e)))?;

    match parsed.scheme() {
        "https" => {}
        scheme => {
            return Err(RegistryError::InvalidUrl(format!(
                "Insecure URL scheme '{}' rejected; only HTTPS is allowed. URL: {}",
                scheme, url
            )));
        }
    }

    let host = parsed.host_str().unwrap_or("");
    if !ALLOWED_HOSTS.contains(&host) {
        return Err(RegistryError::InvalidUrl(format!(
            "URL host '{}' is not in the allowed list for registry downloads. \
             Allowed hosts: {}. URL: {}",
            host,
            ALLOWED_HOSTS.join(", "),
            url
        )));
    }

    Ok(())
}

/// Create a new HTTP agent configured with native-tls and a global timeout.
pub fn agent() -> Agent {
    let tls_config = TlsConfig::builder()
        .provider(TlsProvider::NativeTls)
        .root_certs(RootCerts::PlatformVerifier)
        .build();

    Agent::config_builder()
        .tls_config(tls_config)
        .timeout_global(Some(HTTP_TIMEOUT))
        .build()
        .into()
}

/// Download the registry text from `url`.
///
/// # Errors
///
/// Returns [`RegistryError::InvalidUrl`] if the URL fails validation, and
/// [`RegistryError::Fetch`] if the request or body read fails or the body
/// exceeds [`MAX_REGISTRY_SIZE`].
pub fn download_registry(url: &str) -> Result<String, RegistryError> {
    validate_registry_url(url)?;

    log::info!("Started emoji list download from: {}", url);
    let fetch_error = |details: String| RegistryError::Fetch {
        url: url.to_string(),
        details,
    };

    let text = agent()
        .get(url)
        .header("User-Agent", "emoji-forge")
        .call()
        .map_err(|e| fetch_error(e.to_string()))?
        .into_body()
        .with_config()
        .limit(MAX_REGISTRY_SIZE)
        .read_to_string()
        .map_err(|e| {
            fetch_error(format!(
                "{}. The response may have been truncated or the connection dropped.",
                e
            ))
        })?;

    log::info!("Finished emoji list download ({} bytes).", text.len());
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_unicode_org() {
        assert!(
            validate_registry_url("https://unicode.org/Public/emoji/12.0/emoji-test.txt").is_ok()
        );
        assert!(
            validate_registry_url("https://www.unicode.org/Public/emoji/15.1/emoji-test.txt")
                .is_ok()
        );
    }

    #[test]
    fn test_rejected_http_scheme() {
        let err = validate_registry_url("http://unicode.org/Public/emoji/12.0/emoji-test.txt")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'http'"), "Error should mention the bad scheme: {msg}");
        assert!(msg.contains("HTTPS"), "Error should mention HTTPS requirement: {msg}");
    }

    #[test]
    fn test_rejected_unknown_host() {
        let err = validate_registry_url("https://evil.example.com/emoji-test.txt").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("evil.example.com"), "Error should name the host: {msg}");
        assert!(msg.contains("allowed list"), "Error should mention the allowlist: {msg}");
    }

    #[test]
    fn test_rejected_lookalike_host() {
        assert!(validate_registry_url("https://unicode.org.example.com/emoji-test.txt").is_err());
    }

    #[test]
    fn test_rejected_invalid_url() {
        let err = validate_registry_url("not a url at all").unwrap_err();
        assert!(matches!(err, RegistryError::InvalidUrl(ref msg) if msg.contains("Invalid URL")));
    }
}
