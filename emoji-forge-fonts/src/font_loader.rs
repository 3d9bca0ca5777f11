//! Font loading from an explicit path or from system fonts by family name.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use fontdb::{Database, Family, Query};

/// Emoji font families in priority order.
///
/// Searched when no explicit font path is configured or the configured path
/// does not exist.
pub const EMOJI_FAMILIES: &[&str] = &[
    "Segoe UI Emoji",
    "Noto Color Emoji",
    "Apple Color Emoji",
    "Twemoji Mozilla",
    "EmojiOne Color",
];

/// Owned font bytes plus the face index within them.
#[derive(Clone)]
pub struct FontData {
    /// Raw font data bytes (TTF/OTF/TTC)
    pub data: Arc<Vec<u8>>,
    /// Face index within `data` (0 for single-face fonts)
    pub face_index: u32,
    /// Where the font came from, for diagnostics
    pub origin: String,
}

impl std::fmt::Debug for FontData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontData")
            .field("origin", &self.origin)
            .field("data_len", &self.data.len())
            .field("face_index", &self.face_index)
            .finish()
    }
}

impl FontData {
    /// Wrap font bytes, checking that they parse as a font face.
    ///
    /// # Returns
    /// `None` if `face_index` does not name a valid face in `data`.
    pub fn new(data: Vec<u8>, face_index: u32, origin: impl Into<String>) -> Option<Self> {
        rustybuzz::Face::from_slice(&data, face_index)?;
        Some(FontData {
            data: Arc::new(data),
            face_index,
            origin: origin.into(),
        })
    }

    /// Load face 0 of the font file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path)
            .with_context(|| format!("Failed to read font file {}", path.display()))?;
        match Self::new(data, 0, path.display().to_string()) {
            Some(font) => Ok(font),
            None => bail!("{} is not a valid font file", path.display()),
        }
    }

    /// Find an installed font by family name.
    pub fn from_family(db: &Database, family: &str) -> Option<Self> {
        let query = Query {
            families: &[Family::Name(family)],
            ..Query::default()
        };
        let id = db.query(&query)?;
        let (data, face_index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
        Self::new(data, face_index, family)
    }
}

/// Resolve the font used for glyph-support checks.
///
/// Tries `path` first, then each of `families` among the system fonts.
///
/// # Errors
/// Fails if `path` exists but is not a font, or if nothing could be found.
pub fn load_font(path: Option<&Path>, families: &[String]) -> Result<FontData> {
    if let Some(path) = path {
        if path.exists() {
            log::info!("Loading font from {}", path.display());
            return FontData::from_path(path);
        }
        log::warn!(
            "Font file {} not found, searching system fonts",
            path.display()
        );
    }

    let mut db = Database::new();
    db.load_system_fonts();
    log::info!("Loaded {} system fonts", db.len());

    for family in families {
        if let Some(font) = FontData::from_family(&db, family) {
            log::info!("Using system font: {}", family);
            return Ok(font);
        }
        log::debug!("Font family '{}' not installed", family);
    }

    bail!(
        "No emoji font available (tried {} families)",
        families.len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_data_invalid_bytes() {
        assert!(FontData::new(vec![0u8; 100], 0, "zeros").is_none());
    }

    #[test]
    fn test_font_data_empty_bytes() {
        assert!(FontData::new(vec![], 0, "empty").is_none());
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = FontData::from_path(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(err.to_string().contains("Failed to read font file"));
    }

    #[test]
    fn test_load_font_with_no_candidates() {
        let err = load_font(None, &[]).unwrap_err();
        assert!(err.to_string().contains("No emoji font available"));
    }
}
