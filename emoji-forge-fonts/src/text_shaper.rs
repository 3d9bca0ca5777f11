//! Text shaping via rustybuzz (HarfBuzz port).
//!
//! Emoji sequences such as ZWJ families, skin-tone modifiers and keycaps are
//! only drawn as one picture when the font's GSUB tables ligate them. Shaping
//! the sequence and looking at the resulting glyph run is how the rest of the
//! crate finds out whether that happens.
//!
//! # Usage
//!
//! ```ignore
//! let mut shaper = TextShaper::new();
//! let run = shaper.shape_text("👋🏽", &font, ShapingOptions::default());
//! let ids: &[u32] = run.glyph_ids();
//! ```
use lru::LruCache;
use rustybuzz::{Face, Feature, UnicodeBuffer};
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::Arc;

use crate::font_loader::FontData;

/// Default number of cached shaped runs.
const DEFAULT_CACHE_SIZE: usize = 4096;

/// Options for text shaping
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShapingOptions {
    /// Enable standard ligatures (liga, clig)
    pub enable_ligatures: bool,

    /// Enable kerning adjustments
    pub enable_kerning: bool,

    /// Enable contextual alternates
    pub enable_contextual_alternates: bool,
}

impl Default for ShapingOptions {
    fn default() -> Self {
        Self {
            enable_ligatures: true,
            enable_kerning: true,
            enable_contextual_alternates: true,
        }
    }
}

impl ShapingOptions {
    /// OpenType features requested by these options.
    ///
    /// `ccmp` is always on; it performs the glyph composition emoji
    /// sequences depend on.
    fn features(&self) -> Vec<Feature> {
        let mut tags = Vec::new();
        if self.enable_ligatures {
            tags.extend(["liga", "clig"]);
        }
        if self.enable_kerning {
            tags.push("kern");
        }
        if self.enable_contextual_alternates {
            tags.push("calt");
        }
        tags.push("ccmp");

        tags.into_iter()
            .filter_map(|tag| Feature::from_str(tag).ok())
            .collect()
    }
}

/// Result of shaping a text run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedRun {
    glyph_ids: Vec<u32>,
}

impl ShapedRun {
    /// Glyph ids in visual order.
    pub fn glyph_ids(&self) -> &[u32] {
        &self.glyph_ids
    }
}

/// Cache key for shaped text runs
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct ShapeCacheKey {
    text: String,
    font_origin: String,
    options: ShapingOptions,
}

/// Text shaper using HarfBuzz via rustybuzz
pub struct TextShaper {
    /// Cache of shaped text runs
    shape_cache: LruCache<ShapeCacheKey, Arc<ShapedRun>>,
}

impl TextShaper {
    /// Create a new text shaper with default settings
    pub fn new() -> Self {
        Self::with_cache_size(DEFAULT_CACHE_SIZE)
    }

    /// Create a new text shaper with a specific cache size (minimum 1)
    pub fn with_cache_size(max_cache_size: usize) -> Self {
        let capacity = NonZeroUsize::new(max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            shape_cache: LruCache::new(capacity),
        }
    }

    /// Shape a text run using rustybuzz
    ///
    /// # Returns
    /// A `ShapedRun` with the glyph ids. If the font data cannot be parsed
    /// the run is empty.
    pub fn shape_text(
        &mut self,
        text: &str,
        font: &FontData,
        options: ShapingOptions,
    ) -> Arc<ShapedRun> {
        let cache_key = ShapeCacheKey {
            text: text.to_string(),
            font_origin: font.origin.clone(),
            options,
        };

        if let Some(cached) = self.shape_cache.get(&cache_key) {
            return Arc::clone(cached);
        }

        let glyph_ids = match Face::from_slice(&font.data, font.face_index) {
            Some(face) => {
                let mut unicode_buffer = UnicodeBuffer::new();
                unicode_buffer.push_str(text);
                unicode_buffer.set_direction(rustybuzz::Direction::LeftToRight);

                let features = cache_key.options.features();
                let glyph_buffer = rustybuzz::shape(&face, &features, unicode_buffer);
                glyph_buffer
                    .glyph_infos()
                    .iter()
                    .map(|info| info.glyph_id)
                    .collect()
            }
            None => {
                log::warn!("Font {} could not be parsed for shaping", font.origin);
                Vec::new()
            }
        };

        let shaped_run = Arc::new(ShapedRun { glyph_ids });
        self.shape_cache.put(cache_key, Arc::clone(&shaped_run));
        shaped_run
    }

    /// Number of runs currently cached
    pub fn cache_size(&self) -> usize {
        self.shape_cache.len()
    }
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_features_include_ccmp() {
        let features = ShapingOptions::default().features();
        assert_eq!(features.len(), 5);

        let bare = ShapingOptions {
            enable_ligatures: false,
            enable_kerning: false,
            enable_contextual_alternates: false,
        };
        assert_eq!(bare.features().len(), 1);
    }

    #[test]
    fn test_cache_size_minimum() {
        let shaper = TextShaper::with_cache_size(0);
        assert_eq!(shaper.cache_size(), 0);
    }

    #[test]
    fn test_unparseable_font_shapes_to_empty_cached_run() {
        let font = FontData {
            data: Arc::new(vec![0u8; 64]),
            face_index: 0,
            origin: "zeros".to_string(),
        };
        let mut shaper = TextShaper::new();

        let first = shaper.shape_text("😀", &font, ShapingOptions::default());
        assert!(first.glyph_ids().is_empty());
        assert_eq!(shaper.cache_size(), 1);

        let second = shaper.shape_text("😀", &font, ShapingOptions::default());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(shaper.cache_size(), 1);
    }
}
