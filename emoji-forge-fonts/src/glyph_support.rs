//! Does a font draw an emoji sequence as one picture?
//!
//! The check is a heuristic over the shaped glyph run, tuned against real
//! emoji fonts rather than derived from any standard:
//!
//! 1. Trailing variation-selector glyphs are ignored.
//! 2. An empty run is unsupported.
//! 3. A run ending in a standalone skin-tone swatch is unsupported; the
//!    shaper drew the modifier next to the base instead of composing them.
//! 4. Otherwise the run is supported unless it contains a missing glyph or a
//!    stray variation selector.
//!
//! The skin-tone swatch ids differ per font. [`FontGlyphOracle`] reads them
//! from the font's cmap; other oracles supply their own.

use emoji_forge_registry::{EmojiRecord, SKIN_TONE_MODIFIER_FIRST, SKIN_TONE_MODIFIER_LAST};

use crate::font_loader::FontData;
use crate::text_shaper::{ShapingOptions, TextShaper};

/// Glyph id the shaper emits for characters the font cannot map (`.notdef`).
pub const MISSING_GLYPH: u32 = 0;

/// Glyph id the shaper emits for an unconsumed variation selector.
pub const VARIATION_SELECTOR_GLYPH: u32 = 3;

/// Number of skin-tone modifiers, and so the size of every fallback blocklist.
pub const SKIN_TONE_GLYPH_COUNT: usize =
    (SKIN_TONE_MODIFIER_LAST - SKIN_TONE_MODIFIER_FIRST + 1) as usize;

/// Decide support from a shaped glyph run.
///
/// `skin_tone_glyphs` are the ids the font uses to draw the five skin-tone
/// modifiers on their own.
pub fn classify_glyph_run(glyph_ids: &[u32], skin_tone_glyphs: &[u32]) -> bool {
    let end = glyph_ids
        .iter()
        .rposition(|&id| id != VARIATION_SELECTOR_GLYPH)
        .map_or(0, |last| last + 1);
    let glyph_ids = &glyph_ids[..end];

    let Some(last) = glyph_ids.last() else {
        return false;
    };
    if skin_tone_glyphs.contains(last) {
        return false;
    }

    !glyph_ids
        .iter()
        .any(|&id| id == MISSING_GLYPH || id == VARIATION_SELECTOR_GLYPH)
}

/// A font-backed answer to "will this sequence render as one emoji?".
pub trait GlyphSupportOracle {
    /// Shape `text` and return the glyph ids in visual order.
    fn shape_glyph_ids(&mut self, text: &str) -> Vec<u32>;

    /// Glyph ids of the standalone skin-tone modifiers in this font, the
    /// fallback rendering of a modifier the font could not compose.
    fn fallback_glyphs(&self) -> &[u32];

    /// Whether `text` shapes to a single composed, non-fallback run.
    fn supports(&mut self, text: &str) -> bool {
        let glyph_ids = self.shape_glyph_ids(text);
        classify_glyph_run(&glyph_ids, self.fallback_glyphs())
    }

    /// [`supports`](Self::supports) applied to a record's rendered text.
    fn supports_record(&mut self, record: &EmojiRecord) -> bool {
        self.supports(&record.rendered)
    }
}

/// Oracle backed by a real font and the rustybuzz shaper.
pub struct FontGlyphOracle {
    font: FontData,
    shaper: TextShaper,
    skin_tone_glyphs: Vec<u32>,
}

impl FontGlyphOracle {
    /// Build an oracle for `font`, reading its skin-tone glyph ids from the cmap.
    pub fn new(font: FontData) -> Self {
        let skin_tone_glyphs = skin_tone_glyphs_for(&font);
        log::debug!(
            "Skin-tone fallback glyphs for {}: {:?}",
            font.origin,
            skin_tone_glyphs
        );
        check_fallback_glyphs(&font.origin, &skin_tone_glyphs);
        Self {
            font,
            shaper: TextShaper::new(),
            skin_tone_glyphs,
        }
    }

    pub fn font(&self) -> &FontData {
        &self.font
    }
}

impl GlyphSupportOracle for FontGlyphOracle {
    fn shape_glyph_ids(&mut self, text: &str) -> Vec<u32> {
        self.shaper
            .shape_text(text, &self.font, ShapingOptions::default())
            .glyph_ids()
            .to_vec()
    }

    fn fallback_glyphs(&self) -> &[u32] {
        &self.skin_tone_glyphs
    }
}

/// Glyph ids `font` maps U+1F3FB..=U+1F3FF to.
///
/// Modifiers the font does not map are left out, since they shape to
/// [`MISSING_GLYPH`] and are rejected by that rule already.
fn skin_tone_glyphs_for(font: &FontData) -> Vec<u32> {
    let Some(face) = rustybuzz::Face::from_slice(&font.data, font.face_index) else {
        return Vec::new();
    };
    (SKIN_TONE_MODIFIER_FIRST..=SKIN_TONE_MODIFIER_LAST)
        .filter_map(char::from_u32)
        .filter_map(|c| face.glyph_index(c))
        .map(|id| u32::from(id.0))
        .filter(|&id| id != MISSING_GLYPH)
        .collect()
}

/// Warn when `font` maps fewer than all five skin-tone modifiers.
///
/// Returns whether the blocklist is complete.
fn check_fallback_glyphs(origin: &str, glyphs: &[u32]) -> bool {
    if glyphs.len() >= SKIN_TONE_GLYPH_COUNT {
        return true;
    }
    log::warn!(
        "Font {} maps only {} of {} skin-tone modifiers; composed skin-tone emoji may be misclassified",
        origin,
        glyphs.len(),
        SKIN_TONE_GLYPH_COUNT
    );
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWATCHES: [u32; SKIN_TONE_GLYPH_COUNT] = [1401, 1402, 1403, 1404, 1405];

    #[test]
    fn test_empty_run_unsupported() {
        assert!(!classify_glyph_run(&[], &SWATCHES));
    }

    #[test]
    fn test_only_variation_selectors_unsupported() {
        assert!(!classify_glyph_run(
            &[VARIATION_SELECTOR_GLYPH, VARIATION_SELECTOR_GLYPH],
            &SWATCHES
        ));
    }

    #[test]
    fn test_single_composed_glyph_supported() {
        assert!(classify_glyph_run(&[812], &SWATCHES));
    }

    #[test]
    fn test_trailing_variation_selector_ignored() {
        assert!(classify_glyph_run(&[812, VARIATION_SELECTOR_GLYPH], &SWATCHES));
    }

    #[test]
    fn test_inner_variation_selector_unsupported() {
        assert!(!classify_glyph_run(
            &[812, VARIATION_SELECTOR_GLYPH, 913],
            &SWATCHES
        ));
    }

    #[test]
    fn test_missing_glyph_unsupported() {
        assert!(!classify_glyph_run(&[MISSING_GLYPH], &SWATCHES));
        assert!(!classify_glyph_run(&[812, MISSING_GLYPH, 913], &SWATCHES));
    }

    #[test]
    fn test_trailing_skin_tone_swatch_unsupported() {
        for swatch in SWATCHES {
            assert!(!classify_glyph_run(&[812, swatch], &SWATCHES));
            assert!(!classify_glyph_run(
                &[812, swatch, VARIATION_SELECTOR_GLYPH],
                &SWATCHES
            ));
        }
    }

    #[test]
    fn test_leading_skin_tone_swatch_allowed() {
        // Only the final glyph is checked against the blocklist.
        assert!(classify_glyph_run(&[1403, 812], &SWATCHES));
    }

    #[test]
    fn test_blocklist_size_matches_modifier_range() {
        assert_eq!(SKIN_TONE_GLYPH_COUNT, 5);
    }

    #[test]
    fn test_short_blocklist_is_reported() {
        assert!(check_fallback_glyphs("full", &SWATCHES));
        assert!(!check_fallback_glyphs("partial", &SWATCHES[..3]));
        assert!(!check_fallback_glyphs("none", &[]));
    }
}
