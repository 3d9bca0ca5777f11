//! Font loading, text shaping and glyph-support checks for emoji-forge.
//!
//! This crate provides:
//! - Font loading from a file path or from system fonts via fontdb
//! - HarfBuzz-based text shaping via rustybuzz with an LRU result cache
//! - The glyph-support heuristic deciding whether a font composes an emoji
//!   sequence into a single glyph
//!
//! # Architecture
//!
//! `GlyphSupportOracle` is the capability the generator depends on.
//! `FontGlyphOracle` implements it with a loaded `FontData` and a
//! `TextShaper`; tests implement it with fixed glyph tables.

pub mod font_loader;
pub mod glyph_support;
pub mod text_shaper;

// Re-export main types for convenience
pub use font_loader::{EMOJI_FAMILIES, FontData, load_font};
pub use glyph_support::{
    FontGlyphOracle, GlyphSupportOracle, MISSING_GLYPH, SKIN_TONE_GLYPH_COUNT,
    VARIATION_SELECTOR_GLYPH, classify_glyph_run,
};
pub use text_shaper::{ShapedRun, ShapingOptions, TextShaper};
