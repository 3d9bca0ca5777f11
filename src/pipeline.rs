//! End-to-end generation: fetch, parse, classify, emit.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::path::PathBuf;

use emoji_forge_fonts::{FontGlyphOracle, GlyphSupportOracle, load_font};
use emoji_forge_registry::{ParseResult, RegistrySource, Status};

use crate::config::Config;
use crate::emitter::{Emitter, write_files};

/// What a run produced.
#[derive(Debug)]
pub struct RunSummary {
    /// Records parsed, synthetic ones included
    pub records: usize,
    /// Size of the Basic subset; `None` when no font was available
    pub basic: Option<usize>,
    /// Files written, in emission order
    pub files: Vec<PathBuf>,
}

/// Indices of fully-qualified records `oracle` renders as a single glyph.
pub fn basic_indices(result: &ParseResult, oracle: &mut impl GlyphSupportOracle) -> BTreeSet<u32> {
    result
        .records()
        .iter()
        .filter(|record| record.status == Status::FullyQualified)
        .filter(|record| oracle.supports_record(record))
        .map(|record| record.index)
        .collect()
}

/// Run the generator with `config`.
///
/// A missing font only drops `Emoji.Basic.cs`; registry and write failures
/// abort the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let source = RegistrySource::from_location(&config.source);
    let result = source
        .load()
        .with_context(|| format!("Failed to load emoji registry from {}", source))?;
    log::info!(
        "Parsed {} records (emoji {}, {})",
        result.len(),
        result
            .version()
            .map_or_else(|| "unknown version".to_string(), |v| v.to_string()),
        result
            .date()
            .map_or_else(|| "unknown date".to_string(), |d| d.to_string()),
    );

    let basic = match load_font(config.font_path.as_deref(), &config.font_families) {
        Ok(font) => {
            let mut oracle = FontGlyphOracle::new(font);
            let supported = basic_indices(&result, &mut oracle);
            log::info!(
                "{} emoji render as a single glyph in {}",
                supported.len(),
                oracle.font().origin
            );
            Some(supported)
        }
        Err(e) => {
            log::warn!("Skipping Emoji.Basic.cs: {e:#}");
            None
        }
    };

    let emitter = Emitter::new(&result, &config.namespace);
    let files = emitter.render(basic.as_ref());
    let paths = write_files(&config.output_dir, &files)?;

    Ok(RunSummary {
        records: result.len(),
        basic: basic.map(|supported| supported.len()),
        files: paths,
    })
}
