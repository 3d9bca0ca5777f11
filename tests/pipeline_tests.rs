mod common;

use common::{REGISTRY, offline_config, output_file, parsed_registry, record};
use emoji_forge::config::Config;
use emoji_forge::pipeline::{basic_indices, run};
use emoji_forge_fonts::{GlyphSupportOracle, MISSING_GLYPH};
use emoji_forge_registry::Status;
use std::fs;

/// Composes only the grinning face and the cat face.
struct TwoGlyphOracle;

impl GlyphSupportOracle for TwoGlyphOracle {
    fn shape_glyph_ids(&mut self, text: &str) -> Vec<u32> {
        match text {
            "😀" => vec![812],
            "🐱" => vec![1040],
            _ => vec![MISSING_GLYPH],
        }
    }

    fn fallback_glyphs(&self) -> &[u32] {
        &[]
    }
}

#[test]
fn test_basic_indices_uses_oracle_and_status() {
    let result = parsed_registry();
    let basic = basic_indices(&result, &mut TwoGlyphOracle);

    let grinning = record(&result, "grinning face", Status::FullyQualified).index;
    let cat = record(&result, "cat face", Status::FullyQualified).index;
    assert_eq!(basic.into_iter().collect::<Vec<_>>(), vec![grinning, cat]);
}

#[test]
fn test_run_without_font_writes_everything_but_basic() {
    let (config, _temp_dir) = offline_config();
    let summary = run(&config).unwrap();

    assert_eq!(summary.basic, None);
    assert_eq!(summary.records, parsed_registry().len());
    assert_eq!(summary.files.len(), 13);
    assert!(!output_file(&config, "Emoji.Basic.cs").exists());

    let declarations = fs::read_to_string(output_file(&config, "Emoji.Declarations.cs")).unwrap();
    assert!(declarations.contains("namespace NeoSmart.Unicode"));
    assert!(declarations.contains("SingleEmoji GrinningFace"));
}

#[test]
fn test_run_uses_configured_namespace() {
    let (config, _temp_dir) = offline_config();
    let config = Config {
        namespace: "Example.Generated".to_string(),
        ..config
    };
    run(&config).unwrap();

    let all = fs::read_to_string(output_file(&config, "Emoji.All.cs")).unwrap();
    assert!(all.contains("namespace Example.Generated\n"));
}

#[test]
fn test_run_missing_registry_is_error() {
    let (config, temp_dir) = offline_config();
    let config = Config {
        source: temp_dir.path().join("absent.txt").display().to_string(),
        ..config
    };

    let err = run(&config).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to load emoji registry"));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_run_unknown_group_is_error() {
    let (config, temp_dir) = offline_config();
    let broken = REGISTRY.replace("# group: Symbols", "# group: Sigils");
    let path = temp_dir.path().join("broken.txt");
    fs::write(&path, broken).unwrap();
    let config = Config {
        source: path.display().to_string(),
        ..config
    };

    assert!(run(&config).is_err());
    assert!(!config.output_dir.exists());
}

#[test]
fn test_config_file_drives_run() {
    let (config, temp_dir) = offline_config();
    let yaml = config.to_yaml().unwrap();
    let config_path = temp_dir.path().join("config.yaml");
    fs::write(&config_path, yaml).unwrap();

    let loaded = Config::load(Some(config_path.as_path())).unwrap();
    assert_eq!(loaded, config);
    assert!(run(&loaded).is_ok());
}

#[test]
fn test_explicit_missing_config_is_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    assert!(Config::load(Some(temp_dir.path().join("nope.yaml").as_path())).is_err());
}
