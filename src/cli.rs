//! Command-line interface for emoji-forge.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::debug::LogLevel;

/// emoji-forge - generate emoji declarations from the Unicode emoji registry
#[derive(Parser, Debug, Default)]
#[command(name = "emoji-forge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/emoji-forge/config.yaml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Registry URL or local emoji-test.txt
    #[arg(long, value_name = "URL|PATH")]
    pub source: Option<String>,

    /// Font file used to decide the Basic subset
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Namespace of the generated declarations
    #[arg(long, value_name = "NAME")]
    pub namespace: Option<String>,

    /// Log level (overrides RUST_LOG and the config file)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Overlay the flags that were given onto `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(font) = &self.font {
            config.font_path = Some(font.clone());
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(namespace) = &self.namespace {
            config.namespace = namespace.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_config() {
        let cli = Cli::parse_from(["emoji-forge"]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config, Config::default());
        assert_eq!(cli.log_level, None);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "emoji-forge",
            "--source",
            "emoji-test.txt",
            "--font",
            "fonts/emoji.ttf",
            "-o",
            "generated",
            "--log-level",
            "warn",
        ]);
        let mut config = Config::default();
        cli.apply_to(&mut config);
        assert_eq!(config.source, "emoji-test.txt");
        assert_eq!(config.font_path, Some(PathBuf::from("fonts/emoji.ttf")));
        assert_eq!(config.output_dir, PathBuf::from("generated"));
        assert_eq!(cli.log_level, Some(LogLevel::Warn));
    }
}
