use anyhow::Result;
use clap::Parser;
use emoji_forge::cli::Cli;
use emoji_forge::config::Config;
use emoji_forge::debug::{init_log_bridge, resolve_log_level};
use emoji_forge::pipeline;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config first so its log_level can take part in precedence.
    let mut config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("emoji-forge: error: {e:#}");
            std::process::exit(2);
        }
    };

    let env_level = std::env::var("RUST_LOG").ok();
    let level = resolve_log_level(cli.log_level, env_level.as_deref(), config.log_level);
    init_log_bridge(level);
    cli.apply_to(&mut config);

    log::info!("Starting emoji-forge {}", emoji_forge::VERSION);

    match pipeline::run(&config) {
        Ok(summary) => {
            log::info!(
                "Generated {} files from {} records",
                summary.files.len(),
                summary.records
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("emoji-forge: error: {e:#}");
            std::process::exit(1);
        }
    }
}
