// Library exports for testing and potential library use

/// Application version, written into `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod debug;

pub mod cli;
pub mod config;
pub mod emitter;
pub mod pipeline;
