// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `storygraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "storygraph",
    version,
    about = "Order story steps, break their cycles and enumerate the stories they form.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the scenario file (TOML).
    ///
    /// Default: `Stories.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Stories.toml")]
    pub scenario: String,

    /// Override `[config].max_frontier_width`.
    #[arg(long, value_name = "N")]
    pub max_frontier_width: Option<usize>,

    /// Override `[config].seed`.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Enumerate on the graph as loaded, without breaking cycles.
    #[arg(long)]
    pub keep_cycles: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STORYGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the step order and cycles, but don't enumerate stories.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
