//! CLI parse: clap types for dotcfg. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// dotcfg CLI - inspect merged defaults/locals configuration
#[derive(Parser)]
#[command(name = "dotcfg")]
#[command(about = "Inspect hierarchical defaults/locals configuration", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

/// Where to load defaults and locals from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory holding defaults.{toml,json} and optionally locals.{toml,json}
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,

    /// Explicit locals file (overrides environment and sibling locals)
    #[arg(long)]
    pub locals: Option<PathBuf>,

    /// Environment variable holding a locals file path
    #[arg(long)]
    pub locals_env: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the merged configuration, or the values at the given paths
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Update expressions applied before printing (e.g. log.level=DEBUG)
        #[arg(long = "set", value_name = "PATH=VALUE")]
        set: Vec<String>,

        /// Value printed for paths that do not resolve (cast like an update value)
        #[arg(long)]
        default: Option<String>,

        /// Dot-separated property paths
        paths: Vec<String>,
    },
    /// List the files the merged configuration is built from
    Sources {
        #[command(flatten)]
        source: SourceArgs,
    },
}
