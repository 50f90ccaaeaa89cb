//! CLI parse: clap types for stackup. No behavior; definitions only.

use crate::launcher::InvocationMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Stackup CLI - bring the application stack up with whatever container tooling is installed
#[derive(Parser)]
#[command(name = "stackup")]
#[command(about = "Detect container tooling and bring the application stack up")]
pub struct Cli {
    /// Command to run (default: up)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Invocation mode: pull the published image (remote) or build from source (local)
    #[arg(long, global = true, value_enum)]
    pub mode: Option<InvocationMode>,

    /// Directory holding the orchestration manifests
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// The command to run; a bare `stackup` means `up`.
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Up)
    }
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Bring the stack up (pull or build, then start detached)
    Up,
    /// Print the commands `up` would run without running them
    Plan {
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Report container runtime and orchestrator detection
    Check,
    /// Print the effective configuration as TOML
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}
