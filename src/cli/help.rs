//! CLI help and command-name contract for log spans.

use crate::cli::parse::Commands;

/// Command name string for log spans (e.g. "up", "plan").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Up => "up",
        Commands::Plan { .. } => "plan",
        Commands::Check => "check",
        Commands::Config => "config",
    }
}
