//! CLI domain: parse, route, help, output, and presentation only.
//! No launcher logic; single route table dispatches to the launcher.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{format_plan_json, format_plan_text, format_tooling_report};
pub use route::{CommandOutput, RunContext};
