//! CLI output: error mapping from launcher errors to stable CLI surface.

use crate::error::LaunchError;
use owo_colors::OwoColorize;

/// Map launcher errors to the diagnostic printed on stderr.
pub fn map_error(e: &LaunchError, color: bool) -> String {
    let prefix = if color {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    };
    format!("{} {}", prefix, e)
}
