//! Error types for the stackup launcher.

use thiserror::Error;

/// Exit code for every failure the launcher detects itself.
pub const EXIT_FAILURE: i32 = 1;

/// Launcher errors. Every variant is terminal for the run.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("Container runtime '{engine}' is not installed or not callable. Install it and retry.")]
    MissingRuntime { engine: String },

    #[error(
        "No container orchestrator found: tried `{integrated}` and `{standalone}`. \
         Install the compose plugin or the standalone binary."
    )]
    MissingOrchestrator {
        integrated: String,
        standalone: String,
    },

    #[error("`{command}` exited with status {code}")]
    SubprocessFailure { command: String, code: i32 },

    #[error("Failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Output error: {0}")]
    Output(String),
}

impl LaunchError {
    /// Process exit code for this error.
    ///
    /// Subprocess failures propagate the child's own code; everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            LaunchError::SubprocessFailure { code, .. } => *code,
            _ => EXIT_FAILURE,
        }
    }
}

impl From<config::ConfigError> for LaunchError {
    fn from(err: config::ConfigError) -> Self {
        LaunchError::Config(err.to_string())
    }
}
