//! CLI route: single route table and run context. Dispatches to the launcher and presentation.

use crate::cli::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_plan_json, format_plan_text, format_tooling_report};
use crate::config::{ConfigLoader, LauncherConfig};
use crate::error::{LaunchError, EXIT_FAILURE};
use crate::launcher::{InvocationMode, Launcher, ProcessRunner, SystemRunner};
use std::path::PathBuf;
use tracing::info_span;

/// What a successful command prints and the code the process exits with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            exit_code: 0,
        }
    }
}

/// Runtime context for CLI execution: loaded config and the launcher built from it.
pub struct RunContext<R: ProcessRunner = SystemRunner> {
    launcher: Launcher<R>,
}

impl RunContext<SystemRunner> {
    /// Create run context from project directory and optional config path. Uses ConfigLoader only.
    pub fn new(project_dir: PathBuf, config_path: Option<PathBuf>) -> Result<Self, LaunchError> {
        let config = match config_path {
            Some(ref path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&project_dir)?,
        };
        Ok(Self::with_runner(SystemRunner, config, project_dir))
    }
}

impl<R: ProcessRunner> RunContext<R> {
    pub fn with_runner(runner: R, config: LauncherConfig, project_dir: PathBuf) -> Self {
        Self {
            launcher: Launcher::with_runner(runner, config, project_dir),
        }
    }

    pub fn launcher(&self) -> &Launcher<R> {
        &self.launcher
    }

    /// `--mode` wins over the configured mode.
    pub fn resolve_mode(&self, cli_mode: Option<InvocationMode>) -> InvocationMode {
        cli_mode.unwrap_or(self.launcher.config().mode)
    }

    /// Execute a CLI command via the single route table.
    ///
    /// Progress lines for `up` go to stdout as each step starts, before the
    /// orchestrator's own output.
    pub fn execute(
        &self,
        command: &Commands,
        cli_mode: Option<InvocationMode>,
    ) -> Result<CommandOutput, LaunchError> {
        let mode = self.resolve_mode(cli_mode);
        let span = info_span!("command", name = command_name(command), mode = %mode);
        let _guard = span.enter();

        match command {
            Commands::Up => {
                self.launcher
                    .launch(mode, |step| println!("{}", step.description))?;
                Ok(CommandOutput::success(format!("Stack is up ({} mode).", mode)))
            }
            Commands::Plan { format } => {
                let plan = self.launcher.prepare(mode)?;
                let text = match format {
                    OutputFormat::Text => format_plan_text(&plan),
                    OutputFormat::Json => format_plan_json(&plan)?,
                };
                Ok(CommandOutput::success(text))
            }
            Commands::Check => {
                let report = self.launcher.check();
                Ok(CommandOutput {
                    text: format_tooling_report(&report),
                    exit_code: if report.passed() { 0 } else { EXIT_FAILURE },
                })
            }
            Commands::Config => {
                // Flags are part of the effective configuration.
                let mut effective = self.launcher.config().clone();
                effective.mode = mode;
                Ok(CommandOutput::success(effective.to_toml()?))
            }
        }
    }
}
