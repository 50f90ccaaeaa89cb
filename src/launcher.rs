//! Bootstrap launcher: detect tooling, pick the orchestrator, run the plan.
//!
//! The run is strictly sequential. Detection failures stop it before any
//! orchestration step, and the first failing step's exit code becomes the result.

pub mod check;
pub mod mode;
pub mod orchestrator;
pub mod plan;
pub mod process;

pub use check::{check_tooling, CheckItem, CheckStatus, ToolingReport};
pub use mode::InvocationMode;
pub use orchestrator::{ensure_runtime, Orchestrator};
pub use plan::{LaunchPlan, PlanStep, StepKind};
pub use process::{exit_code_of, Invocation, ProcessRunner, SystemRunner};

use crate::config::LauncherConfig;
use crate::error::LaunchError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Launches the configured stack through a `ProcessRunner`.
pub struct Launcher<R: ProcessRunner = SystemRunner> {
    runner: R,
    config: LauncherConfig,
    project_dir: PathBuf,
}

impl Launcher<SystemRunner> {
    pub fn new(config: LauncherConfig, project_dir: PathBuf) -> Self {
        Self::with_runner(SystemRunner, config, project_dir)
    }
}

impl<R: ProcessRunner> Launcher<R> {
    pub fn with_runner(runner: R, config: LauncherConfig, project_dir: PathBuf) -> Self {
        Self {
            runner,
            config,
            project_dir,
        }
    }

    pub fn config(&self) -> &LauncherConfig {
        &self.config
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Runtime check, orchestrator resolution, and mode selection. Runs nothing.
    ///
    /// Steps run inside the project directory, so a missing one is reported
    /// here rather than as a spawn failure of the engine.
    pub fn prepare(&self, mode: InvocationMode) -> Result<LaunchPlan, LaunchError> {
        ensure_runtime(&self.runner, &self.config.runtime)?;
        let orchestrator = Orchestrator::resolve(&self.runner, &self.config.runtime)?;
        if !self.project_dir.is_dir() {
            return Err(LaunchError::Config(format!(
                "Project directory not found: {}",
                self.project_dir.display()
            )));
        }
        Ok(LaunchPlan::build(
            mode,
            orchestrator,
            &self.config.stack,
            &self.project_dir,
        ))
    }

    /// Prepare and execute the plan for `mode`.
    ///
    /// `on_step` is called before each step starts.
    pub fn launch<F>(&self, mode: InvocationMode, on_step: F) -> Result<LaunchPlan, LaunchError>
    where
        F: FnMut(&PlanStep),
    {
        let plan = self.prepare(mode)?;
        self.execute(&plan, on_step)?;
        Ok(plan)
    }

    /// Run the plan's steps in order, stopping at the first non-zero exit.
    pub fn execute<F>(&self, plan: &LaunchPlan, mut on_step: F) -> Result<(), LaunchError>
    where
        F: FnMut(&PlanStep),
    {
        for step in &plan.steps {
            on_step(step);
            info!(step = ?step.kind, command = %step.invocation, "Running orchestration step");
            let code = self.runner.run(&step.invocation)?;
            if code != 0 {
                debug!(step = ?step.kind, code, "Orchestration step failed");
                return Err(LaunchError::SubprocessFailure {
                    command: step.invocation.command_line(),
                    code,
                });
            }
        }
        info!(mode = %plan.mode, "Stack is up");
        Ok(())
    }

    /// Report tooling detection without running the stack.
    pub fn check(&self) -> ToolingReport {
        check_tooling(&self.runner, &self.config.runtime)
    }
}
