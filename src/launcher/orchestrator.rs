//! Runtime detection and orchestrator resolution.

use crate::config::RuntimeConfig;
use crate::error::LaunchError;
use crate::launcher::process::{Invocation, ProcessRunner};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

/// The orchestration command selected for this run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Orchestrator {
    /// Engine subcommand, e.g. `docker compose`.
    Integrated { engine: String, subcommand: String },
    /// Standalone binary, e.g. `docker-compose`.
    Standalone { binary: String },
}

/// Invocation that tests whether the engine itself is callable.
pub fn runtime_probe(runtime: &RuntimeConfig) -> Invocation {
    Invocation::new(&runtime.engine, ["--version"])
}

/// Invocation that tests for the integrated orchestration subcommand.
pub fn integrated_probe(runtime: &RuntimeConfig) -> Invocation {
    Invocation::new(
        &runtime.engine,
        [runtime.compose_subcommand.as_str(), "version"],
    )
}

/// Invocation that tests for the standalone orchestrator binary.
pub fn standalone_probe(runtime: &RuntimeConfig) -> Invocation {
    Invocation::new(&runtime.standalone_compose, ["version"])
}

/// Fail with `MissingRuntime` unless the container engine is callable.
pub fn ensure_runtime<R: ProcessRunner>(
    runner: &R,
    runtime: &RuntimeConfig,
) -> Result<(), LaunchError> {
    let probe = runtime_probe(runtime);
    if runner.probe(&probe) {
        debug!(engine = %runtime.engine, "Container runtime available");
        Ok(())
    } else {
        Err(LaunchError::MissingRuntime {
            engine: runtime.engine.clone(),
        })
    }
}

impl Orchestrator {
    /// Selection rule shared by `resolve` and the tooling check: the integrated
    /// subcommand wins, the standalone binary is the fallback.
    ///
    /// `standalone` is only evaluated when `integrated` is false.
    pub fn select<F>(runtime: &RuntimeConfig, integrated: bool, standalone: F) -> Option<Self>
    where
        F: FnOnce() -> bool,
    {
        if integrated {
            Some(Orchestrator::Integrated {
                engine: runtime.engine.clone(),
                subcommand: runtime.compose_subcommand.clone(),
            })
        } else if standalone() {
            Some(Orchestrator::Standalone {
                binary: runtime.standalone_compose.clone(),
            })
        } else {
            None
        }
    }

    /// Pick the integrated subcommand when it works, else the standalone binary.
    ///
    /// The standalone binary is only tried when the integrated path fails.
    pub fn resolve<R: ProcessRunner>(
        runner: &R,
        runtime: &RuntimeConfig,
    ) -> Result<Self, LaunchError> {
        let integrated = integrated_probe(runtime);
        let integrated_found = runner.probe(&integrated);
        let selected = Self::select(runtime, integrated_found, || {
            debug!(command = %integrated, "Integrated orchestrator unavailable, trying standalone");
            runner.probe(&standalone_probe(runtime))
        });
        let orchestrator = selected.ok_or_else(|| LaunchError::MissingOrchestrator {
            integrated: format!("{} {}", runtime.engine, runtime.compose_subcommand),
            standalone: runtime.standalone_compose.clone(),
        })?;
        info!(orchestrator = %orchestrator, "Resolved orchestrator");
        Ok(orchestrator)
    }

    /// Build an orchestration command against `manifest`, run from `project_dir`.
    pub fn command(&self, project_dir: &Path, manifest: &str, args: &[&str]) -> Invocation {
        let (program, mut full_args) = match self {
            Orchestrator::Integrated { engine, subcommand } => {
                (engine.clone(), vec![subcommand.clone()])
            }
            Orchestrator::Standalone { binary } => (binary.clone(), Vec::new()),
        };
        full_args.push("-f".to_string());
        full_args.push(manifest.to_string());
        full_args.extend(args.iter().map(|a| a.to_string()));
        Invocation::new(program, full_args).in_dir(project_dir)
    }
}

impl fmt::Display for Orchestrator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orchestrator::Integrated { engine, subcommand } => write!(f, "{} {}", engine, subcommand),
            Orchestrator::Standalone { binary } => f.write_str(binary),
        }
    }
}
