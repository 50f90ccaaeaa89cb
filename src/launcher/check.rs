//! Tooling check: reports what the launcher would detect without starting anything.

use crate::config::RuntimeConfig;
use crate::launcher::orchestrator::{
    integrated_probe, runtime_probe, standalone_probe, Orchestrator,
};
use crate::launcher::process::ProcessRunner;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Found,
    Missing,
    Skipped,
}

/// Individual check item
#[derive(Debug, Clone, Serialize)]
pub struct CheckItem {
    pub name: String,
    pub command: String,
    pub status: CheckStatus,
}

/// Result of the tooling check
#[derive(Debug, Clone, Serialize)]
pub struct ToolingReport {
    pub checks: Vec<CheckItem>,
    pub selected: Option<Orchestrator>,
}

impl ToolingReport {
    /// True when `up` could proceed past detection.
    pub fn passed(&self) -> bool {
        self.selected.is_some()
    }
}

/// Probe the engine and both orchestrator paths.
///
/// When the engine is missing the orchestrator probes are skipped, matching `up`.
pub fn check_tooling<R: ProcessRunner>(runner: &R, runtime: &RuntimeConfig) -> ToolingReport {
    let engine = runtime_probe(runtime);
    let integrated = integrated_probe(runtime);
    let standalone = standalone_probe(runtime);

    let engine_found = runner.probe(&engine);
    let (integrated_status, standalone_status) = if engine_found {
        (status_of(runner.probe(&integrated)), status_of(runner.probe(&standalone)))
    } else {
        (CheckStatus::Skipped, CheckStatus::Skipped)
    };

    let selected = Orchestrator::select(runtime, integrated_status == CheckStatus::Found, || {
        standalone_status == CheckStatus::Found
    });

    ToolingReport {
        checks: vec![
            CheckItem {
                name: "Container runtime".to_string(),
                command: engine.command_line(),
                status: status_of(engine_found),
            },
            CheckItem {
                name: "Integrated orchestrator".to_string(),
                command: integrated.command_line(),
                status: integrated_status,
            },
            CheckItem {
                name: "Standalone orchestrator".to_string(),
                command: standalone.command_line(),
                status: standalone_status,
            },
        ],
        selected,
    }
}

fn status_of(found: bool) -> CheckStatus {
    if found {
        CheckStatus::Found
    } else {
        CheckStatus::Missing
    }
}
