//! Launch plans: the ordered orchestration steps for a mode.

use crate::config::StackConfig;
use crate::launcher::mode::InvocationMode;
use crate::launcher::orchestrator::Orchestrator;
use crate::launcher::process::Invocation;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Pull,
    Up,
}

/// One orchestration step with the message shown before it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanStep {
    pub kind: StepKind,
    pub description: String,
    pub invocation: Invocation,
}

/// Everything `up` will run, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub mode: InvocationMode,
    pub orchestrator: Orchestrator,
    pub manifest: String,
    pub steps: Vec<PlanStep>,
}

impl LaunchPlan {
    /// Remote mode pulls the service image, then starts the stack.
    /// Local mode starts the stack from the local manifest and never pulls.
    pub fn build(
        mode: InvocationMode,
        orchestrator: Orchestrator,
        stack: &StackConfig,
        project_dir: &Path,
    ) -> Self {
        let manifest = stack.manifest_for(mode).to_string();
        let mut steps = Vec::with_capacity(2);

        if mode.pulls_image() {
            steps.push(PlanStep {
                kind: StepKind::Pull,
                description: format!(
                    "Pulling image for service '{}' from {}...",
                    stack.service, stack.registry
                ),
                invocation: orchestrator.command(
                    project_dir,
                    &manifest,
                    &["pull", stack.service.as_str()],
                ),
            });
        }

        let mut up_args = vec!["up", "-d"];
        if stack.rebuild {
            up_args.push("--build");
        }
        let description = match mode {
            InvocationMode::Remote => format!("Starting stack from {}...", manifest),
            InvocationMode::Local => format!("Building and starting stack from {}...", manifest),
        };
        steps.push(PlanStep {
            kind: StepKind::Up,
            description,
            invocation: orchestrator.command(project_dir, &manifest, &up_args),
        });

        Self {
            mode,
            orchestrator,
            manifest,
            steps,
        }
    }
}
