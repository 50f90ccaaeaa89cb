//! Presentation: plan and tooling report formatters.

use crate::error::LaunchError;
use crate::launcher::{CheckStatus, LaunchPlan, ToolingReport};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

pub fn format_plan_text(plan: &LaunchPlan) -> String {
    let mut lines = vec![
        format!("Mode: {}", plan.mode),
        format!("Orchestrator: {}", plan.orchestrator),
        format!("Manifest: {}", plan.manifest),
        String::new(),
        "Steps:".to_string(),
    ];
    for (i, step) in plan.steps.iter().enumerate() {
        lines.push(format!("  {}. {}", i + 1, step.invocation));
    }
    lines.join("\n")
}

pub fn format_plan_json(plan: &LaunchPlan) -> Result<String, LaunchError> {
    serde_json::to_string_pretty(plan).map_err(|e| LaunchError::Output(e.to_string()))
}

pub fn format_tooling_report(report: &ToolingReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Tool", "Command", "Status"]);
    for check in &report.checks {
        let status = match check.status {
            CheckStatus::Found => "found",
            CheckStatus::Missing => "missing",
            CheckStatus::Skipped => "skipped",
        };
        table.add_row(vec![check.name.as_str(), check.command.as_str(), status]);
    }

    let verdict = match &report.selected {
        Some(orchestrator) => format!("Ready: stack will be started with `{}`.", orchestrator),
        None => "Not ready: install the missing tooling above.".to_string(),
    };
    format!("{}\n{}", table, verdict)
}
