//! Plan replay for `rig run`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::plan::{Plan, PlanOptions, PlanReport, run_plan};
use crate::core::validator::Validator;
use crate::io::plan_store::load_plan;
use crate::workspace::{Workspace, load_workspace};

/// Replay an in-memory plan using the workspace's catalog and config.
pub fn simulate_plan(ws: &Workspace, plan: &Plan) -> PlanReport {
    let options = PlanOptions {
        initial_power: ws.config.initial_power,
        stop_on_reject: ws.config.stop_on_reject,
    };
    let validator = Validator::new(&ws.catalog);
    let report = run_plan(&validator, plan, options);
    for outcome in &report.outcomes {
        debug!(
            index = outcome.index,
            step = %outcome.step.describe(),
            reason = %outcome.decision.reason,
            "step evaluated"
        );
    }
    info!(
        steps = report.outcomes.len(),
        rejected = report.rejected(),
        skipped = report.skipped,
        progress = report.status.progress,
        "plan replayed"
    );
    report
}

/// Load workspace and plan from disk, then replay the plan.
pub fn simulate_from_root(root: &Path, plan_path: &Path) -> Result<PlanReport> {
    let ws = load_workspace(root)?;
    let plan = load_plan(plan_path).with_context(|| "load plan for simulation")?;
    Ok(simulate_plan(&ws, &plan))
}
