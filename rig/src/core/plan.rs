//! Deterministic replay of a build plan through the validator.

use serde::{Deserialize, Serialize};

use crate::core::assembly::Assembly;
use crate::core::progress::AssemblyStatus;
use crate::core::types::{Decision, PowerState, ReasonCode, RuleViolation};
use crate::core::validator::Validator;

/// One action in a build plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Step {
    Install { slot: String, hardware: String },
    Remove { slot: String },
    Power { state: PowerState },
}

impl Step {
    /// Short human-readable label, e.g. `install cpu -> socket`.
    pub fn describe(&self) -> String {
        match self {
            Step::Install { slot, hardware } => format!("install {hardware} -> {slot}"),
            Step::Remove { slot } => format!("remove {slot}"),
            Step::Power { state } => format!("power {state}"),
        }
    }
}

/// Ordered list of steps replayed from an empty assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    pub initial_power: PowerState,
    pub stop_on_reject: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            initial_power: PowerState::Off,
            stop_on_reject: true,
        }
    }
}

/// Decision recorded for a single step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    /// 1-based position in the plan.
    pub index: usize,
    pub step: Step,
    pub decision: Decision,
}

/// Result of replaying a plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub outcomes: Vec<StepOutcome>,
    /// Number of plan steps that were never evaluated.
    pub skipped: usize,
    pub power: PowerState,
    pub assembly: Assembly,
    pub status: AssemblyStatus,
}

impl PlanReport {
    pub fn rejected(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.decision.ok).count()
    }
}

/// Replay `plan` from an empty assembly.
///
/// Power steps always succeed. Rejected install/remove steps leave the
/// assembly unchanged; with `stop_on_reject` the replay ends there.
pub fn run_plan(validator: &Validator<'_>, plan: &Plan, options: PlanOptions) -> PlanReport {
    let mut assembly = Assembly::new();
    let mut power = options.initial_power;
    let mut outcomes = Vec::with_capacity(plan.steps.len());

    for (idx, step) in plan.steps.iter().enumerate() {
        let decision = match step {
            Step::Install { slot, hardware } => {
                let decision = validator.validate_install(&assembly, slot, hardware);
                apply(&mut assembly, decision, |current| {
                    validator.install_hardware(current, slot, hardware)
                })
            }
            Step::Remove { slot } => {
                let decision = validator.validate_removal(&assembly, slot, power);
                apply(&mut assembly, decision, |current| {
                    validator.remove_hardware(current, slot, power)
                })
            }
            Step::Power { state } => {
                power = *state;
                Decision::allow(format!("Power is now {state}."))
            }
        };

        let rejected = decision.reason != ReasonCode::Ok;
        outcomes.push(StepOutcome {
            index: idx + 1,
            step: step.clone(),
            decision,
        });
        if rejected && options.stop_on_reject {
            break;
        }
    }

    let skipped = plan.steps.len() - outcomes.len();
    let status = validator.status(&assembly);
    PlanReport {
        outcomes,
        skipped,
        power,
        assembly,
        status,
    }
}

/// Advance `assembly` when `decision` allows it.
fn apply<F>(assembly: &mut Assembly, decision: Decision, transition: F) -> Decision
where
    F: FnOnce(&Assembly) -> Result<Assembly, RuleViolation>,
{
    if !decision.ok {
        return decision;
    }
    match transition(assembly) {
        Ok(next) => {
            *assembly = next;
            decision
        }
        Err(violation) => Decision::deny(violation.reason, violation.message),
    }
}
