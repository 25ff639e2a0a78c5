//! Stable exit codes for rig CLI commands.

/// Command succeeded, the decision was `ok`, or the plan built a complete assembly.
pub const OK: i32 = 0;
/// Command failed due to invalid config/catalog/plan input or other errors.
pub const INVALID: i32 = 1;
/// `rig check` returned a rejecting decision, or a `rig run` step was rejected.
pub const REJECTED: i32 = 2;
/// `rig run` applied every step but required hardware types are still missing.
pub const INCOMPLETE: i32 = 3;
