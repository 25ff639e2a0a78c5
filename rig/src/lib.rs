//! Rule engine for a slot-based hardware assembly simulation.
//!
//! Decides whether a hardware item may be installed into, or removed from, a
//! slot given the current assembly and the system's power state. The crate
//! keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (catalog lookup, install/removal
//!   rules, completion queries, plan replay). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config, catalog and plan files,
//!   workspace scaffolding).
//!
//! Orchestration modules ([`workspace`], [`validate`], [`simulate`]) coordinate
//! core logic with I/O to implement CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod simulate;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod validate;
pub mod workspace;
