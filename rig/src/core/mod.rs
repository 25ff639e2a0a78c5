//! Deterministic, pure rule logic for the assembly engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! catalogs and assemblies and return deterministic outputs suitable for tests.

pub mod assembly;
pub mod catalog;
pub mod install;
pub mod invariants;
pub mod plan;
pub mod progress;
pub mod removal;
pub mod types;
pub mod validator;
