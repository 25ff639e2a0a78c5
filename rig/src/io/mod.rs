//! I/O helpers for rig commands.

pub mod assembly_file;
pub mod catalog_store;
pub mod config;
pub mod init;
pub mod plan_store;
