//! Hardware assembly rule checker.
//!
//! Answers "may this part go into that slot?" and "may this part come out?"
//! against a fixed catalog, and replays build plans step by step.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use rig::core::assembly::Assembly;
use rig::core::catalog::Catalog;
use rig::core::plan::PlanReport;
use rig::core::types::PowerState;
use rig::core::validator::Validator;
use rig::exit_codes;
use rig::io::assembly_file::load_assembly;
use rig::io::init::{InitOptions, init_workspace};
use rig::simulate::simulate_from_root;
use rig::validate::validate_workspace;
use rig::workspace::{CatalogSource, load_workspace};

#[derive(Parser)]
#[command(
    name = "rig",
    version,
    about = "Rule checker for slot-based hardware assembly"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `.rig/` with config, catalog, schema, and an example plan.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check config and catalog (schema, unique ids, id format).
    Validate,
    /// List slots and hardware of the active catalog.
    Catalog,
    /// Evaluate a single install or removal without changing anything.
    Check {
        #[command(subcommand)]
        action: CheckAction,
    },
    /// Replay a TOML build plan from an empty assembly.
    Run {
        plan: PathBuf,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum CheckAction {
    /// May `hardware` be installed into `slot`?
    Install {
        slot: String,
        hardware: String,
        /// JSON object mapping slot id to hardware id (defaults to empty).
        #[arg(long)]
        assembly: Option<PathBuf>,
    },
    /// May the item in `slot` be removed?
    Remove {
        slot: String,
        #[arg(long, default_value = "off")]
        power: PowerState,
        /// JSON object mapping slot id to hardware id (defaults to empty).
        #[arg(long)]
        assembly: Option<PathBuf>,
    },
}

fn main() {
    rig::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("resolve current directory")?;
    match cli.command {
        Command::Init { force } => cmd_init(&root, force),
        Command::Validate => cmd_validate(&root),
        Command::Catalog => cmd_catalog(&root),
        Command::Check { action } => cmd_check(&root, action),
        Command::Run { plan, json } => cmd_run(&root, &plan, json),
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<i32> {
    let paths = init_workspace(root, &InitOptions { force })?;
    println!("init: created {}", paths.rig_dir.display());
    Ok(exit_codes::OK)
}

fn cmd_validate(root: &Path) -> Result<i32> {
    let outcome = validate_workspace(root)?;
    println!(
        "validate: ok catalog={} hardware={} slots={}",
        describe_source(&outcome.catalog_source),
        outcome.hardware,
        outcome.slots
    );
    for warning in outcome.warnings {
        eprintln!("warning: {}", warning);
    }
    Ok(exit_codes::OK)
}

fn cmd_catalog(root: &Path) -> Result<i32> {
    let ws = load_workspace(root)?;
    for slot in ws.catalog.slots() {
        let overlay = if slot.is_overlay { " overlay" } else { "" };
        println!(
            "slot {} accepts={} label=\"{}\"{}",
            slot.id, slot.accept, slot.label, overlay
        );
    }
    for item in ws.catalog.hardware() {
        match &item.depends_on {
            Some(dep) => println!(
                "hardware {} type={} name=\"{}\" depends_on={}",
                item.id, item.kind, item.name, dep
            ),
            None => println!(
                "hardware {} type={} name=\"{}\"",
                item.id, item.kind, item.name
            ),
        }
    }
    let required: Vec<&str> = ws
        .catalog
        .required_types()
        .iter()
        .map(|kind| kind.as_str())
        .collect();
    println!("required {}", required.join(","));
    Ok(exit_codes::OK)
}

fn cmd_check(root: &Path, action: CheckAction) -> Result<i32> {
    let ws = load_workspace(root)?;
    let validator = Validator::new(&ws.catalog);
    let decision = match action {
        CheckAction::Install {
            slot,
            hardware,
            assembly,
        } => {
            let current = read_assembly(assembly.as_deref(), &ws.catalog)?;
            validator.validate_install(&current, &slot, &hardware)
        }
        CheckAction::Remove {
            slot,
            power,
            assembly,
        } => {
            let current = read_assembly(assembly.as_deref(), &ws.catalog)?;
            validator.validate_removal(&current, &slot, power)
        }
    };
    print_json(&decision)?;
    Ok(if decision.ok {
        exit_codes::OK
    } else {
        exit_codes::REJECTED
    })
}

fn cmd_run(root: &Path, plan: &Path, json: bool) -> Result<i32> {
    let report = simulate_from_root(root, plan)?;
    if json {
        print_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(report_exit_code(&report))
}

fn read_assembly(path: Option<&Path>, catalog: &Catalog) -> Result<Assembly> {
    match path {
        Some(path) => load_assembly(path, catalog),
        None => Ok(Assembly::new()),
    }
}

fn print_report(report: &PlanReport) {
    for outcome in &report.outcomes {
        println!(
            "step {}: {}: {} ({})",
            outcome.index,
            outcome.step.describe(),
            outcome.decision.reason,
            outcome.decision.message
        );
    }
    let missing: Vec<&str> = report.status.missing.iter().map(|k| k.as_str()).collect();
    println!(
        "run: steps={} rejected={} skipped={} power={} progress={:.2} missing={}",
        report.outcomes.len(),
        report.rejected(),
        report.skipped,
        report.power,
        report.status.progress,
        if missing.is_empty() {
            "-".to_string()
        } else {
            missing.join(",")
        }
    );
}

fn report_exit_code(report: &PlanReport) -> i32 {
    if report.rejected() > 0 {
        exit_codes::REJECTED
    } else if !report.status.complete {
        exit_codes::INCOMPLETE
    } else {
        exit_codes::OK
    }
}

fn describe_source(source: &CatalogSource) -> String {
    match source {
        CatalogSource::BuiltIn => "built-in".to_string(),
        CatalogSource::File(path) => path.display().to_string(),
    }
}

/// Serialize `value` to pretty-printed JSON on stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
