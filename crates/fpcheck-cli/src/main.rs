//! fpcheck — run the flight-plan rule checker against a plan on disk.
//!
//! Reads a raw flight plan (JSON, host field encoding), normalizes it,
//! evaluates the standard rule set plus an optional aerodrome profile,
//! and prints the resulting tag action. Exit codes mirror the verdict:
//! 0 for anything up to a warning, 2 for an error-severity action, 1
//! when the plan cannot be normalized or read at all.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use fpcheck_engine::{Profile, RuleSet};
use fpcheck_models::{RawFlightPlan, Severity};

/// Flight-plan rule checker.
#[derive(Parser, Debug)]
#[command(name = "fpcheck", about = "Flight-plan rule checker")]
struct Args {
    /// Path to the raw flight plan (JSON).
    plan: PathBuf,

    /// Optional aerodrome check profile (JSON) registered after the
    /// built-in rules.
    #[arg(long)]
    profile: Option<PathBuf>,
}

fn run(args: &Args) -> anyhow::Result<Severity> {
    let source = fs::read_to_string(&args.plan)
        .with_context(|| format!("reading {}", args.plan.display()))?;
    let raw: RawFlightPlan =
        serde_json::from_str(&source).with_context(|| format!("parsing {}", args.plan.display()))?;

    let mut rules = RuleSet::standard();
    if let Some(path) = &args.profile {
        let source =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let profile = Profile::from_json(&source)
            .with_context(|| format!("loading profile {}", path.display()))?;
        rules.register_profile(profile);
    }

    // The one hard failure: an unreadable flight rule aborts the check.
    let plan = raw.normalize().context("normalizing flight plan")?;

    let action = rules.evaluate(&plan);
    info!(
        plan = %args.plan.display(),
        severity = %action.severity,
        message = %action.message,
        "check complete"
    );
    println!("{} {}", action.severity, action.message);
    Ok(action.severity)
}

fn main() -> ExitCode {
    // Initialise structured logging (controlled via RUST_LOG env var).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(Severity::Error) => ExitCode::from(2),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
