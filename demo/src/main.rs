//! Rollcall Approval Workflow — Demo CLI
//!
//! Runs one or all of the three reference school scenarios. Each scenario
//! uses real Rollcall components (record store, workflow engine, remote
//! stub, audit seal) wired together with fixture data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- approval-day
//!   cargo run -p demo -- partial-submission
//!   cargo run -p demo -- rollback-window

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rollcall_contracts::error::RollcallResult;
use rollcall_ref_school::scenarios::{approval_day, partial_submission, rollback_window};

// ── CLI definition ────────────────────────────────────────────────────────────

/// Rollcall — daily attendance approval workflow demo.
///
/// Each subcommand runs one or all of the three reference school scenarios,
/// demonstrating the review → approve → lock pipeline, its transition
/// guards, and the bounded rollback window.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "Rollcall attendance approval workflow demo",
    long_about = "Runs Rollcall reference school scenarios showing the approval state\n\
                  machine, guard enforcement, transient remote failures with retry,\n\
                  and tamper-evident audit sealing."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run all three scenarios in sequence.
    RunAll,
    /// Scenario 1: A Full Approval Day (open → review → approve → lock → seal).
    ApprovalDay,
    /// Scenario 2: Partial Submissions Block Review (guard rejection).
    PartialSubmission,
    /// Scenario 3: The Rollback Window (rollback inside and after the window).
    RollbackWindow,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize structured logging. Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match cli.command {
        Command::RunAll => run_all().await,
        Command::ApprovalDay => approval_day::run_scenario().await,
        Command::PartialSubmission => partial_submission::run_scenario().await,
        Command::RollbackWindow => rollback_window::run_scenario().await,
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

async fn run_all() -> RollcallResult<()> {
    approval_day::run_scenario().await?;
    partial_submission::run_scenario().await?;
    rollback_window::run_scenario().await?;
    Ok(())
}

fn print_banner() {
    println!();
    println!("  ROLLCALL — Attendance Approval & Lock Workflow");
    println!("  Review, approve, and lock daily attendance data");
    println!();
}
