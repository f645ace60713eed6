//! Main application orchestrator.
//!
//! Coordinates a full solver run:
//! 1. Initializes logging.
//! 2. Reads and validates the puzzle input file.
//! 3. Dispatches to the requested core, configuration search or containment.
//! 4. Prints the result: a single minimal cost, or one severed edge per line.
//!
//! Adheres to command-line arguments like `quiet_mode` for controlling verbosity.

use super::cli::{Cli, Command};
use super::error::AppError;
use super::input;
use super::logger;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::containment;
use crate::sorting;
use std::path::PathBuf;

/// Runs the main application logic based on parsed command-line arguments.
///
/// # Arguments
/// * `cli` - The `Cli` struct containing parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` if the input is unreadable or invalid, the sorting goal
/// is unreachable, or the containment simulation reports a breach.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    // Initialize global logger if not in quiet mode. This setup is done once.
    if !quiet_mode {
        if let Err(e) = logger::init_global_logger("solver.log") {
            // If logger init fails, print to stderr directly. The application
            // continues, but verbose file logging will be unavailable.
            eprintln!(
                "Warning: Failed to initialize verbose logger (solver.log): {}. Verbose file logging will be unavailable.",
                e
            );
        } else {
            verbose_println!(quiet_mode, "Verbose logging initialized to solver.log");
        }
    }

    let outcome = match &cli.command {
        Command::Sort { input } => run_sort(input, quiet_mode),
        Command::Contain { input } => run_contain(input, quiet_mode),
    };

    if let Err(e) = logger::flush_global_logger() {
        verbose_eprintln!(quiet_mode, "[WARNING] Failed to flush solver.log: {}", e);
    }

    outcome
}

/// Reads a diagram file, runs the A* configuration search and prints the
/// minimal cost.
fn run_sort(input_path: &PathBuf, quiet_mode: bool) -> Result<(), AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Reading diagram from file...");
    let lines = input::read_input_lines(input_path, quiet_mode)?;
    input::validate_diagram(&lines)?;

    verbose_println!(quiet_mode, "[STEP 2] Parsing diagram...");
    let (start, goal, depth) = sorting::codec::parse(&lines)?;
    verbose_println!(
        quiet_mode,
        "   => Parsed configuration with compartment depth {}.",
        depth
    );

    verbose_println!(quiet_mode, "[STEP 3] Running A* search...");
    let cost = sorting::solve(start, &goal, depth)?;
    verbose_println!(quiet_mode, "   => Minimal cost: {}", cost);

    println!("{}", cost);
    Ok(())
}

/// Reads an edge-list file, runs the containment loop and prints the severed
/// edges in order.
fn run_contain(input_path: &PathBuf, quiet_mode: bool) -> Result<(), AppError> {
    verbose_println!(quiet_mode, "\n[STEP 1] Reading edge list from file...");
    let lines = input::read_input_lines(input_path, quiet_mode)?;
    let edges = input::parse_edge_list(&lines)?;
    verbose_println!(quiet_mode, "   => Read {} edge(s).", edges.len());

    verbose_println!(quiet_mode, "[STEP 2] Running containment simulation...");
    let severed = containment::solve(&edges)?;
    verbose_println!(quiet_mode, "   => Severed {} edge(s).", severed.len());

    for edge in &severed {
        println!("{}", edge);
    }
    Ok(())
}
