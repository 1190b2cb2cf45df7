//! Gatesim - Logic Circuit Inspector
//!
//! Loads a circuit snapshot, optionally toggles INPUT terminals, and prints
//! the propagated component states.
//!
//! # Usage
//!
//! ```bash
//! gatesim circuit.json --toggle 0 --toggle 3
//! ```

use std::path::{Path, PathBuf};

use clap::Parser;
use tracing::warn;

use gatesim_core::{
    error::{GatesimError, Result},
    CircuitSnapshot, ComponentId, Simulator,
};

/// Logic circuit snapshot inspector
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the circuit snapshot file (.json)
    #[arg(value_name = "CIRCUIT_FILE")]
    circuit_file: PathBuf,

    /// Toggle the INPUT terminal with this id before printing (repeatable)
    #[arg(short, long = "toggle", value_name = "ID")]
    toggle: Vec<usize>,

    /// Write the resulting snapshot back to a file
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    // Load and validate the snapshot
    let snapshot = read_snapshot(&args.circuit_file)?;
    let mut sim = Simulator::from_snapshot(&snapshot)?;

    // Apply toggles through the mutation API
    for id in &args.toggle {
        if !sim.toggle_input(ComponentId(*id)) {
            warn!("Component {} is not an INPUT terminal, skipping", id);
        }
    }

    print_states(&sim);

    if let Some(path) = &args.output {
        write_snapshot(path, &sim.snapshot())?;
    }

    Ok(())
}

/// Setup logging based on verbosity level
fn setup_logging(verbose: bool) {
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();
}

fn read_snapshot(path: &Path) -> Result<CircuitSnapshot> {
    let content = std::fs::read_to_string(path).map_err(|e| GatesimError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    CircuitSnapshot::from_json(&content)
}

fn write_snapshot(path: &Path, snapshot: &CircuitSnapshot) -> Result<()> {
    std::fs::write(path, snapshot.to_json()?).map_err(|e| GatesimError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}

fn print_states(sim: &Simulator) {
    println!("Components:");
    for component in sim.components() {
        println!(
            "  {:>4}  {:<6}  {}  at {}",
            component.id.to_string(),
            component.kind.to_string(),
            component.state,
            component.position,
        );
    }

    println!("Wires:");
    for wire in sim.wires() {
        println!(
            "  {:>4}  {} -> {} slot {}",
            wire.id.to_string(),
            wire.source,
            wire.destination,
            wire.slot,
        );
    }
}
