//! Signal propagation engine.
//!
//! This module recomputes every derived component state from the current
//! INPUT states and wiring.
//!
//! ## Propagation model
//!
//! Each pass is a single forward walk over the wire graph:
//!
//! 1. Every non-INPUT state is reset to `Unknown`.
//! 2. A work-list is seeded with the INPUT terminals.
//! 3. Components are popped until the list is empty; each popped
//!    component's wire-fed successors are recomputed from their current
//!    input signals and pushed when the result is definite. A component is
//!    processed at most once per pass.
//!
//! Gates are strict: a gate with an unwired or still-`Unknown` input slot
//! stays `Unknown`. For acyclic circuits the pass reaches the unique fixed
//! point in any pop order; feedback loops are not settled iteratively and
//! stay `Unknown` past the first signal edge.

mod propagate;
mod simulator;

pub use propagate::propagate;
pub use simulator::{Simulator, SimulatorConfig};
