//! Component kinds for the logic circuit.
//!
//! This module defines the five supported component kinds:
//! - Terminals: INPUT (user-toggled source), OUTPUT (observed sink)
//! - Gates: AND, OR, NOT
//!
//! Each kind fixes a port shape (how many input slots, whether there is an
//! output) and a boolean evaluation rule. The kind set is a closed enum so
//! that adding a gate kind is a compile-time-checked extension point: every
//! `match` below must be updated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::circuit::{ComponentId, Point, Signal};

/// The number of input slots on the widest component kind.
pub const MAX_INPUT_SLOTS: usize = 2;

/// The kind of a circuit component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ComponentKind {
    /// Source terminal; its state is authoritative and set only by toggling.
    Input,
    /// Sink terminal; passes its single input through for observation.
    Output,
    /// Two-input AND gate.
    And,
    /// Two-input OR gate.
    Or,
    /// Single-input inverter.
    Not,
}

impl ComponentKind {
    /// Number of input slots this kind exposes.
    pub fn input_slots(&self) -> usize {
        match self {
            ComponentKind::Input => 0,
            ComponentKind::Output | ComponentKind::Not => 1,
            ComponentKind::And | ComponentKind::Or => 2,
        }
    }

    /// Whether this kind exposes an output port.
    pub fn has_output(&self) -> bool {
        !matches!(self, ComponentKind::Output)
    }

    /// Whether this kind is a gate (computes a boolean function).
    pub fn is_gate(&self) -> bool {
        matches!(self, ComponentKind::And | ComponentKind::Or | ComponentKind::Not)
    }

    /// The state a freshly placed component of this kind starts with.
    ///
    /// INPUT terminals start driving `Low`; every derived kind starts
    /// `Unknown` until a propagation pass reaches it.
    pub fn initial_state(&self) -> Signal {
        match self {
            ComponentKind::Input => Signal::Low,
            _ => Signal::Unknown,
        }
    }

    /// Evaluate this kind's output from its input slots.
    ///
    /// `inputs` is indexed by slot; an unwired slot carries `Unknown`.
    /// Gates are strict: any `Unknown` among the required slots makes the
    /// result `Unknown`. An INPUT's state is authoritative, never derived,
    /// so its arm always yields `Unknown` and is never reached by the
    /// propagation pass.
    pub fn evaluate(&self, inputs: [Signal; MAX_INPUT_SLOTS]) -> Signal {
        match self {
            ComponentKind::And => Signal::and2(inputs[0], inputs[1]),
            ComponentKind::Or => Signal::or2(inputs[0], inputs[1]),
            ComponentKind::Not => inputs[0].negate(),
            ComponentKind::Output => inputs[0],
            ComponentKind::Input => Signal::Unknown,
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentKind::Input => "INPUT",
            ComponentKind::Output => "OUTPUT",
            ComponentKind::And => "AND",
            ComponentKind::Or => "OR",
            ComponentKind::Not => "NOT",
        };
        write!(f, "{name}")
    }
}

impl FromStr for ComponentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INPUT" => Ok(ComponentKind::Input),
            "OUTPUT" => Ok(ComponentKind::Output),
            "AND" => Ok(ComponentKind::And),
            "OR" => Ok(ComponentKind::Or),
            "NOT" => Ok(ComponentKind::Not),
            other => Err(format!("unknown component kind '{other}'")),
        }
    }
}

/// A placed circuit component.
#[derive(Debug, Clone)]
pub struct Component {
    pub id: ComponentId,
    pub kind: ComponentKind,
    /// Position on the editing surface; only used to derive port locations.
    pub position: Point,
    /// Current signal. Authoritative for INPUT, derived for everything else.
    pub state: Signal,
}

impl Component {
    /// Create a component in its kind's initial state.
    pub fn new(id: ComponentId, kind: ComponentKind, position: Point) -> Self {
        Self {
            id,
            kind,
            position,
            state: kind.initial_state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_shape_per_kind() {
        assert_eq!(ComponentKind::Input.input_slots(), 0);
        assert_eq!(ComponentKind::Output.input_slots(), 1);
        assert_eq!(ComponentKind::Not.input_slots(), 1);
        assert_eq!(ComponentKind::And.input_slots(), 2);
        assert_eq!(ComponentKind::Or.input_slots(), 2);

        assert!(ComponentKind::Input.has_output());
        assert!(!ComponentKind::Output.has_output());
    }

    #[test]
    fn test_and_truth_table() {
        let and = ComponentKind::And;
        assert_eq!(and.evaluate([Signal::High, Signal::High]), Signal::High);
        assert_eq!(and.evaluate([Signal::High, Signal::Low]), Signal::Low);
        assert_eq!(and.evaluate([Signal::Low, Signal::Low]), Signal::Low);
    }

    #[test]
    fn test_and_requires_both_slots() {
        let and = ComponentKind::And;
        assert_eq!(and.evaluate([Signal::High, Signal::Unknown]), Signal::Unknown);
        assert_eq!(and.evaluate([Signal::Low, Signal::Unknown]), Signal::Unknown);
        assert_eq!(and.evaluate([Signal::Unknown, Signal::Unknown]), Signal::Unknown);
    }

    #[test]
    fn test_or_truth_table() {
        let or = ComponentKind::Or;
        assert_eq!(or.evaluate([Signal::Low, Signal::Low]), Signal::Low);
        assert_eq!(or.evaluate([Signal::High, Signal::Low]), Signal::High);
        assert_eq!(or.evaluate([Signal::High, Signal::Unknown]), Signal::Unknown);
    }

    #[test]
    fn test_not_and_output_pass_through() {
        assert_eq!(
            ComponentKind::Not.evaluate([Signal::High, Signal::Unknown]),
            Signal::Low
        );
        assert_eq!(
            ComponentKind::Not.evaluate([Signal::Unknown, Signal::Unknown]),
            Signal::Unknown
        );
        assert_eq!(
            ComponentKind::Output.evaluate([Signal::High, Signal::Unknown]),
            Signal::High
        );
    }

    #[test]
    fn test_initial_state() {
        assert_eq!(ComponentKind::Input.initial_state(), Signal::Low);
        assert_eq!(ComponentKind::And.initial_state(), Signal::Unknown);
        assert_eq!(ComponentKind::Output.initial_state(), Signal::Unknown);
    }

    #[test]
    fn test_kind_name_round_trip() {
        for kind in [
            ComponentKind::Input,
            ComponentKind::Output,
            ComponentKind::And,
            ComponentKind::Or,
            ComponentKind::Not,
        ] {
            assert_eq!(kind.to_string().parse::<ComponentKind>(), Ok(kind));
        }
        assert!("XOR".parse::<ComponentKind>().is_err());
    }
}
