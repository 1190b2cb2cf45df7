//! Core types for circuit representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A unique identifier for a component in the circuit.
///
/// Ids are assigned monotonically by the circuit and never reused, so a
/// wire holding a `ComponentId` can always tell whether its endpoint is
/// still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ComponentId(pub usize);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A unique identifier for a wire in the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(pub usize);

impl fmt::Display for WireId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

/// A 2D position on the editing surface, in canvas pixels.
///
/// The core only uses positions to derive port locations for hit-testing;
/// everything else about layout belongs to the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Translate by an offset.
    pub fn offset(&self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A tri-valued boolean signal.
///
/// `Unknown` means the value has not been determined: the component has an
/// unwired input slot, sits downstream of one, or the propagation pass has
/// not reached it yet. INPUT terminals never carry `Unknown`.
///
/// Serialized as a nullable boolean (`true`/`false`/`null`) to stay
/// compatible with snapshots produced by the canvas client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Signal {
    Low,
    High,
    #[default]
    Unknown,
}

impl Signal {
    /// Whether the signal carries a definite boolean value.
    pub fn is_known(&self) -> bool {
        !matches!(self, Signal::Unknown)
    }

    /// The definite boolean value, if any.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Signal::Low => Some(false),
            Signal::High => Some(true),
            Signal::Unknown => None,
        }
    }

    /// Logical negation; `Unknown` stays `Unknown`.
    pub fn negate(&self) -> Signal {
        match self {
            Signal::Low => Signal::High,
            Signal::High => Signal::Low,
            Signal::Unknown => Signal::Unknown,
        }
    }

    /// Flip between `Low` and `High`. `Unknown` flips to `High`, matching a
    /// first toggle on a terminal that never held a value.
    pub fn toggled(&self) -> Signal {
        match self {
            Signal::High => Signal::Low,
            Signal::Low | Signal::Unknown => Signal::High,
        }
    }

    /// Strict two-input AND: definite only when both inputs are definite.
    pub fn and2(a: Signal, b: Signal) -> Signal {
        match (a.as_bool(), b.as_bool()) {
            (Some(a), Some(b)) => Signal::from(a && b),
            _ => Signal::Unknown,
        }
    }

    /// Strict two-input OR: definite only when both inputs are definite.
    pub fn or2(a: Signal, b: Signal) -> Signal {
        match (a.as_bool(), b.as_bool()) {
            (Some(a), Some(b)) => Signal::from(a || b),
            _ => Signal::Unknown,
        }
    }
}

impl From<bool> for Signal {
    fn from(value: bool) -> Self {
        if value {
            Signal::High
        } else {
            Signal::Low
        }
    }
}

impl From<Option<bool>> for Signal {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(v) => Signal::from(v),
            None => Signal::Unknown,
        }
    }
}

impl From<Signal> for Option<bool> {
    fn from(value: Signal) -> Self {
        value.as_bool()
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Low => write!(f, "0"),
            Signal::High => write!(f, "1"),
            Signal::Unknown => write!(f, "?"),
        }
    }
}

/// Which side of a component a port sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    /// A port that receives a signal (left side of a gate).
    Input,
    /// A port that drives a signal (right side of a gate).
    Output,
}

/// An attachment point on a component where a wire may terminate.
///
/// Ports are derived from component kind and position, never stored: this
/// triple is all the identity a port has. `slot` is always 0 for output
/// ports and for single-input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Port {
    pub component: ComponentId,
    pub direction: PortDirection,
    pub slot: usize,
}

impl Port {
    /// The input port of `component` at `slot`.
    pub fn input(component: ComponentId, slot: usize) -> Self {
        Self {
            component,
            direction: PortDirection::Input,
            slot,
        }
    }

    /// The single output port of `component`.
    pub fn output(component: ComponentId) -> Self {
        Self {
            component,
            direction: PortDirection::Output,
            slot: 0,
        }
    }

    /// Whether this is an input-side port.
    pub fn is_input(&self) -> bool {
        self.direction == PortDirection::Input
    }
}
