//! WASM bindings for Gatesim Core.
//!
//! This module provides JavaScript-friendly bindings for driving the
//! circuit from a browser canvas client: components are placed and wired
//! by coordinates (the same hit-testing the mouse handlers need), and the
//! whole circuit round-trips as a JSON snapshot for the socket relay.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCircuit } from 'gatesim_core';
//!
//! await init();
//!
//! const circuit = new WasmCircuit();
//! const a = circuit.add_component('INPUT', 50, 100);
//! const g = circuit.add_component('NOT', 150, 100);
//!
//! // Drag from the INPUT's output port to the gate's input port
//! circuit.connect_points(69, 100, 125, 100);
//! circuit.toggle_input(a);
//!
//! // Broadcast to other viewers
//! socket.emit('circuit_update', circuit.to_json());
//! ```

use wasm_bindgen::prelude::*;

use crate::circuit::{CircuitSnapshot, ComponentId, Point, WireId};
use crate::components::ComponentKind;
use crate::solver::{Simulator, SimulatorConfig};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible logic circuit simulator.
///
/// This struct wraps the native `Simulator` and provides a
/// JavaScript-friendly API for the canvas editing client.
#[wasm_bindgen]
pub struct WasmCircuit {
    simulator: Simulator,
}

#[wasm_bindgen]
impl WasmCircuit {
    /// Create an empty circuit.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCircuit {
        WasmCircuit {
            simulator: Simulator::new(),
        }
    }

    /// Create an empty circuit with a custom port hit radius.
    ///
    /// # Arguments
    /// * `hit_radius` - Radius of a port's hit region in canvas pixels
    #[wasm_bindgen]
    pub fn with_hit_radius(hit_radius: f32) -> WasmCircuit {
        let config = SimulatorConfig::new().with_hit_radius(hit_radius);
        WasmCircuit {
            simulator: Simulator::with_config(config),
        }
    }

    /// Restore a circuit from a JSON snapshot string.
    #[wasm_bindgen]
    pub fn from_json(json: &str) -> Result<WasmCircuit, JsValue> {
        let snapshot =
            CircuitSnapshot::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let simulator =
            Simulator::from_snapshot(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmCircuit { simulator })
    }

    /// Place a component and return its id.
    ///
    /// # Arguments
    /// * `kind` - One of `"INPUT"`, `"OUTPUT"`, `"AND"`, `"OR"`, `"NOT"`
    /// * `x`, `y` - Position on the canvas
    #[wasm_bindgen]
    pub fn add_component(&mut self, kind: &str, x: f32, y: f32) -> Result<usize, JsValue> {
        let kind: ComponentKind = kind.parse().map_err(|e: String| JsValue::from_str(&e))?;
        let id = self.simulator.add_component(kind, Point::new(x, y));
        Ok(id.0)
    }

    /// Remove a component and every wire touching it. No-op for unknown
    /// ids.
    #[wasm_bindgen]
    pub fn remove_component(&mut self, id: usize) {
        self.simulator.remove_component(ComponentId(id));
    }

    /// Wire the ports found at two canvas points, in either drag
    /// direction.
    ///
    /// Returns the new wire's id, or an error naming what went wrong
    /// (no port under an endpoint, same component, two ports of the same
    /// direction) for the client to surface as a transient notice.
    #[wasm_bindgen]
    pub fn connect_points(
        &mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
    ) -> Result<usize, JsValue> {
        let start = self
            .simulator
            .resolve_port(Point::new(x1, y1))
            .ok_or_else(|| JsValue::from_str("No port at the start point"))?;
        let end = self
            .simulator
            .resolve_port(Point::new(x2, y2))
            .ok_or_else(|| JsValue::from_str("No port at the end point"))?;
        self.simulator
            .connect(start, end)
            .map(|id| id.0)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Remove a single wire by id. No-op for unknown ids.
    #[wasm_bindgen]
    pub fn disconnect(&mut self, wire_id: usize) {
        self.simulator.disconnect(WireId(wire_id));
    }

    /// Toggle an INPUT terminal. Returns `false` if `id` is not an INPUT.
    #[wasm_bindgen]
    pub fn toggle_input(&mut self, id: usize) -> bool {
        self.simulator.toggle_input(ComponentId(id))
    }

    /// Whether a port sits under the given canvas point.
    ///
    /// Useful for cursor feedback while dragging a wire.
    #[wasm_bindgen]
    pub fn has_port_at(&self, x: f32, y: f32) -> bool {
        self.simulator.resolve_port(Point::new(x, y)).is_some()
    }

    /// Read one component's state: `true`/`false`, or `undefined` while
    /// the value is unknown.
    #[wasm_bindgen]
    pub fn state(&self, id: usize) -> Option<bool> {
        self.simulator
            .state(ComponentId(id))
            .and_then(|s| s.as_bool())
    }

    /// Number of components currently placed.
    #[wasm_bindgen(getter)]
    pub fn component_count(&self) -> usize {
        self.simulator.components().count()
    }

    /// Serialize the circuit as a JSON snapshot string for persistence or
    /// broadcast.
    #[wasm_bindgen]
    pub fn to_json(&self) -> Result<String, JsValue> {
        self.simulator
            .snapshot()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the circuit with a snapshot pushed by another viewer.
    #[wasm_bindgen]
    pub fn apply_json(&mut self, json: &str) -> Result<(), JsValue> {
        let snapshot =
            CircuitSnapshot::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.simulator
            .apply_snapshot(&snapshot)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for WasmCircuit {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the default port hit radius.
#[wasm_bindgen]
pub fn default_hit_radius() -> f32 {
    crate::DEFAULT_HIT_RADIUS
}
