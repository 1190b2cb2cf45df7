//! Error types for the Gatesim circuit core.
//!
//! This module provides a unified error type [`GatesimError`] that covers
//! all error conditions that can occur during wiring, snapshot exchange,
//! and (in the CLI) file I/O.

use thiserror::Error;

use crate::circuit::ComponentId;

/// Result type alias using [`GatesimError`].
pub type Result<T> = std::result::Result<T, GatesimError>;

/// Unified error type for all Gatesim operations.
#[derive(Error, Debug)]
pub enum GatesimError {
    // ============ Connection Errors ============
    /// Both ends of the proposed wire are ports of the same component
    #[error("Cannot wire a component to itself")]
    SelfConnection,

    /// The proposed wire does not link exactly one output port to one input port
    #[error("A wire must connect an output port to an input port")]
    InvalidDirection,

    /// An operation referenced a component that is not in the circuit
    #[error("Component {id} not found in circuit")]
    UnknownComponent { id: ComponentId },

    // ============ Snapshot Errors ============
    /// A deserialized snapshot violates a structural invariant
    #[error("Invalid circuit snapshot: {message}")]
    InvalidSnapshot { message: String },

    /// Error decoding a snapshot from JSON
    #[error("Failed to decode snapshot: {source}")]
    SnapshotDecode {
        #[source]
        source: serde_json::Error,
    },

    /// Error encoding a snapshot to JSON
    #[error("Failed to encode snapshot: {source}")]
    SnapshotEncode {
        #[source]
        source: serde_json::Error,
    },

    // ============ I/O Errors ============
    /// Error reading a circuit snapshot file
    #[cfg(feature = "cli")]
    #[error("Failed to read circuit file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing a circuit snapshot file
    #[cfg(feature = "cli")]
    #[error("Failed to write circuit file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl GatesimError {
    /// Create an unknown-component error
    pub fn unknown_component(id: ComponentId) -> Self {
        Self::UnknownComponent { id }
    }

    /// Create an invalid-snapshot error
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }
}
