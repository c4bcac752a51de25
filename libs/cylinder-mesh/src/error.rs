//! # Mesh Errors
//!
//! Error types for mesh generation and validation.

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while generating or checking a mesh.
///
/// The pure builder never fails: out-of-range dimensions are clamped. Errors
/// come from the configured edge ceiling and from topology checks.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Edge count above the configured ceiling
    #[error("Too many edges: {count} (max: {max})")]
    TooManyEdges {
        /// Requested edge count
        count: u32,
        /// Configured ceiling
        max: u32,
    },

    /// Triangle references a vertex that does not exist
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// What is wrong
        message: String,
    },

    /// Mesh is open or inconsistently wound
    #[error("Mesh is not a closed manifold: {message}")]
    NonManifold {
        /// First offending edge
        message: String,
    },

    /// Invalid generator configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a non-manifold error.
    pub fn non_manifold(message: impl Into<String>) -> Self {
        Self::NonManifold {
            message: message.into(),
        }
    }
}
