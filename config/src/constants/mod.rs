//! Centralized configuration values shared across the cylinder toolkit.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// CLAMPING FLOORS
// =============================================================================

/// Smallest radius a cylinder is generated with.
///
/// Any radius that is zero, negative or NaN is replaced by this value.
///
/// # Examples
/// ```
/// use config::constants::MIN_RADIUS;
/// assert!(MIN_RADIUS > 0.0);
/// ```
pub const MIN_RADIUS: f32 = 0.01;

/// Smallest height a cylinder is generated with.
///
/// # Examples
/// ```
/// use config::constants::MIN_HEIGHT;
/// assert!(MIN_HEIGHT > 0.0);
/// ```
pub const MIN_HEIGHT: f32 = 0.01;

/// Smallest edge count around the rim. Three edges form a triangular prism.
///
/// # Examples
/// ```
/// use config::constants::MIN_EDGE_COUNT;
/// assert_eq!(MIN_EDGE_COUNT, 3);
/// ```
pub const MIN_EDGE_COUNT: u32 = 3;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Radius a fresh generator starts with.
pub const DEFAULT_RADIUS: f32 = 1.0;

/// Height a fresh generator starts with.
pub const DEFAULT_HEIGHT: f32 = 5.0;

/// Edge count a fresh generator starts with.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_EDGE_COUNT, MIN_EDGE_COUNT};
/// assert!(DEFAULT_EDGE_COUNT >= MIN_EDGE_COUNT);
/// ```
pub const DEFAULT_EDGE_COUNT: u32 = 8;

/// Name given to every generated cylinder mesh.
pub const CYLINDER_MESH_NAME: &str = "Generated Cylinder";

// =============================================================================
// PRECISION
// =============================================================================

/// Tolerance for single-precision geometry comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// let a = 0.1_f32 + 0.2;
/// assert!((a - 0.3).abs() < EPSILON);
/// ```
pub const EPSILON: f32 = 1.0e-5;

/// Minimum doubled triangle area below which a triangle counts as degenerate.
pub const DEGENERATE_AREA_EPSILON: f32 = 1.0e-12;

// =============================================================================
// GENERATOR CONFIGURATION
// =============================================================================

/// Immutable snapshot of generator settings.
///
/// `max_edge_count` bounds the work a single generation call may do. `None`
/// leaves the edge count unbounded, which is the default.
///
/// # Examples
/// ```
/// use config::constants::GeneratorConfig;
/// let config = GeneratorConfig::default();
/// assert!(config.max_edge_count.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeneratorConfig {
    /// Upper bound on the edge count, if any.
    pub max_edge_count: Option<u32>,
}

impl GeneratorConfig {
    /// Builds a configuration, rejecting a ceiling below [`MIN_EDGE_COUNT`].
    ///
    /// # Examples
    /// ```
    /// use config::constants::GeneratorConfig;
    /// let cfg = GeneratorConfig::new(Some(256)).expect("valid config");
    /// assert_eq!(cfg.max_edge_count, Some(256));
    /// assert!(GeneratorConfig::new(Some(2)).is_err());
    /// ```
    pub fn new(max_edge_count: Option<u32>) -> Result<Self, ConfigError> {
        if let Some(max) = max_edge_count {
            if max < MIN_EDGE_COUNT {
                return Err(ConfigError::InvalidEdgeCeiling(max));
            }
        }
        Ok(Self { max_edge_count })
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the edge ceiling cannot fit even the smallest cylinder.
    InvalidEdgeCeiling(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidEdgeCeiling(value) => {
                write!(f, "max_edge_count must be >= {MIN_EDGE_COUNT}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
