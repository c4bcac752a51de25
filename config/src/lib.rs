//! # Config Crate
//!
//! Centralized configuration constants for the cylinder toolkit.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MIN_RADIUS, DEFAULT_RADIUS};
//!
//! let requested: f32 = -2.0;
//! let radius = if requested > 0.0 { requested } else { MIN_RADIUS };
//! assert_eq!(radius, MIN_RADIUS);
//! assert!(DEFAULT_RADIUS > MIN_RADIUS);
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
