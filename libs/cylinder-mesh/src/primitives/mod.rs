//! # Primitives
//!
//! Parametric mesh generators.

pub mod cylinder;

pub use cylinder::{generate, generate_cylinder, generate_into, CylinderSpec};
