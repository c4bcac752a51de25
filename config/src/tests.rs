//! # Tests for Config Constants
//!
//! Sanity checks on the clamping floors and defaults.

use crate::constants::*;

// =============================================================================
// CLAMPING TESTS
// =============================================================================

#[test]
fn test_floors_are_positive() {
    assert!(MIN_RADIUS > 0.0, "MIN_RADIUS must be positive");
    assert!(MIN_HEIGHT > 0.0, "MIN_HEIGHT must be positive");
}

#[test]
fn test_min_edge_count_forms_a_polygon() {
    assert_eq!(MIN_EDGE_COUNT, 3);
}

// =============================================================================
// DEFAULT TESTS
// =============================================================================

#[test]
fn test_defaults_are_above_floors() {
    assert!(DEFAULT_RADIUS > MIN_RADIUS);
    assert!(DEFAULT_HEIGHT > MIN_HEIGHT);
    assert!(DEFAULT_EDGE_COUNT >= MIN_EDGE_COUNT);
}

#[test]
fn test_defaults_match_generator_window() {
    assert_eq!(DEFAULT_RADIUS, 1.0);
    assert_eq!(DEFAULT_HEIGHT, 5.0);
    assert_eq!(DEFAULT_EDGE_COUNT, 8);
}

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON > 0.0);
    assert!(EPSILON < MIN_RADIUS, "EPSILON must resolve the smallest radius");
}
