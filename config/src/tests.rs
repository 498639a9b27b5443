//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_cx_tolerance_matches_design_check() {
    assert!(CX_RELATIVE_TOLERANCE <= 1e-6);
    assert!(CX_RELATIVE_TOLERANCE > EPSILON);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_resolution_forms_polygon() {
    assert_eq!(MIN_RESOLUTION, 3);
}

#[test]
fn test_default_resolution_above_minimum() {
    assert!(DEFAULT_RESOLUTION >= MIN_RESOLUTION);
    assert!(DEFAULT_PROFILE_POINTS >= MIN_PROFILE_POINTS);
    assert!(DEFAULT_SPAN_STATIONS >= 1);
}

// =============================================================================
// SETTINGS TESTS
// =============================================================================

#[test]
fn test_default_settings_use_constants() {
    let settings = MeshSettings::default();
    assert_eq!(settings.resolution, DEFAULT_RESOLUTION);
    assert_eq!(settings.profile_points, DEFAULT_PROFILE_POINTS);
    assert_eq!(settings.span_stations, DEFAULT_SPAN_STATIONS);
    assert_eq!(settings.camber_position, DEFAULT_CAMBER_POSITION);
}

#[test]
fn test_settings_reject_invalid_values() {
    assert_eq!(
        MeshSettings::new(2, 20, 4, 0.4).unwrap_err(),
        ConfigError::InvalidResolution(2)
    );
    assert_eq!(
        MeshSettings::new(16, 3, 4, 0.4).unwrap_err(),
        ConfigError::InvalidProfilePoints(3)
    );
    assert_eq!(
        MeshSettings::new(16, 20, 0, 0.4).unwrap_err(),
        ConfigError::InvalidSpanStations(0)
    );
    assert_eq!(
        MeshSettings::new(16, 20, 4, 1.0).unwrap_err(),
        ConfigError::InvalidCamberPosition(1.0)
    );
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_relative_equal_scales_with_magnitude() {
    assert!(relative_equal(1.0e6, 1.0e6 + 0.5, CX_RELATIVE_TOLERANCE));
    assert!(!relative_equal(1.0e6, 1.0e6 + 5.0, CX_RELATIVE_TOLERANCE));
}

#[test]
fn test_inscribed_radius_square() {
    let r = inscribed_radius(2.0, 4);
    assert!((r - 2.0_f64.sqrt()).abs() < 1e-12);
}

#[test]
fn test_inscribed_radius_approaches_circle() {
    let r = inscribed_radius(5.0, 1000);
    assert!(r < 5.0);
    assert!(5.0 - r < 1e-4);
}

// =============================================================================
// ASSEMBLY TESTS
// =============================================================================

#[test]
fn test_assembly_spacing_leaves_gap() {
    assert!(ASSEMBLY_SPACING_FACTOR > 1.0);
    assert!(SUPPORT_WALL_THICKNESS > 0.0);
}

#[test]
fn test_stl_header_fits_binary_header() {
    assert!(STL_HEADER.len() <= 80);
}
