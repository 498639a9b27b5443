//! # Configuration Constants
//!
//! Centralized constants for the blade-row pipeline. All geometry
//! calculations, tessellation parameters and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default faceting for hubs, ducts, airfoils and lofts
//! - **Airfoil**: NACA 4-digit camber limits
//! - **Assembly**: Row spacing and support-wall sizing
//! - **Export**: STL header text

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance for the free-vortex axial-velocity check.
///
/// Root, mean and tip triangles of one stage must agree on `cx` to within
/// this fraction of the mean value.
pub const CX_RELATIVE_TOLERANCE: f64 = 1e-6;

/// Squared length below which a rotation axis is treated as zero.
pub const AXIS_LENGTH_EPSILON: f64 = 1e-12;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Minimum number of side facets for any cylinder or duct.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_RESOLUTION;
///
/// let requested = 2;
/// assert!(requested < MIN_RESOLUTION);
/// ```
pub const MIN_RESOLUTION: u32 = 3;

/// Default number of side facets for hubs, ducts and mount cans.
pub const DEFAULT_RESOLUTION: u32 = 64;

/// Default number of chordwise stations per airfoil surface.
///
/// A section carries `2 * DEFAULT_PROFILE_POINTS` boundary points: the
/// upper surface from leading to trailing edge plus the lower surface back.
pub const DEFAULT_PROFILE_POINTS: u32 = 40;

/// Minimum chordwise stations per surface for a usable section.
pub const MIN_PROFILE_POINTS: u32 = 4;

/// Default number of span intervals in a lofted blade.
///
/// Twist is linear in span, so more stations give a smoother helix.
pub const DEFAULT_SPAN_STATIONS: u32 = 8;

// =============================================================================
// AIRFOIL CONSTANTS
// =============================================================================

/// Default chordwise position of maximum camber (fraction of chord).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_CAMBER_POSITION;
///
/// assert!(DEFAULT_CAMBER_POSITION > 0.0 && DEFAULT_CAMBER_POSITION < 1.0);
/// ```
pub const DEFAULT_CAMBER_POSITION: f64 = 0.4;

/// Largest camber expressible by a 4-digit designation (9% of chord, rounded up).
pub const MAX_CAMBER: f64 = 0.095;

/// Largest thickness accepted for a section (fraction of chord).
pub const MAX_THICKNESS: f64 = 0.4;

// =============================================================================
// ASSEMBLY CONSTANTS
// =============================================================================

/// Axial gap factor applied to hub and duct lengths when stacking stages.
///
/// Each row advances the next row's axial offset by its length times this
/// factor.
pub const ASSEMBLY_SPACING_FACTOR: f64 = 1.2;

/// Axial thickness of the optional rotor support-wall disk.
pub const SUPPORT_WALL_THICKNESS: f64 = 1.0;

// =============================================================================
// EXPORT CONSTANTS
// =============================================================================

/// Text written into the 80-byte binary STL header and the ASCII `solid` line.
pub const STL_HEADER: &str = "compressor blade row";

// =============================================================================
// SETTINGS
// =============================================================================

/// Immutable tessellation settings passed into every row build.
///
/// # Examples
/// ```
/// use config::constants::MeshSettings;
/// let settings = MeshSettings::default();
/// assert!(settings.resolution >= 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshSettings {
    /// Side facets for hubs, ducts and mount cans.
    pub resolution: u32,
    /// Chordwise stations per airfoil surface.
    pub profile_points: u32,
    /// Span intervals in each lofted blade.
    pub span_stations: u32,
    /// Chordwise position of maximum camber.
    pub camber_position: f64,
}

impl MeshSettings {
    /// Builds settings, rejecting values that cannot produce a closed solid.
    ///
    /// # Examples
    /// ```
    /// use config::constants::MeshSettings;
    /// let settings = MeshSettings::new(24, 20, 4, 0.4).expect("valid settings");
    /// assert_eq!(settings.resolution, 24);
    /// assert!(MeshSettings::new(2, 20, 4, 0.4).is_err());
    /// ```
    pub fn new(
        resolution: u32,
        profile_points: u32,
        span_stations: u32,
        camber_position: f64,
    ) -> Result<Self, ConfigError> {
        if resolution < MIN_RESOLUTION {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        if profile_points < MIN_PROFILE_POINTS {
            return Err(ConfigError::InvalidProfilePoints(profile_points));
        }
        if span_stations == 0 {
            return Err(ConfigError::InvalidSpanStations(span_stations));
        }
        if !(camber_position > 0.0 && camber_position < 1.0) {
            return Err(ConfigError::InvalidCamberPosition(camber_position));
        }
        Ok(Self {
            resolution,
            profile_points,
            span_stations,
            camber_position,
        })
    }
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            profile_points: DEFAULT_PROFILE_POINTS,
            span_stations: DEFAULT_SPAN_STATIONS,
            camber_position: DEFAULT_CAMBER_POSITION,
        }
    }
}

/// Error returned when invalid settings are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Fewer than three side facets.
    InvalidResolution(u32),
    /// Too few chordwise stations to describe a section.
    InvalidProfilePoints(u32),
    /// A loft needs at least one span interval.
    InvalidSpanStations(u32),
    /// Camber position outside the open interval (0, 1).
    InvalidCamberPosition(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => {
                write!(f, "resolution must be >= {MIN_RESOLUTION}: {value}")
            }
            ConfigError::InvalidProfilePoints(value) => {
                write!(f, "profile_points must be >= {MIN_PROFILE_POINTS}: {value}")
            }
            ConfigError::InvalidSpanStations(value) => {
                write!(f, "span_stations must be >= 1: {value}")
            }
            ConfigError::InvalidCamberPosition(value) => {
                write!(f, "camber_position must lie in (0, 1): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two values agree to within a fraction of their magnitude.
///
/// # Example
///
/// ```rust
/// use config::constants::{relative_equal, CX_RELATIVE_TOLERANCE};
///
/// assert!(relative_equal(100.0, 100.00001, CX_RELATIVE_TOLERANCE));
/// assert!(!relative_equal(100.0, 100.1, CX_RELATIVE_TOLERANCE));
/// ```
#[inline]
pub fn relative_equal(a: f64, b: f64, tolerance: f64) -> bool {
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= tolerance * scale
}

/// Radius of the circle inscribed in a regular polygon with `sides` facets.
///
/// Blades seated on a faceted hub use this radius so their root never
/// floats above a facet midpoint.
///
/// # Example
///
/// ```rust
/// use config::constants::inscribed_radius;
///
/// let r = inscribed_radius(10.0, 4);
/// assert!((r - 10.0 * std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
/// ```
#[inline]
pub fn inscribed_radius(radius: f64, sides: u32) -> f64 {
    radius * (std::f64::consts::PI / sides as f64).cos()
}
