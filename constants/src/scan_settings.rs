//! Tuning for the synthetic surface scan that stands in for feature-point
//! detection.

/// Half extent of the scanned surface patch in metres.
pub const SURFACE_HALF_EXTENT: f32 = 1.5;

/// Amplitude of the surface undulation in metres.
pub const SURFACE_BUMP_HEIGHT: f32 = 0.04;

/// Feature points accumulated per frame while scanning.
pub const POINTS_PER_FRAME: usize = 24;

/// Detected points required before measuring is enabled.
pub const READY_POINT_COUNT: usize = 600;

/// Total points retained once the scan is complete.
pub const MAX_POINT_COUNT: usize = 2000;

/// Maximum perpendicular distance from the cursor ray to a feature point
/// for a hit, in metres.
pub const HIT_TEST_RADIUS: f32 = 0.06;
