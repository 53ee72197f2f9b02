//! Computational core of the measuring tool.
//!
//! Pure code, no scene access: the geometry functions and the interaction
//! state machine are exercised by the input systems in `tools/` and rendered
//! by the adapters in `scene/`.
//!
//! ## Interaction model
//!
//! ```text
//! Tap (resolved feature point)
//!   └─> MeasureSession::place
//!       ├─> at capacity? discard previous measurement, start over
//!       ├─> append marker
//!       └─> recompute Measurement from the full marker list
//!           ├─> Distance: exactly 2 markers, |b - a| in cm
//!           └─> Area: 3..=4 markers, fan triangulation in cm²,
//!               recomputed live as the 4th marker lands
//! ```
//!
//! Mode switches and explicit resets always clear the marker set; there is
//! no transition that carries markers across a mode change.

/// Distance, area and centroid computation over placed markers.
///
/// Fan-triangulated area assumes coplanar markers in consistent winding
/// order; no validation is performed.
pub mod geometry;

/// Marker store and the tap-driven interaction state machine.
pub mod session;
