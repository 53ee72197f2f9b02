//! Scene adapter: everything that turns session state into visuals and
//! resolves screen input into world-space points.
//!
//! Renderers follow one pattern throughout: tagged entities are despawned
//! and rebuilt from state every frame, so a session reset clears the scene
//! with no extra bookkeeping.

/// Free-look viewport camera and controller.
pub mod camera;

/// Synthetic feature-point scan and cursor hit-testing.
pub mod feature_points;

/// Two-tier confirmation feedback forwarded to the embedding frontend.
pub mod feedback;

/// Floating measurement label and the HUD line.
pub mod label;

/// Marker dots and the connecting polyline.
pub mod markers;
