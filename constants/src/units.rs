//! Unit scale factors for measurement display.
//!
//! World space is metric: one world unit is one metre. Results are shown in
//! centimetres and square centimetres.

pub const METRES_TO_CENTIMETRES: f32 = 100.0;
pub const SQUARE_METRES_TO_SQUARE_CENTIMETRES: f32 = 10_000.0;
