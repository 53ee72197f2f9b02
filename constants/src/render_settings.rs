use bevy::prelude::*;

pub const MARKER_RADIUS: f32 = 0.012;
pub const PREVIEW_SPHERE_RADIUS: f32 = 0.008;
pub const FEATURE_POINT_RADIUS: f32 = 0.004;
pub const POLYLINE_WIDTH: f32 = 0.005;

// Segments shorter than this are skipped to avoid degenerate rotation arcs.
pub const MIN_SEGMENT_LENGTH: f32 = 0.002;

pub const LABEL_FONT_SIZE: f32 = 22.0;
pub const HUD_FONT_SIZE: f32 = 14.0;

pub const MARKER_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const PREVIEW_COLOR: Color = Color::srgb(1.0, 1.0, 0.2);
pub const POLYLINE_COLOR: Color = Color::srgb(1.0, 0.27, 0.0);
pub const FEATURE_POINT_COLOR: Color = Color::srgb(0.85, 0.75, 0.2);
pub const LABEL_COLOR: Color = Color::srgb(1.0, 1.0, 1.0);
pub const HUD_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);
