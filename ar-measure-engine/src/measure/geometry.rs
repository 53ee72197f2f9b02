use bevy::prelude::*;
use constants::units::{METRES_TO_CENTIMETRES, SQUARE_METRES_TO_SQUARE_CENTIMETRES};
use serde::{Deserialize, Serialize};

/// The two measuring modes offered by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureMode {
    Distance,
    Area,
}

impl MeasureMode {
    /// Convert string identifier to mode for RPC compatibility.
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "distance" => Some(Self::Distance),
            "area" => Some(Self::Area),
            _ => None,
        }
    }

    /// Convert mode to string identifier for frontend communication.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Area => "area",
        }
    }

    /// Markers a measurement of this mode is built from. Placing a marker
    /// while the set is at capacity restarts the measurement.
    pub fn marker_capacity(&self) -> usize {
        match self {
            Self::Distance => 2,
            Self::Area => 4,
        }
    }

    /// Markers required before a result can be computed. Area results are
    /// recomputed live for every marker from the third onward.
    pub fn minimum_markers(&self) -> usize {
        match self {
            Self::Distance => 2,
            Self::Area => 3,
        }
    }
}

/// A computed measurement: scalar magnitude plus the world-space anchor the
/// floating label is attached to. Ephemeral, fully recomputed from the
/// marker list whenever it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub mode: MeasureMode,
    /// Centimetres for distance, square centimetres for area.
    pub magnitude: f32,
    pub anchor: Vec3,
}

impl Measurement {
    /// Display text for the floating label.
    pub fn label(&self) -> String {
        match self.mode {
            MeasureMode::Distance => format!("{:.2} cm", self.magnitude),
            MeasureMode::Area => format!("{:.2} cm\u{b2}", self.magnitude),
        }
    }
}

/// Straight-line distance between the two markers, in centimetres, anchored
/// at the second marker. NaN inputs propagate; the session guarantees the
/// marker count.
pub fn compute_distance(markers: &[Vec3]) -> Measurement {
    debug_assert_eq!(markers.len(), 2, "distance needs exactly two markers");
    Measurement {
        mode: MeasureMode::Distance,
        magnitude: (markers[1] - markers[0]).length() * METRES_TO_CENTIMETRES,
        anchor: markers[1],
    }
}

/// Planar area enclosed by the markers, in square centimetres, anchored at
/// the 3D centroid of the marker set.
///
/// Fan triangulation from the first marker: the sum of
/// `0.5 * |cross(m[i] - m[0], m[i+1] - m[0])|` over the fan. Valid only for
/// coplanar, simple polygons listed in consistent winding order; no
/// validation is performed, so skewed or out-of-order markers yield a
/// numerically finite but geometrically meaningless sum.
pub fn compute_area(markers: &[Vec3]) -> Measurement {
    debug_assert!(markers.len() >= 3, "area needs at least three markers");

    let origin = markers[0];
    let mut area = 0.0;
    for i in 1..markers.len() - 1 {
        let a = markers[i] - origin;
        let b = markers[i + 1] - origin;
        area += 0.5 * a.cross(b).length();
    }

    Measurement {
        mode: MeasureMode::Area,
        magnitude: area * SQUARE_METRES_TO_SQUARE_CENTIMETRES,
        anchor: centroid(markers),
    }
}

/// Componentwise arithmetic mean of the markers. This is the 3D centroid,
/// not the 2D polygon centroid, so it is only visually central for
/// near-planar, near-convex marker sets.
pub fn centroid(markers: &[Vec3]) -> Vec3 {
    debug_assert!(!markers.is_empty(), "centroid of an empty marker set");
    markers.iter().sum::<Vec3>() / markers.len() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    #[test]
    fn distance_scales_metres_to_centimetres() {
        let m = compute_distance(&[Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0)]);
        assert!((m.magnitude - 100.0).abs() < EPSILON);
        assert_eq!(m.anchor, Vec3::new(0.0, 0.0, 1.0));
        assert_eq!(m.mode, MeasureMode::Distance);
    }

    #[test]
    fn distance_magnitude_is_order_independent() {
        let a = Vec3::new(0.3, -1.2, 4.0);
        let b = Vec3::new(-2.0, 0.5, 1.5);
        let forward = compute_distance(&[a, b]);
        let backward = compute_distance(&[b, a]);
        assert!((forward.magnitude - backward.magnitude).abs() < EPSILON);
        // The anchor follows the second marker, so it does swap.
        assert_eq!(forward.anchor, b);
        assert_eq!(backward.anchor, a);
    }

    #[test]
    fn right_triangle_area_matches_half_leg_product() {
        let legs = [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
        ];
        let m = compute_area(&legs);
        assert!((m.magnitude - 5_000.0).abs() < EPSILON);
        let anchor = m.anchor;
        assert!((anchor.x - 2.0 / 3.0).abs() < EPSILON);
        assert!((anchor.y - 1.0 / 3.0).abs() < EPSILON);
        assert!(anchor.z.abs() < EPSILON);
    }

    #[test]
    fn quad_area_sums_both_fan_triangles() {
        // Unit square in the XZ plane, counter-clockwise.
        let square = [
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let m = compute_area(&square);
        assert!((m.magnitude - 10_000.0).abs() < 1e-2);
        assert!((m.anchor - Vec3::new(0.5, 0.0, 0.5)).length() < EPSILON);
    }

    #[test]
    fn coincident_markers_yield_zero_not_an_error() {
        let p = Vec3::new(0.4, 0.4, 0.4);
        assert!(compute_distance(&[p, p]).magnitude.abs() < EPSILON);
        assert!(compute_area(&[p, p, p]).magnitude.abs() < EPSILON);
    }

    #[test]
    fn labels_carry_units() {
        let d = compute_distance(&[Vec3::ZERO, Vec3::X]);
        assert_eq!(d.label(), "100.00 cm");
        let a = compute_area(&[Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0)]);
        assert_eq!(a.label(), "5000.00 cm\u{b2}");
    }

    #[test]
    fn mode_identifiers_round_trip() {
        assert_eq!(MeasureMode::from_string("Area"), Some(MeasureMode::Area));
        assert_eq!(
            MeasureMode::from_string(MeasureMode::Distance.as_str()),
            Some(MeasureMode::Distance)
        );
        assert_eq!(MeasureMode::from_string("volume"), None);
    }
}
