use bevy::prelude::*;

use crate::measure::geometry::{Measurement, MeasureMode, compute_area, compute_distance};

/// Ordered set of placed markers, insertion order = placement order.
///
/// Capacity is mode-dependent and enforced by [`MeasureSession::place`];
/// the set itself only stores.
#[derive(Debug, Default, Clone)]
pub struct MarkerSet {
    points: Vec<Vec3>,
}

impl MarkerSet {
    /// Append a marker. The session guarantees capacity is not exceeded.
    pub fn add(&mut self, point: Vec3) {
        self.points.push(point);
    }

    /// Clear all markers. Idempotent.
    pub fn reset(&mut self) {
        self.points.clear();
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Indexed access. Panics when `index >= count()`; an out-of-range index
    /// is a contract violation the session's own guards rule out.
    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }
}

/// Outcome of placing one marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// The previous, completed measurement was discarded before this marker
    /// was placed (tap after completion starts over).
    pub restarted: bool,
    /// Measurement produced by this placement, if the marker count reached
    /// the mode's threshold.
    pub measurement: Option<Measurement>,
}

/// Interaction state machine for the measuring tool: current mode, the
/// marker set, and the measurement derived from it.
///
/// Exclusively owns its markers; all mutation happens through [`place`],
/// [`set_mode`] and [`reset`], synchronously on the update schedule. Taps
/// that miss every feature point never reach the session.
///
/// [`place`]: MeasureSession::place
/// [`set_mode`]: MeasureSession::set_mode
/// [`reset`]: MeasureSession::reset
#[derive(Resource, Debug, Clone)]
pub struct MeasureSession {
    mode: MeasureMode,
    markers: MarkerSet,
    current: Option<Measurement>,
}

impl Default for MeasureSession {
    fn default() -> Self {
        Self {
            mode: MeasureMode::Distance,
            markers: MarkerSet::default(),
            current: None,
        }
    }
}

impl MeasureSession {
    pub fn mode(&self) -> MeasureMode {
        self.mode
    }

    pub fn markers(&self) -> &[Vec3] {
        self.markers.points()
    }

    pub fn marker_count(&self) -> usize {
        self.markers.count()
    }

    /// The most recently placed marker. Panics on an empty set.
    pub fn last_marker(&self) -> Vec3 {
        self.markers.point(self.markers.count() - 1)
    }

    pub fn current(&self) -> Option<&Measurement> {
        self.current.as_ref()
    }

    /// Place a resolved tap point.
    ///
    /// A tap while the marker set is at the mode's capacity discards the
    /// previous measurement and starts a new one with this point. The
    /// current measurement is then recomputed in full from the marker list.
    pub fn place(&mut self, point: Vec3) -> Placement {
        let restarted = self.markers.count() == self.mode.marker_capacity();
        if restarted {
            self.markers.reset();
            self.current = None;
        }

        self.markers.add(point);
        self.current = self.compute();

        Placement {
            restarted,
            measurement: self.current,
        }
    }

    /// Switch measuring mode. Selecting the already-active mode is a no-op
    /// returning `false`; an actual switch performs a full reset. There is
    /// no transition that preserves markers across a mode change.
    pub fn set_mode(&mut self, mode: MeasureMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.reset();
        true
    }

    /// Discard all markers and the current measurement. Idempotent.
    pub fn reset(&mut self) {
        self.markers.reset();
        self.current = None;
    }

    fn compute(&self) -> Option<Measurement> {
        let markers = self.markers.points();
        match self.mode {
            MeasureMode::Distance if markers.len() == 2 => Some(compute_distance(markers)),
            MeasureMode::Area if markers.len() >= self.mode.minimum_markers() => {
                Some(compute_area(markers))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn tap(session: &mut MeasureSession, x: f32, y: f32, z: f32) -> Placement {
        session.place(Vec3::new(x, y, z))
    }

    #[test]
    fn two_taps_complete_a_distance_measurement() {
        let mut session = MeasureSession::default();

        let first = tap(&mut session, 0.0, 0.0, 0.0);
        assert!(!first.restarted);
        assert!(first.measurement.is_none());
        assert!(session.current().is_none());

        let second = tap(&mut session, 0.0, 0.0, 1.0);
        let m = second.measurement.expect("second tap completes");
        assert!((m.magnitude - 100.0).abs() < EPSILON);
        assert_eq!(m.anchor, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn tap_after_completion_restarts_with_only_the_new_point() {
        let mut session = MeasureSession::default();
        tap(&mut session, 0.0, 0.0, 0.0);
        tap(&mut session, 1.0, 0.0, 0.0);
        assert!(session.current().is_some());

        let third = tap(&mut session, 5.0, 0.0, 0.0);
        assert!(third.restarted);
        assert!(third.measurement.is_none());
        assert_eq!(session.marker_count(), 1);
        assert_eq!(session.markers()[0], Vec3::new(5.0, 0.0, 0.0));
        assert!(session.current().is_none());
    }

    #[test]
    fn area_updates_live_on_third_and_fourth_marker() {
        let mut session = MeasureSession::default();
        assert!(session.set_mode(MeasureMode::Area));

        tap(&mut session, 0.0, 0.0, 0.0);
        tap(&mut session, 1.0, 0.0, 0.0);
        assert!(session.current().is_none());

        let third = tap(&mut session, 1.0, 1.0, 0.0);
        let triangle = third.measurement.expect("triangle result");
        assert!((triangle.magnitude - 5_000.0).abs() < EPSILON);

        let fourth = tap(&mut session, 0.0, 1.0, 0.0);
        let quad = fourth.measurement.expect("quad result");
        assert!((quad.magnitude - 10_000.0).abs() < 1e-2);
        assert!((quad.anchor - Vec3::new(0.5, 0.5, 0.0)).length() < EPSILON);
    }

    #[test]
    fn area_mode_restarts_on_fifth_tap() {
        let mut session = MeasureSession::default();
        session.set_mode(MeasureMode::Area);
        for i in 0..4 {
            tap(&mut session, i as f32, 0.0, 0.0);
        }
        assert_eq!(session.marker_count(), 4);

        let fifth = tap(&mut session, 9.0, 9.0, 9.0);
        assert!(fifth.restarted);
        assert_eq!(session.marker_count(), 1);
        assert!(session.current().is_none());
    }

    #[test]
    fn marker_count_never_exceeds_mode_capacity() {
        for (mode, capacity) in [(MeasureMode::Distance, 2), (MeasureMode::Area, 4)] {
            let mut session = MeasureSession::default();
            session.set_mode(mode);
            for i in 0..25 {
                tap(&mut session, i as f32, (i % 3) as f32, 0.0);
                assert!(session.marker_count() >= 1);
                assert!(session.marker_count() <= capacity);
            }
        }
    }

    #[test]
    fn mode_switch_always_resets() {
        let mut session = MeasureSession::default();
        tap(&mut session, 0.0, 0.0, 0.0);
        tap(&mut session, 1.0, 0.0, 0.0);

        assert!(session.set_mode(MeasureMode::Area));
        assert_eq!(session.marker_count(), 0);
        assert!(session.current().is_none());
        assert_eq!(session.mode(), MeasureMode::Area);
    }

    #[test]
    fn selecting_the_active_mode_is_a_no_op() {
        let mut session = MeasureSession::default();
        tap(&mut session, 0.0, 0.0, 0.0);

        assert!(!session.set_mode(MeasureMode::Distance));
        assert_eq!(session.marker_count(), 1);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut session = MeasureSession::default();
        tap(&mut session, 0.0, 0.0, 0.0);
        session.reset();
        let after_once = session.clone();
        session.reset();
        assert_eq!(session.marker_count(), after_once.marker_count());
        assert!(session.current().is_none());
    }

    #[test]
    fn last_marker_tracks_insertion_order() {
        let mut session = MeasureSession::default();
        tap(&mut session, 1.0, 2.0, 3.0);
        assert_eq!(session.last_marker(), Vec3::new(1.0, 2.0, 3.0));
        tap(&mut session, 4.0, 5.0, 6.0);
        assert_eq!(session.last_marker(), Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    #[should_panic]
    fn out_of_range_marker_access_is_fatal() {
        let set = MarkerSet::default();
        let _ = set.point(0);
    }
}
