use bevy::prelude::*;

use crate::measure::session::MeasureSession;
use crate::rpc::web_rpc::WebRpcInterface;
use crate::scene::feature_points::HitPoint;
use crate::scene::feedback::{FeedbackEvent, FeedbackTier};

// Input/logic: each left click places the frame's hit point, if any.
// A click after a completed measurement restarts from scratch; a click
// that resolves no feature point changes nothing and emits nothing.
pub fn measure_input_system(
    mut session: ResMut<MeasureSession>,
    mouse: Res<ButtonInput<MouseButton>>,
    hit_point: Res<HitPoint>,
    mut feedback: EventWriter<FeedbackEvent>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(point) = hit_point.0 else {
        return;
    };

    let placement = session.place(point);

    if placement.restarted {
        rpc_interface.send_notification("measurement_cleared", serde_json::json!({}));
    }

    let placed = session.last_marker();
    rpc_interface.send_notification(
        "marker_placed",
        serde_json::json!({
            "marker_count": session.marker_count(),
            "mode": session.mode().as_str(),
            "position": [placed.x, placed.y, placed.z],
        }),
    );
    feedback.write(FeedbackEvent {
        tier: FeedbackTier::Placement,
    });

    if let Some(measurement) = placement.measurement {
        info!(
            "measurement updated: {} ({} markers)",
            measurement.label(),
            session.marker_count()
        );
        rpc_interface.send_notification(
            "measurement_updated",
            serde_json::json!({
                "mode": measurement.mode.as_str(),
                "magnitude": measurement.magnitude,
                "label": measurement.label(),
                "anchor": [
                    measurement.anchor.x,
                    measurement.anchor.y,
                    measurement.anchor.z,
                ],
            }),
        );
        feedback.write(FeedbackEvent {
            tier: FeedbackTier::Completion,
        });
    }
}
