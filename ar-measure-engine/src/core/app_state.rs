use bevy::prelude::*;

use crate::rpc::web_rpc::WebRpcInterface;
use crate::scene::feature_points::DetectedFeaturePoints;
use constants::scan_settings::READY_POINT_COUNT;

/// Application phases: the synthetic scan accumulates feature points until
/// measuring can be enabled. Taps during `Scanning` are always misses.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Scanning,
    Ready,
}

/// Transition to Ready once the scan is dense enough to tap against.
pub fn transition_to_ready(
    detected: Res<DetectedFeaturePoints>,
    state: Res<State<AppState>>,
    mut next_state: ResMut<NextState<AppState>>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    if *state.get() != AppState::Scanning || detected.count() < READY_POINT_COUNT {
        return;
    }

    info!(
        "→ surface scan ready with {} feature points, measuring enabled",
        detected.count()
    );
    next_state.set(AppState::Ready);
    rpc_interface.send_notification(
        "scan_ready",
        serde_json::json!({ "feature_points": detected.count() }),
    );
}
