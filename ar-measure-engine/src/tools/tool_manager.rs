use bevy::prelude::*;

use crate::measure::geometry::MeasureMode;
use crate::measure::session::MeasureSession;
use crate::rpc::web_rpc::WebRpcInterface;

/// Source of a mode or reset command, for debugging and logs.
#[derive(Debug, Clone, Copy)]
pub enum CommandSource {
    Rpc,
    Keyboard,
}

/// Event fired when a measuring mode is selected via RPC or keyboard.
#[derive(Event)]
pub struct ModeSelectEvent {
    pub mode: MeasureMode,
    pub source: CommandSource,
}

/// Event requesting a full session reset.
#[derive(Event)]
pub struct ResetSessionEvent {
    pub source: CommandSource,
}

/// Apply mode selections to the session. Selecting the active mode is a
/// no-op; an actual switch always resets the session.
pub fn handle_mode_select_events(
    mut events: EventReader<ModeSelectEvent>,
    mut session: ResMut<MeasureSession>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        if !session.set_mode(event.mode) {
            continue;
        }

        info!("mode set to {} via {:?}", event.mode.as_str(), event.source);
        rpc_interface.send_notification(
            "mode_changed",
            serde_json::json!({
                "mode": event.mode.as_str(),
                "marker_capacity": event.mode.marker_capacity(),
            }),
        );
    }
}

pub fn handle_reset_events(
    mut events: EventReader<ResetSessionEvent>,
    mut session: ResMut<MeasureSession>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in events.read() {
        session.reset();
        info!("session reset via {:?}", event.source);
        rpc_interface.send_notification("session_reset", serde_json::json!({}));
    }
}

/// Keyboard shortcuts for mode and reset commands (native builds only).
#[cfg(not(target_arch = "wasm32"))]
pub fn handle_measure_keyboard_shortcuts(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mode_events: EventWriter<ModeSelectEvent>,
    mut reset_events: EventWriter<ResetSessionEvent>,
) {
    if keyboard.just_pressed(KeyCode::Digit1) {
        mode_events.write(ModeSelectEvent {
            mode: MeasureMode::Distance,
            source: CommandSource::Keyboard,
        });
    }
    if keyboard.just_pressed(KeyCode::Digit2) {
        mode_events.write(ModeSelectEvent {
            mode: MeasureMode::Area,
            source: CommandSource::Keyboard,
        });
    }
    if keyboard.just_pressed(KeyCode::Escape) || keyboard.just_pressed(KeyCode::KeyC) {
        reset_events.write(ResetSessionEvent {
            source: CommandSource::Keyboard,
        });
    }
}

/// Placeholder for WASM builds where commands arrive via RPC only.
#[cfg(target_arch = "wasm32")]
pub fn handle_measure_keyboard_shortcuts() {}
