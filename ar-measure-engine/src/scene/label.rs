use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use constants::render_settings::{HUD_COLOR, HUD_FONT_SIZE, LABEL_COLOR, LABEL_FONT_SIZE};

use crate::core::app_state::AppState;
use crate::measure::session::MeasureSession;
use crate::scene::feature_points::DetectedFeaturePoints;

/// The single floating measurement label. At most one exists; it is
/// replaced wholesale whenever the measurement changes and despawned when
/// no measurement is current.
#[derive(Component)]
pub struct MeasurementLabel;

#[derive(Component)]
pub struct HudText;

pub fn spawn_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("scanning"),
                TextFont {
                    font_size: HUD_FONT_SIZE,
                    ..default()
                },
                TextColor(HUD_COLOR),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                HudText,
            ));
        });
}

/// Re-project the floating label from its 3D anchor every frame.
pub fn update_measurement_label(
    mut commands: Commands,
    session: Res<MeasureSession>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    existing_label: Query<Entity, With<MeasurementLabel>>,
) {
    for entity in existing_label.iter() {
        commands.entity(entity).despawn();
    }

    let Some(measurement) = session.current() else {
        return;
    };
    let Ok((camera_transform, camera)) = cameras.single() else {
        return;
    };
    // Anchor behind the camera or outside the viewport: no label this frame.
    let Ok(screen_pos) = camera.world_to_viewport(camera_transform, measurement.anchor) else {
        return;
    };

    commands.spawn((
        Text::new(measurement.label()),
        TextFont {
            font_size: LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(LABEL_COLOR),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(screen_pos.x),
            top: Val::Px(screen_pos.y),
            ..default()
        },
        MeasurementLabel,
    ));
}

/// HUD line with mode, marker count, scan progress and FPS.
pub fn hud_text_update_system(
    session: Res<MeasureSession>,
    detected: Res<DetectedFeaturePoints>,
    state: Res<State<AppState>>,
    diagnostics: Res<DiagnosticsStore>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);

    for mut text in &mut query {
        text.0 = match state.get() {
            AppState::Scanning => {
                format!("scanning: {} points | FPS: {fps:.1}", detected.count())
            }
            AppState::Ready => format!(
                "{} | markers: {}/{} | FPS: {fps:.1}",
                session.mode().as_str(),
                session.marker_count(),
                session.mode().marker_capacity(),
            ),
        };
    }
}
