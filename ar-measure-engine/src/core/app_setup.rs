use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy::window::PresentMode;

use crate::core::app_state::{AppState, transition_to_ready};
use crate::measure::session::MeasureSession;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::scene::camera::{SceneCamera, camera_controller};
use crate::scene::feature_points::{
    DetectedFeaturePoints, HitPoint, detect_feature_points, setup_feature_point_visuals,
    update_hit_point,
};
use crate::scene::feedback::{FeedbackEvent, forward_feedback_events};
use crate::scene::label::{hud_text_update_system, spawn_hud, update_measurement_label};
use crate::scene::markers::update_marker_render;
use crate::tools::measure_tool::measure_input_system;
use crate::tools::tool_manager::{
    ModeSelectEvent, ResetSessionEvent, handle_measure_keyboard_shortcuts,
    handle_mode_select_events, handle_reset_events,
};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(WebRpcPlugin)
        .init_state::<AppState>();

    app.init_resource::<MeasureSession>()
        .init_resource::<DetectedFeaturePoints>()
        .init_resource::<HitPoint>()
        .init_resource::<SceneCamera>()
        .add_event::<ModeSelectEvent>()
        .add_event::<ResetSessionEvent>()
        .add_event::<FeedbackEvent>();

    app.add_systems(Startup, (setup, setup_feature_point_visuals, spawn_hud))
        .add_systems(
            Update,
            (
                camera_controller,
                detect_feature_points,
                transition_to_ready,
                handle_measure_keyboard_shortcuts,
                handle_mode_select_events,
                handle_reset_events,
            ),
        )
        .add_systems(
            Update,
            // Taps consume the hit point resolved this frame.
            (update_hit_point, measure_input_system)
                .chain()
                .run_if(in_state(AppState::Ready)),
        )
        .add_systems(
            Update,
            (
                update_marker_render,
                update_measurement_label,
                hud_text_update_system,
                forward_feedback_events,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    DefaultPlugins.set(WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    })
}

fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "surface measure".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}

/// Spawn lighting and the viewport camera.
fn setup(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(
            EulerRot::ZYX,
            0.0,
            1.0,
            -std::f32::consts::FRAC_PI_4,
        )),
    ));

    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 1.2, 1.6).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
