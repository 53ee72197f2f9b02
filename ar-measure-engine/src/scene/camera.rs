use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::math::EulerRot;
use bevy::prelude::*;

/// Free-look viewport camera: right-drag to look, scroll to dolly, WASD/QE
/// to move. Pose targets are smoothed onto the camera transform each frame.
#[derive(Resource)]
pub struct SceneCamera {
    pub focus_point: Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::new(0.0, 1.2, 1.6),
            yaw: 0.0,
            pitch: -0.6,
        }
    }
}

impl SceneCamera {
    fn view_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

pub fn camera_controller(
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mut scene_camera: ResMut<SceneCamera>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
) {
    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    // Right drag to look around.
    if mouse_button.pressed(MouseButton::Right) && mouse_delta != Vec2::ZERO {
        let yaw_sens = 0.0035;
        let pitch_sens = 0.0030;
        scene_camera.yaw += -mouse_delta.x * yaw_sens;
        scene_camera.pitch += -mouse_delta.y * pitch_sens;
        scene_camera.pitch = scene_camera.pitch.clamp(-1.55, 1.55);
    }

    // Scroll dollies along the view direction.
    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y * 1.0,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }
    if scroll_accum.abs() > f32::EPSILON {
        let forward = (scene_camera.view_rotation() * Vec3::Z).normalize();
        scene_camera.focus_point -= forward * (scroll_accum * 0.25);
    }

    // Keyboard movement, shift = faster, ctrl = slower.
    let mut move_input = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        move_input.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        move_input.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        move_input.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        move_input.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        move_input.y += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyQ) {
        move_input.y -= 1.0;
    }

    if move_input != Vec3::ZERO {
        let view_rot = scene_camera.view_rotation();
        let forward = (view_rot * Vec3::Z).normalize();
        let right = (view_rot * Vec3::X).normalize();
        let up = Vec3::Y;

        let mut speed = 1.2;
        if keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]) {
            speed *= 3.5;
        }
        if keyboard.any_pressed([KeyCode::ControlLeft, KeyCode::ControlRight]) {
            speed *= 0.25;
        }

        let world_delta = right * move_input.x + up * move_input.y + forward * move_input.z;
        scene_camera.focus_point += world_delta.normalize() * speed * time.delta_secs();
    }

    let target_rot = scene_camera.view_rotation();
    let target_pos = scene_camera.focus_point;

    let lerp_speed = 12.0 * time.delta_secs();
    camera_transform.translation = camera_transform
        .translation
        .lerp(target_pos, lerp_speed.min(1.0));
    camera_transform.rotation = camera_transform
        .rotation
        .slerp(target_rot, lerp_speed.min(1.0));
}
