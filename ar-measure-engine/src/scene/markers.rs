use bevy::prelude::*;
use constants::render_settings::{
    MARKER_COLOR, MARKER_RADIUS, MIN_SEGMENT_LENGTH, POLYLINE_COLOR, POLYLINE_WIDTH,
};

use crate::measure::session::MeasureSession;

#[derive(Component)]
pub struct MarkerDot;

#[derive(Component)]
pub struct PolylineSegment;

// Renderer: clears marker visuals each frame and rebuilds from session
// state, so reset and mode switch clear the scene without bookkeeping.
pub fn update_marker_render(
    mut commands: Commands,
    session: Res<MeasureSession>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing_dots: Query<Entity, With<MarkerDot>>,
    existing_segments: Query<Entity, With<PolylineSegment>>,
) {
    for entity in existing_dots.iter().chain(existing_segments.iter()) {
        commands.entity(entity).despawn();
    }

    let markers = session.markers();
    if markers.is_empty() {
        return;
    }

    for &marker in markers {
        commands.spawn((
            Mesh3d(meshes.add(Sphere::new(MARKER_RADIUS))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: MARKER_COLOR,
                emissive: LinearRgba::new(1.0, 1.0, 1.0, 1.0),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(marker),
            MarkerDot,
        ));
    }

    // Open polyline through the markers in insertion order. The closing
    // edge is never drawn; the area fill is left to the fan computation.
    for pair in markers.windows(2) {
        let (start, end) = (pair[0], pair[1]);
        let direction = end - start;
        let length = direction.length();
        if length < MIN_SEGMENT_LENGTH {
            continue;
        }

        let midpoint = (start + end) * 0.5;
        let rotation = Quat::from_rotation_arc(Vec3::X, direction / length);
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(length, POLYLINE_WIDTH, POLYLINE_WIDTH))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: POLYLINE_COLOR,
                emissive: LinearRgba::new(1.0, 0.5, 0.0, 1.0),
                unlit: true,
                ..default()
            })),
            Transform::from_translation(midpoint).with_rotation(rotation),
            PolylineSegment,
        ));
    }
}
