use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::render_settings::{
    FEATURE_POINT_COLOR, FEATURE_POINT_RADIUS, PREVIEW_COLOR, PREVIEW_SPHERE_RADIUS,
};
use constants::scan_settings::{
    HIT_TEST_RADIUS, MAX_POINT_COUNT, POINTS_PER_FRAME, SURFACE_BUMP_HEIGHT, SURFACE_HALF_EXTENT,
};

/// Feature points detected on the scanned surface so far.
///
/// Stand-in for the platform's surface reconstruction: points accumulate
/// over time while scanning and are the only valid tap targets.
#[derive(Resource, Default)]
pub struct DetectedFeaturePoints {
    points: Vec<Vec3>,
}

impl DetectedFeaturePoints {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }
}

/// Cursor hit-test result for the current frame. `None` when the cursor ray
/// misses every detected feature point; taps then change no state at all.
#[derive(Resource, Default)]
pub struct HitPoint(pub Option<Vec3>);

/// Shared mesh/material handles for feature point visuals.
#[derive(Resource)]
pub struct FeaturePointVisuals {
    mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

#[derive(Component)]
pub struct FeaturePointDot;

#[derive(Component)]
pub struct HitPreview;

/// Height of the synthetic surface at (x, z). Gentle undulation so distance
/// and area measurements see genuinely non-planar taps, as real scans do.
fn surface_height(x: f32, z: f32) -> f32 {
    (x * 2.1).sin() * (z * 1.7).cos() * SURFACE_BUMP_HEIGHT
}

// Deterministic scatter so the scan is reproducible without an RNG crate.
fn hash01(index: u32, salt: u32) -> f32 {
    let mut h = index.wrapping_mul(0x9E37_79B9) ^ salt.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    (h & 0x00FF_FFFF) as f32 / 0x0100_0000 as f32
}

fn scatter_point(index: u32) -> Vec3 {
    let x = (hash01(index, 0x1234_5678) * 2.0 - 1.0) * SURFACE_HALF_EXTENT;
    let z = (hash01(index, 0x9ABC_DEF0) * 2.0 - 1.0) * SURFACE_HALF_EXTENT;
    Vec3::new(x, surface_height(x, z), z)
}

pub fn setup_feature_point_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(FeaturePointVisuals {
        mesh: meshes.add(Sphere::new(FEATURE_POINT_RADIUS)),
        material: materials.add(StandardMaterial {
            base_color: FEATURE_POINT_COLOR,
            unlit: true,
            ..default()
        }),
    });
}

/// Accumulate detected feature points each frame until the scan is full.
pub fn detect_feature_points(
    mut commands: Commands,
    mut detected: ResMut<DetectedFeaturePoints>,
    visuals: Res<FeaturePointVisuals>,
) {
    if detected.points.len() >= MAX_POINT_COUNT {
        return;
    }

    for _ in 0..POINTS_PER_FRAME {
        if detected.points.len() >= MAX_POINT_COUNT {
            break;
        }
        let point = scatter_point(detected.points.len() as u32);
        detected.points.push(point);

        commands.spawn((
            Mesh3d(visuals.mesh.clone()),
            MeshMaterial3d(visuals.material.clone()),
            Transform::from_translation(point),
            FeaturePointDot,
        ));
    }
}

/// Resolve a cursor ray against the detected feature points: the nearest
/// point in front of the camera within [`HIT_TEST_RADIUS`] of the ray, with
/// the closest candidate along the ray winning.
pub fn hit_test(ray: Ray3d, points: &[Vec3]) -> Option<Vec3> {
    let mut best: Option<(f32, Vec3)> = None;
    for &point in points {
        let to_point = point - ray.origin;
        let along = to_point.dot(*ray.direction);
        if along <= 0.0 {
            continue;
        }
        let perpendicular_sq = to_point.length_squared() - along * along;
        if perpendicular_sq > HIT_TEST_RADIUS * HIT_TEST_RADIUS {
            continue;
        }
        if best.is_none_or(|(t, _)| along < t) {
            best = Some((along, point));
        }
    }
    best.map(|(_, point)| point)
}

/// Update the per-frame hit point from the cursor position and render the
/// placement preview at the would-be marker location.
pub fn update_hit_point(
    mut commands: Commands,
    mut hit_point: ResMut<HitPoint>,
    detected: Res<DetectedFeaturePoints>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&GlobalTransform, &Camera), With<Camera3d>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing_preview: Query<Entity, With<HitPreview>>,
) {
    // Clear previews every frame, rebuild from the fresh hit below.
    for entity in existing_preview.iter() {
        commands.entity(entity).despawn();
    }

    hit_point.0 = None;

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor_pos) = window.cursor_position() else {
        return;
    };
    let Ok((camera_transform, camera)) = cameras.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor_pos) else {
        return;
    };

    let Some(hit) = hit_test(ray, detected.points()) else {
        return;
    };
    hit_point.0 = Some(hit);

    commands.spawn((
        Mesh3d(meshes.add(Sphere::new(PREVIEW_SPHERE_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PREVIEW_COLOR,
            emissive: LinearRgba::new(1.0, 1.0, 0.2, 1.0),
            unlit: true,
            ..default()
        })),
        Transform::from_translation(hit),
        HitPreview,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray(origin: Vec3, direction: Vec3) -> Ray3d {
        Ray3d::new(origin, Dir3::new(direction).expect("non-zero direction"))
    }

    #[test]
    fn hit_test_returns_the_point_nearest_along_the_ray() {
        let near = Vec3::new(0.0, 0.0, -1.0);
        let far = Vec3::new(0.01, 0.0, -3.0);
        let r = ray(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(hit_test(r, &[far, near]), Some(near));
    }

    #[test]
    fn hit_test_misses_points_outside_the_radius() {
        let offside = Vec3::new(HIT_TEST_RADIUS * 4.0, 0.0, -1.0);
        let r = ray(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(hit_test(r, &[offside]), None);
    }

    #[test]
    fn hit_test_ignores_points_behind_the_origin() {
        let behind = Vec3::new(0.0, 0.0, 2.0);
        let r = ray(Vec3::ZERO, Vec3::NEG_Z);
        assert_eq!(hit_test(r, &[behind]), None);
        assert_eq!(hit_test(r, &[]), None);
    }

    #[test]
    fn scatter_stays_inside_the_surface_patch() {
        for index in 0..256 {
            let p = scatter_point(index);
            assert!(p.x.abs() <= SURFACE_HALF_EXTENT);
            assert!(p.z.abs() <= SURFACE_HALF_EXTENT);
            assert!(p.y.abs() <= SURFACE_BUMP_HEIGHT + 1e-6);
        }
    }
}
