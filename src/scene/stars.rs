use bevy::prelude::*;

use super::constants::STAR_COUNT;
use super::constants::STAR_FIELD_HALF_EXTENT;
use super::constants::STAR_RADIUS;

pub struct StarsPlugin;

impl Plugin for StarsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_stars);
    }
}

#[derive(Reflect, Component, Default)]
#[reflect(Component)]
pub struct Star;

/// Uniform in an axis-aligned cube centred on the origin.
fn random_star_position(half_extent: f32) -> Vec3 {
    Vec3::new(
        rand::random_range(-half_extent..half_extent),
        rand::random_range(-half_extent..half_extent),
        rand::random_range(-half_extent..half_extent),
    )
}

/// Spawn stars with all components at once to avoid archetype changes after spawn
fn spawn_stars(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    debug!("spawning {STAR_COUNT} stars");
    let mesh = meshes.add(Sphere::new(STAR_RADIUS));
    // stars sit far beyond the fog end, so they must ignore it to stay visible
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE,
        unlit: true,
        fog_enabled: false,
        ..default()
    });

    let stars: Vec<_> = (0..STAR_COUNT)
        .map(|_| {
            (
                Star,
                Mesh3d(mesh.clone()),
                MeshMaterial3d(material.clone()),
                Transform::from_translation(random_star_position(STAR_FIELD_HALF_EXTENT)),
            )
        })
        .collect();
    commands.spawn_batch(stars);
}
