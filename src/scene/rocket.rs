use std::f32::consts::TAU;

use bevy::prelude::*;

use super::constants::ROCKET_BODY_COLOR;
use super::constants::ROCKET_FIN_COLOR;
use super::constants::ROCKET_FIN_COUNT;
use super::constants::ROCKET_NOSE_COLOR;
use super::constants::ROCKET_POSITION;
use super::constants::ROCKET_TILT;
use crate::traits::UsizeExt;

pub struct RocketPlugin;

impl Plugin for RocketPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_rocket);
    }
}

/// Scenery only: never picked, never animated.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct Rocket;

fn fin_transform(index: usize) -> Transform {
    let angle = index.to_f32() * TAU / ROCKET_FIN_COUNT.to_f32();
    Transform::from_xyz(angle.cos(), -4.0, angle.sin()).with_rotation(Quat::from_rotation_y(angle))
}

fn spawn_rocket(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let fin_mesh = meshes.add(Cuboid::new(0.2, 3.0, 2.0));
    let fin_material = materials.add(StandardMaterial {
        base_color: ROCKET_FIN_COLOR,
        perceptual_roughness: 0.4,
        metallic: 0.6,
        ..default()
    });

    commands
        .spawn((
            Rocket,
            Name::new("Rocket"),
            Transform::from_translation(ROCKET_POSITION).with_rotation(Quat::from_rotation_x(ROCKET_TILT)),
            Visibility::default(),
        ))
        .with_children(|rocket| {
            rocket.spawn((
                Mesh3d(meshes.add(ConicalFrustum {
                    radius_top:    0.8,
                    radius_bottom: 1.2,
                    height:        10.0,
                })),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: ROCKET_BODY_COLOR,
                    perceptual_roughness: 0.3,
                    metallic: 0.7,
                    ..default()
                })),
                Transform::default(),
            ));
            rocket.spawn((
                Mesh3d(meshes.add(Cone {
                    radius: 0.8,
                    height: 3.0,
                })),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: ROCKET_NOSE_COLOR,
                    perceptual_roughness: 0.4,
                    metallic: 0.6,
                    ..default()
                })),
                Transform::from_xyz(0.0, 6.5, 0.0),
            ));
            for index in 0..ROCKET_FIN_COUNT {
                rocket.spawn((
                    Mesh3d(fin_mesh.clone()),
                    MeshMaterial3d(fin_material.clone()),
                    fin_transform(index),
                ));
            }
        });
}
