use std::f32::consts::FRAC_PI_2;
use std::f32::consts::TAU;

use bevy::prelude::*;

use super::constants::ANTENNA_COLOR;
use super::constants::EYE_COLOR;
use super::constants::LEG_COLOR;
use super::constants::LEG_OFFSETS;
use super::constants::LEG_REST_HEIGHT;
use super::constants::LEGGED_ROVER_COLOR;
use super::constants::LEGGED_ROVER_HEIGHT;
use super::constants::LEGGED_ROVER_LATITUDE;
use super::constants::LEGGED_ROVER_LONGITUDE;
use super::constants::PLANET_RADIUS;
use super::constants::SOLAR_PANEL_COLOR;
use super::constants::SPOKE_COLOR;
use super::constants::SPOKES_PER_WHEEL;
use super::constants::WHEEL_COLOR;
use super::constants::WHEEL_HEIGHT;
use super::constants::WHEEL_OFFSETS;
use super::constants::WHEELED_ROVER_COLOR;
use super::constants::WHEELED_ROVER_HEIGHT;
use super::constants::WHEELED_ROVER_LATITUDE;
use super::constants::WHEELED_ROVER_LONGITUDE;
use super::planet::PlanetGroup;
use super::planet::place_on_surface;
use super::planet::spawn_planet_group;
use crate::interaction::FocusTarget;
use crate::interaction::HoverTarget;
use crate::traits::UsizeExt;

pub struct RoversPlugin;

impl Plugin for RoversPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (spawn_legged_rover, spawn_wheeled_rover).after(spawn_planet_group),
        );
    }
}

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct LeggedRover;

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct WheeledRover;

/// One leg group of the legged rover. `index` picks its slot in the gait.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct Leg {
    pub index:       usize,
    pub rest_height: f32,
}

/// Upper segment of a leg; tilts with the lift of leg `leg_index`.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct LegUpper {
    pub leg_index: usize,
}

#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct Wheel;

fn metal(color: Color, roughness: f32, metallic: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: color,
        perceptual_roughness: roughness,
        metallic,
        ..default()
    }
}

fn spawn_legged_rover(
    mut commands: Commands,
    group: Single<Entity, With<PlanetGroup>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let body_material = materials.add(metal(LEGGED_ROVER_COLOR, 0.3, 0.7));
    let leg_material = materials.add(metal(LEG_COLOR, 0.3, 0.7));
    let eye_material = materials.add(StandardMaterial {
        base_color: EYE_COLOR,
        emissive: LinearRgba::from(EYE_COLOR) * 0.5,
        ..default()
    });

    let eye = meshes.add(Sphere::new(0.15));
    let upper = meshes.add(Cylinder::new(0.15, 1.0));
    let lower = meshes.add(Cylinder::new(0.12, 1.0));
    let paw = meshes.add(Sphere::new(0.2));

    commands
        .spawn((
            LeggedRover,
            Name::new("Quadruped"),
            HoverTarget {
                target:               FocusTarget::LeggedRover,
                includes_descendants: true,
            },
            place_on_surface(
                LEGGED_ROVER_LATITUDE,
                LEGGED_ROVER_LONGITUDE,
                LEGGED_ROVER_HEIGHT,
                PLANET_RADIUS,
            ),
            Visibility::default(),
            ChildOf(*group),
        ))
        .with_children(|rover| {
            rover.spawn((
                Mesh3d(meshes.add(Cuboid::new(3.0, 1.0, 2.0))),
                MeshMaterial3d(body_material.clone()),
                Transform::from_xyz(0.0, 0.4, 0.0),
            ));
            rover.spawn((
                Mesh3d(meshes.add(Cuboid::new(0.5, 0.4, 0.4))),
                MeshMaterial3d(body_material),
                Transform::from_xyz(0.8, 0.6, 0.0),
            ));
            for side in [0.3, -0.3] {
                rover.spawn((
                    Mesh3d(eye.clone()),
                    MeshMaterial3d(eye_material.clone()),
                    Transform::from_xyz(2.2, 0.3, side),
                ));
            }

            for (index, offset) in LEG_OFFSETS.into_iter().enumerate() {
                rover
                    .spawn((
                        Leg {
                            index,
                            rest_height: LEG_REST_HEIGHT,
                        },
                        Transform::from_xyz(offset.x, LEG_REST_HEIGHT, offset.y),
                        Visibility::default(),
                    ))
                    .with_children(|leg| {
                        leg.spawn((
                            LegUpper { leg_index: index },
                            Mesh3d(upper.clone()),
                            MeshMaterial3d(leg_material.clone()),
                            Transform::default(),
                        ));
                        leg.spawn((
                            Mesh3d(lower.clone()),
                            MeshMaterial3d(leg_material.clone()),
                            Transform::from_xyz(0.0, -1.0, 0.0),
                        ));
                        leg.spawn((
                            Mesh3d(paw.clone()),
                            MeshMaterial3d(leg_material.clone()),
                            Transform::from_xyz(0.0, -1.8, 0.0),
                        ));
                    });
            }
        });
}

/// Spokes fan out around the axle, which runs along local Y before the wheel is turned.
fn spoke_transform(index: usize) -> Transform {
    let angle = index.to_f32() / SPOKES_PER_WHEEL.to_f32() * TAU;
    Transform::from_xyz(angle.sin() * 0.2, 0.0, angle.cos() * 0.02)
        .with_rotation(Quat::from_rotation_y(angle))
}

fn spawn_wheeled_rover(
    mut commands: Commands,
    group: Single<Entity, With<PlanetGroup>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let antenna_material = materials.add(metal(ANTENNA_COLOR, 0.3, 0.7));
    let wheel_material = materials.add(metal(WHEEL_COLOR, 0.9, 0.1));
    let spoke_material = materials.add(metal(SPOKE_COLOR, 0.5, 0.7));
    let wheel = meshes.add(Cylinder::new(0.4, 0.3));
    let spoke = meshes.add(Cuboid::new(1.0, 0.25, 0.05));

    commands
        .spawn((
            WheeledRover,
            Name::new("Speedy"),
            HoverTarget {
                target:               FocusTarget::WheeledRover,
                includes_descendants: true,
            },
            place_on_surface(
                WHEELED_ROVER_LATITUDE,
                WHEELED_ROVER_LONGITUDE,
                WHEELED_ROVER_HEIGHT,
                PLANET_RADIUS,
            ),
            Visibility::default(),
            ChildOf(*group),
        ))
        .with_children(|rover| {
            rover.spawn((
                Mesh3d(meshes.add(Cuboid::new(2.5, 1.0, 1.5))),
                MeshMaterial3d(materials.add(metal(WHEELED_ROVER_COLOR, 0.5, 0.5))),
                Transform::from_xyz(0.0, 0.8, 0.0),
            ));
            rover.spawn((
                Mesh3d(meshes.add(Cuboid::new(3.0, 0.1, 2.5))),
                MeshMaterial3d(materials.add(metal(SOLAR_PANEL_COLOR, 0.2, 0.8))),
                Transform::from_xyz(0.0, 1.5, 0.0),
            ));

            for offset in WHEEL_OFFSETS {
                rover
                    .spawn((
                        Wheel,
                        Mesh3d(wheel.clone()),
                        MeshMaterial3d(wheel_material.clone()),
                        Transform::from_xyz(offset.x, WHEEL_HEIGHT, offset.y)
                            .with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                    ))
                    .with_children(|wheel| {
                        for index in 0..SPOKES_PER_WHEEL {
                            wheel.spawn((
                                Mesh3d(spoke.clone()),
                                MeshMaterial3d(spoke_material.clone()),
                                spoke_transform(index),
                            ));
                        }
                    });
            }

            rover.spawn((
                Mesh3d(meshes.add(Cylinder::new(0.05, 1.5))),
                MeshMaterial3d(antenna_material.clone()),
                Transform::from_xyz(0.0, 2.0, 0.0),
            ));
            rover.spawn((
                Mesh3d(meshes.add(Sphere::new(0.15))),
                MeshMaterial3d(antenna_material),
                Transform::from_xyz(0.0, 2.7, 0.0),
            ));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spokes_are_evenly_spread() {
        for index in 0..SPOKES_PER_WHEEL {
            let this = spoke_transform(index).rotation;
            let next = spoke_transform((index + 1) % SPOKES_PER_WHEEL).rotation;
            assert!((this.angle_between(next) - TAU / 5.0).abs() < 1e-4);
        }
    }

    #[test]
    fn every_gait_slot_has_a_leg() {
        assert_eq!(LEG_OFFSETS.len(), crate::interaction::LEG_COUNT);
    }
}
