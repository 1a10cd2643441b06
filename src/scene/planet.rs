use bevy::prelude::*;

use super::constants::EARTH_FALLBACK_COLOR;
use super::constants::MARS_FALLBACK_COLOR;
use super::constants::ORBITER_POSITION;
use super::constants::ORBITER_RADIUS;
use super::constants::PLANET_METALLIC;
use super::constants::PLANET_RADIUS;
use super::constants::PLANET_ROUGHNESS;
use super::constants::PLANET_SEGMENTS;
use crate::asset_loader::ShowcaseAssets;
use crate::asset_loader::TexturedSurface;
use crate::interaction::FocusTarget;
use crate::interaction::HoverTarget;

pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_planet_group, spawn_orbiting_body));
    }
}

/// Scaled by the zoom and spun by the planet rotation. The rovers ride on it.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct PlanetGroup;

/// The Mars sphere itself, as opposed to everything parked on it.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct PlanetBody;

/// Spins on its own axis whatever the focus is.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct OrbitingBody;

/// Position and orientation of an object standing on a sphere centred at the origin:
/// local up along the surface normal, local +Z heading east.
pub fn place_on_surface(latitude: f32, longitude: f32, height: f32, radius: f32) -> Transform {
    let polar = (90.0 - latitude).to_radians();
    let azimuth = (longitude + 180.0).to_radians();
    let distance = radius + height;

    let position = Vec3::new(
        distance * polar.sin() * azimuth.cos(),
        distance * polar.cos(),
        distance * polar.sin() * azimuth.sin(),
    );
    let normal = position.normalize_or(Vec3::Y);
    let east = Vec3::new(-azimuth.sin(), 0.0, azimuth.cos());

    // `looking_to` aims -Z, so aim it west to leave +Z pointing east
    Transform::from_translation(position).looking_to(-east, normal)
}

fn surface_material(texture: &Handle<Image>) -> StandardMaterial {
    StandardMaterial {
        base_color_texture: Some(texture.clone()),
        perceptual_roughness: PLANET_ROUGHNESS,
        metallic: PLANET_METALLIC,
        ..default()
    }
}

pub fn spawn_planet_group(
    mut commands: Commands,
    assets: Res<ShowcaseAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let mesh = meshes.add(
        Sphere::new(PLANET_RADIUS)
            .mesh()
            .uv(PLANET_SEGMENTS, PLANET_SEGMENTS),
    );
    let material = materials.add(surface_material(&assets.mars_texture));

    commands.spawn((
        PlanetGroup,
        Name::new("PlanetGroup"),
        Transform::default(),
        Visibility::default(),
        children![(
            PlanetBody,
            Name::new("Mars"),
            HoverTarget {
                target:               FocusTarget::Planet,
                includes_descendants: false,
            },
            TexturedSurface {
                texture:  assets.mars_texture.clone(),
                fallback: MARS_FALLBACK_COLOR,
            },
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::default(),
        )],
    ));
}

fn spawn_orbiting_body(
    mut commands: Commands,
    assets: Res<ShowcaseAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        OrbitingBody,
        Name::new("Earth"),
        TexturedSurface {
            texture:  assets.earth_texture.clone(),
            fallback: EARTH_FALLBACK_COLOR,
        },
        Mesh3d(meshes.add(Sphere::new(ORBITER_RADIUS))),
        MeshMaterial3d(materials.add(surface_material(&assets.earth_texture))),
        Transform::from_translation(ORBITER_POSITION),
    ));
}
