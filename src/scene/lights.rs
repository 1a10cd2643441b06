use bevy::prelude::*;

use super::constants::FILL_LIGHT_COLOR;
use super::constants::FILL_LIGHT_ILLUMINANCE;
use super::constants::FILL_LIGHT_POSITION;
use super::constants::KEY_LIGHT_COLOR;
use super::constants::KEY_LIGHT_ILLUMINANCE;
use super::constants::KEY_LIGHT_POSITION;

pub struct LightsPlugin;

impl Plugin for LightsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_lights);
    }
}

/// Warm key light on the planet and a cool fill from the opposite side. The ambient
/// term lives on the camera.
fn spawn_lights(mut commands: Commands) {
    commands.spawn((
        Name::new("KeyLight"),
        DirectionalLight {
            color: KEY_LIGHT_COLOR,
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
    commands.spawn((
        Name::new("FillLight"),
        DirectionalLight {
            color: FILL_LIGHT_COLOR,
            illuminance: FILL_LIGHT_ILLUMINANCE,
            ..default()
        },
        Transform::from_translation(FILL_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
