use bevy::light::AmbientLight;
use bevy::pbr::DistanceFog;
use bevy::pbr::FogFalloff;
use bevy::prelude::*;

use super::constants::AMBIENT_BRIGHTNESS;
use super::constants::AMBIENT_COLOR;
use super::constants::CAMERA_FAR;
use super::constants::CAMERA_FOV_DEGREES;
use super::constants::CAMERA_NEAR;
use super::constants::CLEAR_COLOR;
use super::constants::FOG_COLOR;
use super::constants::FOG_END;
use super::constants::FOG_START;
use crate::config::ShowcaseConfig;

pub struct CamerasPlugin;

impl Plugin for CamerasPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(CLEAR_COLOR))
            .add_systems(Startup, spawn_showcase_camera);
    }
}

/// The one camera the interaction loop drives.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct ShowcaseCamera;

pub fn spawn_showcase_camera(mut commands: Commands, config: Res<ShowcaseConfig>) {
    let rest = config.rest_pose();

    commands.spawn((
        ShowcaseCamera,
        Name::new("ShowcaseCamera"),
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: CAMERA_FOV_DEGREES.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_translation(rest.camera).looking_at(rest.look_at, Vec3::Y),
        DistanceFog {
            color: FOG_COLOR,
            falloff: FogFalloff::Linear {
                start: FOG_START,
                end:   FOG_END,
            },
            ..default()
        },
        // overrides the global ambient term for everything this camera renders
        AmbientLight {
            color: AMBIENT_COLOR,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
    ));
}
