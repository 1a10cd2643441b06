use std::f32::consts::FRAC_PI_2;

use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

use super::Anchors;
use super::FocusRequest;
use super::FramePose;
use super::InfoPanelCommand;
use super::InteractionLoop;
use crate::camera::ShowcaseCamera;
use crate::config::ShowcaseConfig;
use crate::scene::Leg;
use crate::scene::LegUpper;
use crate::scene::LeggedRover;
use crate::scene::OrbitingBody;
use crate::scene::PlanetBody;
use crate::scene::PlanetGroup;
use crate::scene::Wheel;
use crate::scene::WheeledRover;

/// Live world positions of the focusable objects. Whatever is missing reads as `None`.
#[derive(SystemParam)]
pub struct AnchorQuery<'w, 's> {
    planet:        Query<'w, 's, &'static GlobalTransform, With<PlanetBody>>,
    legged_rover:  Query<'w, 's, &'static GlobalTransform, With<LeggedRover>>,
    wheeled_rover: Query<'w, 's, &'static GlobalTransform, With<WheeledRover>>,
}

impl AnchorQuery<'_, '_> {
    pub fn anchors(&self) -> Anchors {
        Anchors {
            planet:        self.planet.single().ok().map(GlobalTransform::translation),
            legged_rover:  self.legged_rover.single().ok().map(GlobalTransform::translation),
            wheeled_rover: self.wheeled_rover.single().ok().map(GlobalTransform::translation),
        }
    }
}

pub fn apply_focus_requests(
    mut requests: MessageReader<FocusRequest>,
    mut panel: MessageWriter<InfoPanelCommand>,
    mut interaction: ResMut<InteractionLoop>,
    anchors: AnchorQuery,
    config: Res<ShowcaseConfig>,
) {
    let anchors = anchors.anchors();
    for request in requests.read() {
        let transition = match *request {
            FocusRequest::Toggle(target) => Some(interaction.activate(target, &anchors, &config)),
            FocusRequest::Home => interaction.go_home(&config),
        };
        let Some(transition) = transition else {
            continue;
        };

        info!(
            "focus {} -> {} (planet spin {})",
            transition.from.label(),
            transition.to.label(),
            if transition.planet_spin { "on" } else { "off" }
        );
        panel.write(transition.panel_command());
    }
}

pub fn tick_interaction_loop(
    time: Res<Time>,
    anchors: AnchorQuery,
    config: Res<ShowcaseConfig>,
    mut interaction: ResMut<InteractionLoop>,
    mut pose: ResMut<FramePose>,
) {
    *pose = interaction.tick(time.delta_secs(), &anchors.anchors(), &config);
}

pub fn apply_camera_pose(
    pose: Res<FramePose>,
    mut camera: Query<&mut Transform, With<ShowcaseCamera>>,
) {
    for mut transform in &mut camera {
        transform.translation = pose.camera_position;
        transform.look_at(pose.look_at, Vec3::Y);
    }
}

pub fn apply_planet_pose(pose: Res<FramePose>, mut planet: Query<&mut Transform, With<PlanetGroup>>) {
    for mut transform in &mut planet {
        transform.scale = Vec3::splat(pose.planet_scale);
        transform.rotation = Quat::from_rotation_y(pose.planet_angle);
    }
}

pub fn spin_orbiting_body(
    pose: Res<FramePose>,
    mut orbiters: Query<&mut Transform, With<OrbitingBody>>,
) {
    for mut transform in &mut orbiters {
        transform.rotation = Quat::from_rotation_y(pose.orbiter_angle);
    }
}

/// Legs (or upper segments) whose index has no pose are left alone.
pub fn animate_legs(
    pose: Res<FramePose>,
    mut legs: Query<(&Leg, &mut Transform), Without<LegUpper>>,
    mut uppers: Query<(&LegUpper, &mut Transform), Without<Leg>>,
) {
    for (leg, mut transform) in &mut legs {
        if let Some(leg_pose) = pose.legs.get(leg.index) {
            transform.translation.y = leg.rest_height + leg_pose.lift;
        }
    }
    for (upper, mut transform) in &mut uppers {
        if let Some(leg_pose) = pose.legs.get(upper.leg_index) {
            transform.rotation = Quat::from_rotation_x(leg_pose.upper_tilt);
        }
    }
}

/// Wheels keep their quarter turn about X and spin about their own axle.
pub fn spin_wheels(pose: Res<FramePose>, mut wheels: Query<&mut Transform, With<Wheel>>) {
    let rotation = Quat::from_euler(EulerRot::XYZ, FRAC_PI_2, pose.wheel_angle, 0.0);
    for mut transform in &mut wheels {
        transform.rotation = rotation;
    }
}
