//! The per-frame interaction and animation loop.
//!
//! [`InteractionLoop`] owns every piece of mutable interaction state and is driven by
//! explicit calls: focus requests, pointer hover results and `tick(dt)`. It never touches
//! the ECS, so tests can step it with synthetic frame times.

use bevy::prelude::*;

use super::Anchors;
use super::CameraRig;
use super::Focus;
use super::FocusTarget;
use super::FocusTransition;
use super::Gait;
use super::HoverState;
use super::LEG_COUNT;
use super::LegPose;
use super::PickHits;
use super::WheelSpin;
use super::frame_scaled_factor;
use super::wrap_angle;
use crate::config::ShowcaseConfig;

/// Per-frame constants are tuned for this display rate.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Longer frames are clamped so a stalled window cannot fling the camera.
pub const MAX_TICK_SECS: f32 = 0.25;

/// Number of reference frames `dt` seconds stand for. Anything non-finite counts as zero.
pub fn reference_frames(dt: f32) -> f32 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_TICK_SECS) * REFERENCE_FRAME_RATE
    } else {
        0.0
    }
}

/// Everything the ECS bridge writes back to the scene after a tick.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FramePose {
    pub camera_position: Vec3,
    pub look_at:         Vec3,
    pub planet_scale:    f32,
    pub planet_angle:    f32,
    pub orbiter_angle:   f32,
    pub legs:            [LegPose; LEG_COUNT],
    pub wheel_angle:     f32,
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct InteractionLoop {
    focus:         Focus,
    hover:         HoverState,
    rig:           CameraRig,
    gait:          Gait,
    wheels:        WheelSpin,
    planet_angle:  f32,
    orbiter_angle: f32,
}

impl FromWorld for InteractionLoop {
    fn from_world(world: &mut World) -> Self {
        let config = world.get_resource::<ShowcaseConfig>().copied().unwrap_or_default();
        Self::new(&config)
    }
}

impl InteractionLoop {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            focus:         Focus::default(),
            hover:         HoverState::default(),
            rig:           CameraRig::at_rest(config.rest_pose()),
            gait:          Gait::default(),
            wheels:        WheelSpin::default(),
            planet_angle:  0.0,
            orbiter_angle: 0.0,
        }
    }

    pub const fn focus(&self) -> FocusTarget { self.focus.target() }

    pub const fn hover(&self) -> HoverState { self.hover }

    pub const fn rig(&self) -> &CameraRig { &self.rig }

    pub const fn planet_spin_enabled(&self) -> bool { self.focus.planet_spin_enabled() }

    /// A click on a focus trigger. The camera starts moving on the same frame.
    pub fn activate(
        &mut self,
        target: FocusTarget,
        anchors: &Anchors,
        config: &ShowcaseConfig,
    ) -> FocusTransition {
        let transition = self.focus.toggle(target);
        self.retarget_after_transition(anchors, config);
        transition
    }

    /// Drops any focus. `None` when nothing was focused.
    pub fn go_home(&mut self, config: &ShowcaseConfig) -> Option<FocusTransition> {
        if self.focus().is_none() {
            return None;
        }
        let transition = self.focus.clear();
        self.retarget_after_transition(&Anchors::default(), config);
        Some(transition)
    }

    /// Recomputes hover from a pointer ray's hits. Returns `false` without touching
    /// anything while a focus is active.
    pub fn pointer_hover(
        &mut self,
        hits: PickHits,
        anchors: &Anchors,
        config: &ShowcaseConfig,
    ) -> bool {
        if !self.focus().is_none() {
            return false;
        }
        self.hover = HoverState::from_hits(hits);
        let pose = config
            .pose_for(self.hover.target(), anchors)
            .unwrap_or_else(|| config.rest_pose());
        self.rig.retarget(pose);
        true
    }

    /// One frame of the loop, `dt` seconds after the previous one.
    pub fn tick(&mut self, dt: f32, anchors: &Anchors, config: &ShowcaseConfig) -> FramePose {
        let frames = reference_frames(dt);

        // The focused object may itself be moving, so follow where it is now.
        if let Some(pose) = config.pose_for(self.focus(), anchors) {
            self.rig.retarget(pose);
        }

        self.rig.step(frame_scaled_factor(config.smoothing_factor, frames));

        if self.focus.planet_spin_enabled() {
            self.planet_angle = wrap_angle(config.planet_spin_per_frame.mul_add(frames, self.planet_angle));
        }
        self.orbiter_angle = wrap_angle(config.orbiter_spin_per_frame.mul_add(frames, self.orbiter_angle));

        let legs = self.gait.advance(
            config.gait_speed_per_frame * frames,
            config.gait_amplitude,
            config.upper_leg_tilt_ratio,
        );
        let wheel_angle = self.wheels.advance(config.wheel_speed_per_frame * frames);

        let pose = self.rig.current_pose();
        FramePose {
            camera_position: pose.camera,
            look_at:         pose.look_at,
            planet_scale:    pose.scale,
            planet_angle:    self.planet_angle,
            orbiter_angle:   self.orbiter_angle,
            legs,
            wheel_angle,
        }
    }

    fn retarget_after_transition(&mut self, anchors: &Anchors, config: &ShowcaseConfig) {
        if self.focus().is_none() {
            self.hover = HoverState::Nothing;
            self.rig.retarget(config.rest_pose());
        } else if let Some(pose) = config.pose_for(self.focus(), anchors) {
            self.rig.retarget(pose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::InfoPanelCommand;
    use crate::interaction::gait::leg_lift;

    const FRAME: f32 = 1.0 / REFERENCE_FRAME_RATE;

    fn anchors() -> Anchors {
        Anchors {
            planet:        Some(Vec3::ZERO),
            legged_rover:  Some(Vec3::new(5.25, 0.0, -9.09)),
            wheeled_rover: Some(Vec3::new(8.53, -1.74, 4.92)),
        }
    }

    #[test]
    fn planet_focus_round_trip() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);
        assert!((interaction.rig().scale.current() - 1.0).abs() < f32::EPSILON);

        let opened = interaction.activate(FocusTarget::Planet, &anchors(), &config);
        assert_eq!(interaction.focus(), FocusTarget::Planet);
        assert_eq!(opened.panel_command(), InfoPanelCommand::Show(FocusTarget::Planet));
        assert!((interaction.rig().scale.target() - 1.2).abs() < f32::EPSILON);

        for _ in 0..60 {
            interaction.tick(FRAME, &anchors(), &config);
        }
        let expected = 0.2_f32.mul_add(-0.95_f32.powi(60), 1.2);
        assert!((interaction.rig().scale.current() - expected).abs() < 1e-3);

        let closed = interaction.activate(FocusTarget::Planet, &anchors(), &config);
        assert_eq!(interaction.focus(), FocusTarget::None);
        assert_eq!(closed.panel_command(), InfoPanelCommand::Hide);
        assert_eq!(interaction.rig().target_pose(), config.rest_pose());
    }

    #[test]
    fn planet_spins_unless_a_rover_is_focused() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);

        let mut previous = interaction.tick(FRAME, &anchors(), &config);
        for target in [
            FocusTarget::Planet,
            FocusTarget::LeggedRover,
            FocusTarget::WheeledRover,
        ] {
            interaction.activate(target, &anchors(), &config);
            for _ in 0..10 {
                let pose = interaction.tick(FRAME, &anchors(), &config);
                assert_eq!(
                    pose.planet_angle > previous.planet_angle,
                    target.planet_spins(),
                    "{target:?}"
                );
                assert!(pose.orbiter_angle > previous.orbiter_angle);
                previous = pose;
            }
        }
    }

    #[test]
    fn zero_dt_changes_no_current_value() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);
        interaction.activate(FocusTarget::LeggedRover, &anchors(), &config);
        let before = interaction.tick(FRAME, &anchors(), &config);

        let after = interaction.tick(0.0, &anchors(), &config);

        assert_eq!(before, after);
        assert_eq!(interaction.tick(f32::NAN, &anchors(), &config), before);
    }

    #[test]
    fn focused_camera_follows_a_moving_target() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);
        interaction.activate(FocusTarget::WheeledRover, &anchors(), &config);

        let mut moved = anchors();
        moved.wheeled_rover = Some(Vec3::new(-4.0, 3.0, 7.0));
        interaction.tick(FRAME, &moved, &config);

        let target = interaction.rig().target_pose();
        assert_eq!(target.look_at, Vec3::new(-4.0, 3.0, 7.0));
        assert_eq!(target.camera, Vec3::new(1.0, 9.0, 12.0));
    }

    #[test]
    fn missing_focus_object_keeps_previous_target() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);
        interaction.activate(FocusTarget::LeggedRover, &anchors(), &config);
        let target = interaction.rig().target_pose();

        interaction.tick(FRAME, &Anchors::default(), &config);

        assert_eq!(interaction.rig().target_pose(), target);
    }

    #[test]
    fn hover_is_frozen_while_focused() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);
        interaction.activate(FocusTarget::WheeledRover, &anchors(), &config);
        let target = interaction.rig().target_pose();

        let hits = PickHits {
            planet: true,
            ..default()
        };
        assert!(!interaction.pointer_hover(hits, &anchors(), &config));
        assert_eq!(interaction.hover(), HoverState::Nothing);
        assert_eq!(interaction.rig().target_pose(), target);
    }

    #[test]
    fn hover_retargets_and_reverts_when_nothing_is_hit() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);

        let over_rover = PickHits {
            legged_rover: true,
            ..default()
        };
        assert!(interaction.pointer_hover(over_rover, &anchors(), &config));
        assert!(interaction.hover().over_legged_rover());
        assert_eq!(
            interaction.rig().target_pose(),
            config.legged_rover_framing.pose_for(Vec3::new(5.25, 0.0, -9.09))
        );

        assert!(interaction.pointer_hover(PickHits::default(), &anchors(), &config));
        assert_eq!(interaction.hover(), HoverState::Nothing);
        assert_eq!(interaction.rig().target_pose(), config.rest_pose());
    }

    #[test]
    fn wheeled_rover_hover_uses_the_shared_framing_formula() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);
        let hits = PickHits {
            wheeled_rover: true,
            ..default()
        };

        interaction.pointer_hover(hits, &anchors(), &config);

        assert_eq!(
            interaction.rig().target_pose().camera,
            Vec3::new(8.53, -1.74, 4.92) + config.wheeled_rover_framing.offset
        );
    }

    #[test]
    fn go_home_from_any_focus_restores_rest() {
        let config = ShowcaseConfig::default();
        for target in FocusTarget::SELECTABLE {
            let mut interaction = InteractionLoop::new(&config);
            interaction.activate(target, &anchors(), &config);

            let transition = interaction.go_home(&config);

            assert_eq!(transition.map(|t| t.panel_command()), Some(InfoPanelCommand::Hide));
            assert_eq!(interaction.focus(), FocusTarget::None);
            assert!(interaction.planet_spin_enabled());
            assert_eq!(interaction.rig().target_pose(), config.rest_pose());
        }
        assert_eq!(InteractionLoop::new(&config).go_home(&config), None);
    }

    #[test]
    fn legs_follow_the_gait_formula() {
        let config = ShowcaseConfig::default();
        let mut interaction = InteractionLoop::new(&config);

        let pose = interaction.tick(FRAME, &anchors(), &config);

        let phase = config.gait_speed_per_frame * reference_frames(FRAME);
        for (index, leg) in pose.legs.iter().enumerate() {
            assert!((leg.lift - leg_lift(phase, index, config.gait_amplitude)).abs() < 1e-5);
        }
        assert!((pose.wheel_angle - config.wheel_speed_per_frame).abs() < 1e-5);
    }

    #[test]
    fn long_frames_are_clamped() {
        assert!((reference_frames(10.0) - MAX_TICK_SECS * REFERENCE_FRAME_RATE).abs() < f32::EPSILON);
        assert!(reference_frames(-1.0).abs() < f32::EPSILON);
        assert!(reference_frames(f32::INFINITY).abs() < f32::EPSILON);
    }
}
