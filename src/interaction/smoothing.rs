//! Exponential ease toward a target: `current += (target - current) * k` every frame.

use std::ops::Add;
use std::ops::Mul;
use std::ops::Sub;

use bevy::prelude::*;

use super::Pose;

/// Anything that can be eased componentwise (`f32`, `Vec3`, ...).
pub trait Blend: Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self> {}

impl<T> Blend for T where T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T> {}

/// A value that approaches its target asymptotically and never snaps to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed<T> {
    current: T,
    target:  T,
}

impl<T: Blend> Smoothed<T> {
    /// Starts already settled; the only time `current` is assigned directly.
    pub const fn settled(value: T) -> Self {
        Self {
            current: value,
            target:  value,
        }
    }

    pub const fn current(&self) -> T { self.current }

    pub const fn target(&self) -> T { self.target }

    pub fn set_target(&mut self, target: T) { self.target = target; }

    pub fn step(&mut self, factor: f32) {
        self.current = self.current + (self.target - self.current) * factor;
    }
}

/// Converts a per-reference-frame factor into the factor for `frames` reference frames.
/// Exactly `factor` at one frame, zero at zero frames, and always below one.
pub fn frame_scaled_factor(factor: f32, frames: f32) -> f32 {
    1.0 - (1.0 - factor).powf(frames)
}

/// Camera position, look-at point and planet zoom scale, eased together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    pub position: Smoothed<Vec3>,
    pub look_at:  Smoothed<Vec3>,
    pub scale:    Smoothed<f32>,
}

impl CameraRig {
    pub const fn at_rest(pose: Pose) -> Self {
        Self {
            position: Smoothed::settled(pose.camera),
            look_at:  Smoothed::settled(pose.look_at),
            scale:    Smoothed::settled(pose.scale),
        }
    }

    pub fn retarget(&mut self, pose: Pose) {
        self.position.set_target(pose.camera);
        self.look_at.set_target(pose.look_at);
        self.scale.set_target(pose.scale);
    }

    pub fn step(&mut self, factor: f32) {
        self.position.step(factor);
        self.look_at.step(factor);
        self.scale.step(factor);
    }

    pub const fn target_pose(&self) -> Pose {
        Pose {
            camera:  self.position.target(),
            look_at: self.look_at.target(),
            scale:   self.scale.target(),
        }
    }

    pub const fn current_pose(&self) -> Pose {
        Pose {
            camera:  self.position.current(),
            look_at: self.look_at.current(),
            scale:   self.scale.current(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const K: f32 = 0.05;

    #[test]
    fn distance_to_target_strictly_shrinks_without_overshoot() {
        let mut value = Smoothed::settled(Vec3::new(0.0, 50.0, 50.0));
        let target = Vec3::new(5.0, 16.0, 15.0);
        value.set_target(target);

        let mut previous = value.current().distance(target);
        for tick in 0..120 {
            let before = value.current();
            value.step(K);
            let distance = value.current().distance(target);

            assert!(distance < previous, "tick {tick}: {distance} >= {previous}");
            // Every axis stays on the same side of the target.
            let was = (before - target).signum();
            let now = (value.current() - target).signum();
            assert_eq!(was, now, "tick {tick} crossed the target");
            previous = distance;
        }
    }

    #[test]
    fn scalar_ease_matches_closed_form() {
        let mut scale = Smoothed::settled(1.0_f32);
        scale.set_target(1.2);

        for _ in 0..60 {
            scale.step(K);
        }

        let expected = 0.2_f32.mul_add(-(1.0 - K).powi(60), 1.2);
        assert!((scale.current() - expected).abs() < 1e-4);
        assert!((scale.current() - 1.2).abs() < 0.01);
    }

    #[test]
    fn frame_scaled_factor_matches_per_frame_factor() {
        assert!((frame_scaled_factor(K, 1.0) - K).abs() < 1e-6);
        assert!(frame_scaled_factor(K, 0.0).abs() < f32::EPSILON);

        // Two half-frames ease exactly as far as one full frame.
        let half = frame_scaled_factor(K, 0.5);
        let mut split = Smoothed::settled(0.0_f32);
        split.set_target(10.0);
        split.step(half);
        split.step(half);

        let mut whole = Smoothed::settled(0.0_f32);
        whole.set_target(10.0);
        whole.step(K);

        assert!((split.current() - whole.current()).abs() < 1e-4);
    }

    #[test]
    fn rig_retarget_leaves_current_pose_alone() {
        let rest = Pose {
            camera:  Vec3::new(0.0, 50.0, 50.0),
            look_at: Vec3::ZERO,
            scale:   1.0,
        };
        let focused = Pose {
            camera:  Vec3::new(0.0, 20.0, 20.0),
            look_at: Vec3::ZERO,
            scale:   1.2,
        };
        let mut rig = CameraRig::at_rest(rest);

        rig.retarget(focused);

        assert_eq!(rig.current_pose(), rest);
        assert_eq!(rig.target_pose(), focused);
    }
}
