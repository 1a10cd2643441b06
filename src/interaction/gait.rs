use std::f32::consts::FRAC_PI_2;
use std::f32::consts::TAU;

use crate::traits::UsizeExt;

pub const LEG_COUNT: usize = 4;

/// Adjacent legs are a quarter cycle apart.
pub const LEG_PHASE_OFFSET: f32 = FRAC_PI_2;

/// Vertical offset of one leg at the given gait phase.
pub fn leg_lift(phase: f32, leg_index: usize, amplitude: f32) -> f32 {
    leg_index.to_f32().mul_add(LEG_PHASE_OFFSET, phase).sin() * amplitude
}

/// Keeps accumulated angles small; every consumer is periodic in `TAU`.
pub fn wrap_angle(angle: f32) -> f32 { angle.rem_euclid(TAU) }

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LegPose {
    pub lift:       f32,
    /// Rotation of the upper segment around its local X axis.
    pub upper_tilt: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gait {
    phase: f32,
}

impl Gait {
    pub fn advance(&mut self, step: f32, amplitude: f32, tilt_ratio: f32) -> [LegPose; LEG_COUNT] {
        self.phase = wrap_angle(self.phase + step);
        std::array::from_fn(|leg_index| {
            let lift = leg_lift(self.phase, leg_index, amplitude);
            LegPose {
                lift,
                upper_tilt: lift * tilt_ratio,
            }
        })
    }
}

/// One angle shared by every wheel; wheels never spin independently.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WheelSpin {
    angle: f32,
}

impl WheelSpin {
    pub fn advance(&mut self, step: f32) -> f32 {
        self.angle = wrap_angle(self.angle + step);
        self.angle
    }
}
