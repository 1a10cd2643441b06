mod file;

use bevy::prelude::*;
use bevy_inspector_egui::inspector_options::std_options::NumberDisplay;
use bevy_inspector_egui::prelude::*;
use bevy_inspector_egui::quick::ResourceInspectorPlugin;
use serde::Deserialize;
use serde::Serialize;

pub use file::ConfigError;

use crate::interaction::Anchors;
use crate::interaction::FocusTarget;
use crate::interaction::Framing;
use crate::interaction::Pose;

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(file::load_or_default())
            .init_resource::<InspectorVisible>()
            .register_type::<ShowcaseConfig>()
            .add_plugins(ResourceInspectorPlugin::<ShowcaseConfig>::default().run_if(inspector_visible));
    }
}

/// Whether the live config inspector window is open. Flipped by the inspector shortcut.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InspectorVisible(pub bool);

fn inspector_visible(visible: Res<InspectorVisible>) -> bool { visible.0 }

/// Every tunable of the showcase. Per-frame quantities are expressed per reference frame
/// at 60 Hz and scaled by the real frame time.
#[derive(Resource, Reflect, InspectorOptions, Serialize, Deserialize, Debug, PartialEq, Clone, Copy)]
#[reflect(Resource, InspectorOptions)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Fraction of the remaining distance covered each reference frame.
    #[inspector(min = 0.001, max = 0.999, display = NumberDisplay::Slider)]
    pub smoothing_factor:        f32,
    pub rest_camera_position:    Vec3,
    pub rest_look_at:            Vec3,
    #[inspector(min = 0.1, max = 3.0, display = NumberDisplay::Slider)]
    pub rest_scale:              f32,
    pub planet_framing:          Framing,
    pub legged_rover_framing:    Framing,
    pub wheeled_rover_framing:   Framing,
    #[inspector(min = 0.0, max = 0.05, display = NumberDisplay::Slider)]
    pub planet_spin_per_frame:   f32,
    #[inspector(min = 0.0, max = 0.05, display = NumberDisplay::Slider)]
    pub orbiter_spin_per_frame:  f32,
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub gait_speed_per_frame:    f32,
    #[inspector(min = 0.0, max = 1.0, display = NumberDisplay::Slider)]
    pub gait_amplitude:          f32,
    #[inspector(min = 0.0, max = 2.0, display = NumberDisplay::Slider)]
    pub upper_leg_tilt_ratio:    f32,
    #[inspector(min = 0.0, max = 0.5, display = NumberDisplay::Slider)]
    pub wheel_speed_per_frame:   f32,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let rover_framing = Framing {
            offset:     Vec3::new(5.0, 6.0, 5.0),
            zoom_scale: 1.2,
        };
        Self {
            smoothing_factor:       0.05,
            rest_camera_position:   Vec3::new(0.0, 50.0, 50.0),
            rest_look_at:           Vec3::ZERO,
            rest_scale:             1.0,
            planet_framing:         Framing {
                offset:     Vec3::new(0.0, 20.0, 20.0),
                zoom_scale: 1.2,
            },
            legged_rover_framing:   rover_framing,
            wheeled_rover_framing:  rover_framing,
            planet_spin_per_frame:  0.001,
            orbiter_spin_per_frame: 0.005,
            gait_speed_per_frame:   0.1,
            gait_amplitude:         0.3,
            upper_leg_tilt_ratio:   0.5,
            wheel_speed_per_frame:  0.15,
        }
    }
}

impl ShowcaseConfig {
    pub const fn framing(&self, target: FocusTarget) -> Option<Framing> {
        match target {
            FocusTarget::None => None,
            FocusTarget::Planet => Some(self.planet_framing),
            FocusTarget::LeggedRover => Some(self.legged_rover_framing),
            FocusTarget::WheeledRover => Some(self.wheeled_rover_framing),
        }
    }

    /// Camera pose that frames `target` at its live position. `None` when the target is
    /// [`FocusTarget::None`] or its object is missing from the scene.
    pub fn pose_for(&self, target: FocusTarget, anchors: &Anchors) -> Option<Pose> {
        let framing = self.framing(target)?;
        anchors.get(target).map(|anchor| framing.pose_for(anchor))
    }

    pub const fn rest_pose(&self) -> Pose {
        Pose {
            camera:  self.rest_camera_position,
            look_at: self.rest_look_at,
            scale:   self.rest_scale,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor < 1.0) {
            return Err(ConfigError::Invalid {
                field:  "smoothing_factor",
                reason: format!("must be inside (0, 1), got {}", self.smoothing_factor),
            });
        }

        let scales = [
            ("rest_scale", self.rest_scale),
            ("planet_framing.zoom_scale", self.planet_framing.zoom_scale),
            ("legged_rover_framing.zoom_scale", self.legged_rover_framing.zoom_scale),
            ("wheeled_rover_framing.zoom_scale", self.wheeled_rover_framing.zoom_scale),
        ];
        for (field, scale) in scales {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a positive scale, got {scale}"),
                });
            }
        }

        let steps = [
            ("planet_spin_per_frame", self.planet_spin_per_frame),
            ("orbiter_spin_per_frame", self.orbiter_spin_per_frame),
            ("gait_speed_per_frame", self.gait_speed_per_frame),
            ("gait_amplitude", self.gait_amplitude),
            ("upper_leg_tilt_ratio", self.upper_leg_tilt_ratio),
            ("wheel_speed_per_frame", self.wheel_speed_per_frame),
        ];
        match steps.into_iter().find(|(_, value)| !value.is_finite()) {
            Some((field, value)) => Err(ConfigError::Invalid {
                field,
                reason: format!("must be finite, got {value}"),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ShowcaseConfig::default().validate().is_ok());
    }

    #[test]
    fn smoothing_factor_outside_unit_interval_is_rejected() {
        for smoothing_factor in [0.0, 1.0, -0.2, f32::NAN] {
            let config = ShowcaseConfig {
                smoothing_factor,
                ..default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::Invalid {
                        field: "smoothing_factor",
                        ..
                    })
                ),
                "{smoothing_factor} accepted"
            );
        }
    }

    #[test]
    fn zero_zoom_scale_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.wheeled_rover_framing.zoom_scale = 0.0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn every_target_is_framed_with_the_same_formula() {
        let config = ShowcaseConfig::default();
        let anchors = Anchors {
            planet:        Some(Vec3::ZERO),
            legged_rover:  Some(Vec3::new(5.0, 8.66, 0.0)),
            wheeled_rover: Some(Vec3::new(-1.7, -9.8, 0.0)),
        };

        for target in FocusTarget::SELECTABLE {
            let anchor = anchors.get(target).unwrap_or_default();
            let pose = config.pose_for(target, &anchors);
            let framing = config.framing(target).map(|framing| framing.pose_for(anchor));
            assert_eq!(pose, framing, "{target:?}");
        }
        assert_eq!(config.pose_for(FocusTarget::None, &anchors), None);
    }

    #[test]
    fn missing_anchor_yields_no_pose() {
        let config = ShowcaseConfig::default();
        assert_eq!(config.pose_for(FocusTarget::Planet, &Anchors::default()), None);
    }
}
