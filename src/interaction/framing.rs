use bevy::prelude::*;
use serde::Deserialize;
use serde::Serialize;

use super::FocusTarget;

/// Where the camera sits, what it looks at, and how much the planet group is scaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub camera:  Vec3,
    pub look_at: Vec3,
    pub scale:   f32,
}

/// One row of the per-target framing table: a camera offset from the target's live
/// world position plus the zoom scale applied to the planet group.
#[derive(Reflect, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    pub offset:     Vec3,
    pub zoom_scale: f32,
}

impl Framing {
    pub fn pose_for(self, anchor: Vec3) -> Pose {
        Pose {
            camera:  anchor + self.offset,
            look_at: anchor,
            scale:   self.zoom_scale,
        }
    }
}

/// Live world positions of the focusable objects, sampled once per frame. An object that
/// has not been built (or was removed) is `None` and anything depending on it is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchors {
    pub planet:        Option<Vec3>,
    pub legged_rover:  Option<Vec3>,
    pub wheeled_rover: Option<Vec3>,
}

impl Anchors {
    pub const fn get(&self, target: FocusTarget) -> Option<Vec3> {
        match target {
            FocusTarget::None => None,
            FocusTarget::Planet => self.planet,
            FocusTarget::LeggedRover => self.legged_rover,
            FocusTarget::WheeledRover => self.wheeled_rover,
        }
    }
}
