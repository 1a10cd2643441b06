mod focus;
mod frame_loop;
mod framing;
mod gait;
mod hover;
mod smoothing;
mod systems;

use bevy::prelude::*;

pub use focus::Focus;
pub use focus::FocusRequest;
pub use focus::FocusTarget;
pub use focus::FocusTransition;
pub use focus::InfoPanelCommand;
pub use frame_loop::FramePose;
pub use frame_loop::InteractionLoop;
pub use framing::Anchors;
pub use framing::Framing;
pub use framing::Pose;
pub use gait::Gait;
pub use gait::LEG_COUNT;
pub use gait::LegPose;
pub use gait::WheelSpin;
pub use gait::wrap_angle;
pub use hover::HoverState;
pub use hover::HoverTarget;
pub use hover::PickHits;
pub use smoothing::CameraRig;
pub use smoothing::frame_scaled_factor;
pub use systems::AnchorQuery;
pub use systems::apply_focus_requests;

use crate::schedule::ShowcaseSet;

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<FocusRequest>()
            .add_message::<InfoPanelCommand>()
            .register_type::<HoverTarget>()
            .init_resource::<FramePose>()
            .init_resource::<InteractionLoop>()
            .add_systems(Update, apply_focus_requests.in_set(ShowcaseSet::UserInput))
            .add_systems(
                Update,
                (
                    systems::tick_interaction_loop,
                    (
                        systems::apply_camera_pose,
                        systems::apply_planet_pose,
                        systems::spin_orbiting_body,
                        systems::animate_legs,
                        systems::spin_wheels,
                    ),
                )
                    .chain()
                    .in_set(ShowcaseSet::FrameUpdate),
            );
    }
}
