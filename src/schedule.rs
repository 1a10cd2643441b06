use bevy::prelude::*;

/// Input is applied before the pointer is picked, picking before the tick that observes
/// it, and the tick before anything is presented.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum ShowcaseSet {
    UserInput,
    Picking,
    FrameUpdate,
    Presentation,
}

pub struct SchedulePlugin;

impl Plugin for SchedulePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                ShowcaseSet::UserInput,
                ShowcaseSet::Picking,
                ShowcaseSet::FrameUpdate,
                ShowcaseSet::Presentation,
            )
                .chain(),
        );
    }
}
