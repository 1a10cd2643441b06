use bevy::dev_tools::states::*;
use bevy::prelude::*;

use crate::asset_loader::AssetsState;

pub struct StatePlugin;

impl Plugin for StatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_systems(Update, (log_transitions::<AppState>, log_transitions::<AssetsState>));
    }
}

/// `Loading` shows the loading screen; focus controls only work in `Showcase`.
/// The interaction loop itself runs in both.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Reflect, States)]
pub enum AppState {
    #[default]
    Loading,
    Showcase,
}
