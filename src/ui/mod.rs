mod info_panel;
mod info_sheet;
mod nav_bar;

use bevy::prelude::*;

use info_panel::InfoPanelPlugin;
use nav_bar::NavBarPlugin;

/// Nav bar and info panel: the page chrome around the 3D view.
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(InfoPanelPlugin).add_plugins(NavBarPlugin);
    }
}
