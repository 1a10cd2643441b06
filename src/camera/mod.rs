mod cameras;
mod constants;
mod picking;
mod viewport;

use bevy::prelude::*;

pub use cameras::ShowcaseCamera;
pub use viewport::Viewport;

use cameras::CamerasPlugin;
use picking::PointerHoverPlugin;
use viewport::ViewportPlugin;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CamerasPlugin)
            .add_plugins(ViewportPlugin)
            .add_plugins(PointerHoverPlugin);
    }
}
