mod constants;
mod lights;
mod planet;
mod rocket;
mod rovers;
mod stars;

use bevy::prelude::*;

pub use planet::OrbitingBody;
pub use planet::PlanetBody;
pub use planet::PlanetGroup;
pub use rovers::Leg;
pub use rovers::LegUpper;
pub use rovers::LeggedRover;
pub use rovers::Wheel;
pub use rovers::WheeledRover;

use lights::LightsPlugin;
use planet::PlanetPlugin;
use rocket::RocketPlugin;
use rovers::RoversPlugin;
use stars::StarsPlugin;

/// Builds the static scene once at startup. Nothing here animates on its own.
pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(PlanetPlugin)
            .add_plugins(RoversPlugin)
            .add_plugins(RocketPlugin)
            .add_plugins(LightsPlugin)
            .add_plugins(StarsPlugin);
    }
}
