//! Mars showcase - an interactive 3D Mars exploration scene built with Bevy 0.18
//!
//! - Mars with two rovers and an orbiting Earth
//! - Hover and click focus with eased camera fly-to
//! - Procedural leg gait and wheel spin
//! - Bevy Remote Protocol (BRP) support for debugging

mod asset_loader;
mod camera;
mod config;
mod controls;
mod interaction;
mod loading_screen;
mod scene;
mod schedule;
mod state;
mod traits;
mod ui;

use bevy::prelude::*;
#[cfg(not(target_arch = "wasm32"))]
use bevy_brp_extras::BrpExtrasPlugin;
use bevy_inspector_egui::bevy_egui::EguiPlugin;

use crate::asset_loader::AssetLoaderPlugin;
use crate::camera::CameraPlugin;
use crate::config::ConfigPlugin;
use crate::controls::ControlsPlugin;
use crate::interaction::InteractionPlugin;
use crate::loading_screen::LoadingScreenPlugin;
use crate::scene::ScenePlugin;
use crate::schedule::SchedulePlugin;
use crate::state::StatePlugin;
use crate::ui::PresentationPlugin;

const APP_NAME: &str = "mars-showcase";

fn main() {
    let mut app = App::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        // Get effective port from BrpExtrasPlugin to include in window title if non-default
        let brp_plugin = BrpExtrasPlugin::default();
        let (effective_port, _) = brp_plugin.get_effective_port();
        let window_title = if effective_port == bevy_brp_extras::DEFAULT_REMOTE_PORT {
            APP_NAME.to_string()
        } else {
            format!("{APP_NAME} - {effective_port}")
        };

        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: window_title,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(brp_plugin);
    }

    #[cfg(target_arch = "wasm32")]
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: APP_NAME.to_string(),
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }));

    // config first: the interaction loop and the scene read it while building
    app.add_plugins((EguiPlugin::default(), ConfigPlugin))
        .add_plugins((
            SchedulePlugin,
            StatePlugin,
            AssetLoaderPlugin,
            CameraPlugin,
            ScenePlugin,
            InteractionPlugin,
            ControlsPlugin,
            PresentationPlugin,
            LoadingScreenPlugin,
        ))
        .run();
}
