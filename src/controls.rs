//! Keyboard shortcuts mirroring the nav bar, plus the panel and inspector toggles.

use bevy::prelude::*;
use bevy_enhanced_input::prelude::*;

use crate::config::InspectorVisible;
use crate::interaction::FocusRequest;
use crate::interaction::FocusTarget;
use crate::interaction::InfoPanelCommand;
use crate::state::AppState;

pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EnhancedInputPlugin)
            .add_input_context::<ShowcaseControls>()
            .add_systems(OnEnter(AppState::Showcase), spawn_controls)
            .add_observer(request_focus::<FocusPlanet>)
            .add_observer(request_focus::<FocusLeggedRover>)
            .add_observer(request_focus::<FocusWheeledRover>)
            .add_observer(request_focus::<GoHome>)
            .add_observer(close_info_panel)
            .add_observer(toggle_inspector);
    }
}

/// Input context for the showcase; only exists once loading is over.
#[derive(Component, Debug, Default)]
pub struct ShowcaseControls;

#[derive(InputAction)]
#[action_output(bool)]
pub struct FocusPlanet;

#[derive(InputAction)]
#[action_output(bool)]
pub struct FocusLeggedRover;

#[derive(InputAction)]
#[action_output(bool)]
pub struct FocusWheeledRover;

#[derive(InputAction)]
#[action_output(bool)]
pub struct GoHome;

#[derive(InputAction)]
#[action_output(bool)]
pub struct CloseInfo;

#[derive(InputAction)]
#[action_output(bool)]
pub struct ToggleInspector;

/// Actions that stand in for a nav bar click.
pub trait RequestsFocus: InputAction {
    const REQUEST: FocusRequest;
}

impl RequestsFocus for FocusPlanet {
    const REQUEST: FocusRequest = FocusRequest::Toggle(FocusTarget::Planet);
}

impl RequestsFocus for FocusLeggedRover {
    const REQUEST: FocusRequest = FocusRequest::Toggle(FocusTarget::LeggedRover);
}

impl RequestsFocus for FocusWheeledRover {
    const REQUEST: FocusRequest = FocusRequest::Toggle(FocusTarget::WheeledRover);
}

impl RequestsFocus for GoHome {
    const REQUEST: FocusRequest = FocusRequest::Home;
}

fn spawn_controls(mut commands: Commands) {
    commands.spawn((
        ShowcaseControls,
        Name::new("ShowcaseControls"),
        actions!(ShowcaseControls[
            (Action::<FocusPlanet>::new(), bindings![KeyCode::Digit1, KeyCode::Numpad1]),
            (Action::<FocusLeggedRover>::new(), bindings![KeyCode::Digit2, KeyCode::Numpad2]),
            (Action::<FocusWheeledRover>::new(), bindings![KeyCode::Digit3, KeyCode::Numpad3]),
            (Action::<GoHome>::new(), bindings![KeyCode::KeyH, KeyCode::Home]),
            (Action::<CloseInfo>::new(), bindings![KeyCode::Escape]),
            (Action::<ToggleInspector>::new(), bindings![KeyCode::F1]),
        ]),
    ));
}

fn request_focus<A: RequestsFocus>(_start: On<Start<A>>, mut requests: MessageWriter<FocusRequest>) {
    requests.write(A::REQUEST);
}

fn close_info_panel(_start: On<Start<CloseInfo>>, mut panel: MessageWriter<InfoPanelCommand>) {
    panel.write(InfoPanelCommand::Hide);
}

fn toggle_inspector(_start: On<Start<ToggleInspector>>, mut visible: ResMut<InspectorVisible>) {
    visible.0 = !visible.0;
    debug!("config inspector {}", if visible.0 { "shown" } else { "hidden" });
}
