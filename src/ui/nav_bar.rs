use bevy::prelude::*;

use crate::interaction::FocusRequest;
use crate::interaction::FocusTarget;
use crate::interaction::InteractionLoop;
use crate::interaction::apply_focus_requests;
use crate::schedule::ShowcaseSet;
use crate::state::AppState;

pub struct NavBarPlugin;

impl Plugin for NavBarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Showcase), spawn_nav_bar)
            .add_systems(
                Update,
                request_focus_on_click
                    .before(apply_focus_requests)
                    .in_set(ShowcaseSet::UserInput)
                    .run_if(in_state(AppState::Showcase)),
            )
            .add_systems(Update, highlight_active_button.in_set(ShowcaseSet::Presentation));
    }
}

const IDLE_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
const HOVERED_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.2);
const ACTIVE_COLOR: Color = Color::srgb_u8(0xc1, 0x44, 0x0e);

/// A nav bar link and the request it sends.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavButton(pub FocusRequest);

impl NavButton {
    const ALL: [Self; 4] = [
        Self(FocusRequest::Home),
        Self(FocusRequest::Toggle(FocusTarget::Planet)),
        Self(FocusRequest::Toggle(FocusTarget::LeggedRover)),
        Self(FocusRequest::Toggle(FocusTarget::WheeledRover)),
    ];

    const fn target(self) -> FocusTarget {
        match self.0 {
            FocusRequest::Home => FocusTarget::None,
            FocusRequest::Toggle(target) => target,
        }
    }

    const fn label(self) -> &'static str { self.target().label() }

    /// Home lights up while nothing is focused, the others while their target is.
    fn is_active(self, focus: FocusTarget) -> bool { self.target() == focus }
}

fn spawn_nav_bar(mut commands: Commands) {
    commands
        .spawn((
            Name::new("NavBar"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(16.0),
                left: Val::Px(16.0),
                column_gap: Val::Px(8.0),
                ..default()
            },
            Interaction::default(),
        ))
        .with_children(|bar| {
            for button in NavButton::ALL {
                bar.spawn((
                    button,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(14.0), Val::Px(6.0)),
                        ..default()
                    },
                    BackgroundColor(IDLE_COLOR),
                    children![(
                        Text::new(button.label()),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::WHITE),
                    )],
                ));
            }
        });
}

fn request_focus_on_click(
    buttons: Query<(&Interaction, &NavButton), Changed<Interaction>>,
    mut requests: MessageWriter<FocusRequest>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            requests.write(button.0);
        }
    }
}

fn highlight_active_button(
    interaction: Res<InteractionLoop>,
    mut buttons: Query<(&NavButton, &Interaction, &mut BackgroundColor)>,
) {
    let focus = interaction.focus();
    for (button, pointer, mut background) in &mut buttons {
        let color = if button.is_active(focus) {
            ACTIVE_COLOR
        } else if *pointer == Interaction::Hovered {
            HOVERED_COLOR
        } else {
            IDLE_COLOR
        };
        if background.0 != color {
            background.0 = color;
        }
    }
}
