use bevy::prelude::*;

use super::info_sheet::InfoSheet;
use super::info_sheet::SheetLine;
use crate::interaction::InfoPanelCommand;
use crate::schedule::ShowcaseSet;
use crate::state::AppState;

pub struct InfoPanelPlugin;

impl Plugin for InfoPanelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_info_panel)
            .add_systems(
                Update,
                close_on_button
                    .in_set(ShowcaseSet::UserInput)
                    .run_if(in_state(AppState::Showcase)),
            )
            .add_systems(Update, apply_panel_commands.in_set(ShowcaseSet::Presentation));
    }
}

const PANEL_WIDTH: f32 = 360.0;
const PANEL_COLOR: Color = Color::srgba(0.08, 0.08, 0.1, 0.9);
const HEADING_COLOR: Color = Color::srgb_u8(0xff, 0x8c, 0x42);
const TEXT_COLOR: Color = Color::srgb_u8(0xe0, 0xe0, 0xe0);

#[derive(Component)]
pub struct InfoPanel;

#[derive(Component)]
struct InfoTitle;

#[derive(Component)]
struct InfoBody;

#[derive(Component)]
struct CloseInfoButton;

fn spawn_info_panel(mut commands: Commands) {
    commands.spawn((
        InfoPanel,
        Name::new("InfoPanel"),
        Node {
            display: Display::None,
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            top: Val::Px(80.0),
            width: Val::Px(PANEL_WIDTH),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(8.0),
            padding: UiRect::all(Val::Px(16.0)),
            ..default()
        },
        BackgroundColor(PANEL_COLOR),
        Interaction::default(),
        children![
            (
                Node {
                    justify_content: JustifyContent::SpaceBetween,
                    align_items: AlignItems::Center,
                    ..default()
                },
                children![
                    (
                        InfoTitle,
                        Text::default(),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(HEADING_COLOR),
                    ),
                    (
                        CloseInfoButton,
                        Button,
                        Node {
                            padding: UiRect::axes(Val::Px(8.0), Val::Px(2.0)),
                            ..default()
                        },
                        children![(Text::new("x"), TextColor(TEXT_COLOR))],
                    ),
                ],
            ),
            (
                InfoBody,
                Node {
                    flex_direction: FlexDirection::Column,
                    row_gap: Val::Px(4.0),
                    ..default()
                },
            ),
        ],
    ));
}

fn line_bundle(line: SheetLine) -> (Text, TextFont, TextColor) {
    let (text, size, color) = match line {
        SheetLine::Paragraph(text) => (text.to_string(), 15.0, TEXT_COLOR),
        SheetLine::Heading(text) => (text.to_string(), 18.0, HEADING_COLOR),
        SheetLine::Spec(spec) => (format!("{}: {}", spec.label, spec.value), 14.0, TEXT_COLOR),
        SheetLine::Bullet(text) => (format!("- {text}"), 14.0, TEXT_COLOR),
    };
    (
        Text::new(text),
        TextFont {
            font_size: size,
            ..default()
        },
        TextColor(color),
    )
}

fn close_on_button(
    buttons: Query<&Interaction, (Changed<Interaction>, With<CloseInfoButton>)>,
    mut panel: MessageWriter<InfoPanelCommand>,
) {
    if buttons.iter().any(|interaction| *interaction == Interaction::Pressed) {
        panel.write(InfoPanelCommand::Hide);
    }
}

/// Commands are applied in order; the last one of the frame decides what stays visible.
fn apply_panel_commands(
    mut commands: Commands,
    mut panel_commands: MessageReader<InfoPanelCommand>,
    mut panel: Single<&mut Node, With<InfoPanel>>,
    mut title: Single<&mut Text, With<InfoTitle>>,
    body: Single<Entity, With<InfoBody>>,
) {
    for command in panel_commands.read() {
        match *command {
            InfoPanelCommand::Show(target) => {
                let Some(sheet) = InfoSheet::for_target(target) else {
                    continue;
                };
                title.0 = sheet.title.to_string();
                commands
                    .entity(*body)
                    .despawn_related::<Children>()
                    .with_children(|body| {
                        for line in sheet.lines() {
                            body.spawn(line_bundle(line));
                        }
                    });
                panel.display = Display::Flex;
            },
            InfoPanelCommand::Hide => panel.display = Display::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::message::Messages;
    use bevy::ecs::system::RunSystemOnce;

    use super::*;
    use crate::config::ShowcaseConfig;
    use crate::interaction::FocusRequest;
    use crate::interaction::FocusTarget;
    use crate::interaction::InteractionLoop;
    use crate::interaction::apply_focus_requests;

    fn panel_world() -> World {
        let mut world = World::new();
        world.insert_resource(ShowcaseConfig::default());
        world.init_resource::<InteractionLoop>();
        world.init_resource::<Messages<FocusRequest>>();
        world.init_resource::<Messages<InfoPanelCommand>>();
        assert!(world.run_system_once(spawn_info_panel).is_ok());
        world
    }

    fn panel_display(world: &mut World) -> Option<Display> {
        world
            .run_system_once(|panel: Single<&Node, With<InfoPanel>>| panel.display)
            .ok()
    }

    #[test]
    fn show_then_hide_toggles_the_panel() {
        let mut world = panel_world();
        assert_eq!(panel_display(&mut world), Some(Display::None));

        world.write_message(InfoPanelCommand::Show(FocusTarget::Planet));
        assert!(world.run_system_once(apply_panel_commands).is_ok());
        assert_eq!(panel_display(&mut world), Some(Display::Flex));

        world.write_message(InfoPanelCommand::Hide);
        assert!(world.run_system_once(apply_panel_commands).is_ok());
        assert_eq!(panel_display(&mut world), Some(Display::None));
    }

    #[test]
    fn close_button_hides_the_panel_and_keeps_focus() {
        let mut world = panel_world();
        world.write_message(FocusRequest::Toggle(FocusTarget::LeggedRover));
        assert!(world.run_system_once(apply_focus_requests).is_ok());
        assert!(world.run_system_once(apply_panel_commands).is_ok());
        assert_eq!(panel_display(&mut world), Some(Display::Flex));

        let close: Vec<Entity> = world
            .query_filtered::<Entity, With<CloseInfoButton>>()
            .iter(&world)
            .collect();
        assert_eq!(close.len(), 1);
        for entity in close {
            world.entity_mut(entity).insert(Interaction::Pressed);
        }
        assert!(world.run_system_once(close_on_button).is_ok());
        assert!(world.run_system_once(apply_panel_commands).is_ok());

        assert_eq!(panel_display(&mut world), Some(Display::None));
        assert_eq!(
            world.resource::<InteractionLoop>().focus(),
            FocusTarget::LeggedRover
        );
    }
}
