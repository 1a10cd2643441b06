use bevy::prelude::*;

use crate::asset_loader::AssetsState;
use crate::state::AppState;

pub struct LoadingScreenPlugin;

/// The overlay stays up at least this long, even when everything is cached.
const MIN_LOADING_SECS: f32 = 1.0;
const PULSE_RATE: f32 = 4.0;
const OVERLAY_COLOR: Color = Color::srgb_u8(0x1a, 0x1a, 0x1a);

#[derive(Component)]
pub struct LoadingScreen;

#[derive(Component)]
struct LoadingText;

#[derive(Resource, Debug)]
struct LoadingTimer {
    pub timer: Timer,
}

impl Plugin for LoadingScreenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(LoadingTimer {
            timer: Timer::from_seconds(MIN_LOADING_SECS, TimerMode::Once),
        })
        .add_systems(OnEnter(AppState::Loading), spawn_loading_screen)
        .add_systems(
            Update,
            (pulse_loading_text, finish_loading).run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnExit(AppState::Loading), despawn_loading_screen);
    }
}

fn spawn_loading_screen(mut commands: Commands, mut loading_timer: ResMut<LoadingTimer>) {
    loading_timer.timer.reset();

    commands.spawn((
        LoadingScreen,
        Name::new("LoadingScreen"),
        Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            position_type: PositionType::Absolute,
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            ..default()
        },
        BackgroundColor(OVERLAY_COLOR),
        GlobalZIndex(i32::MAX),
        children![(
            LoadingText,
            Text::new("Loading Mars..."),
            TextFont {
                font_size: 32.0,
                ..default()
            },
            TextColor(Color::WHITE),
        )],
    ));
}

fn pulse_alpha(elapsed_secs: f32) -> f32 { (elapsed_secs * PULSE_RATE).sin().mul_add(0.35, 0.65) }

fn pulse_loading_text(time: Res<Time>, mut texts: Query<&mut TextColor, With<LoadingText>>) {
    let alpha = pulse_alpha(time.elapsed_secs());
    for mut color in &mut texts {
        color.0.set_alpha(alpha);
    }
}

fn finish_loading(
    time: Res<Time>,
    assets_state: Res<State<AssetsState>>,
    mut loading_timer: ResMut<LoadingTimer>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    loading_timer.timer.tick(time.delta());

    if loading_timer.timer.is_finished() && *assets_state.get() == AssetsState::Loaded {
        next_state.set(AppState::Showcase);
    }
}

fn despawn_loading_screen(mut commands: Commands, screens: Query<Entity, With<LoadingScreen>>) {
    debug!("removing loading screen");
    for entity in &screens {
        commands.entity(entity).despawn();
    }
}
