//! Pointer ray against the focusable objects, feeding hover into the interaction loop.

use bevy::picking::mesh_picking::ray_cast::MeshRayCast;
use bevy::picking::mesh_picking::ray_cast::MeshRayCastSettings;
use bevy::prelude::*;

use super::ShowcaseCamera;
use super::Viewport;
use crate::config::ShowcaseConfig;
use crate::interaction::AnchorQuery;
use crate::interaction::FocusTarget;
use crate::interaction::HoverTarget;
use crate::interaction::InteractionLoop;
use crate::interaction::PickHits;
use crate::schedule::ShowcaseSet;
use crate::state::AppState;

pub struct PointerHoverPlugin;

impl Plugin for PointerHoverPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            update_pointer_hover
                .in_set(ShowcaseSet::Picking)
                .run_if(in_state(AppState::Showcase)),
        );
    }
}

/// Resolves a ray hit to the focus target it belongs to. A hit on the marked entity
/// itself always counts; a hit on a descendant counts only when the marker says so.
fn resolve_hover_target(
    entity: Entity,
    targets: &Query<&HoverTarget>,
    parents: &Query<&ChildOf>,
) -> Option<FocusTarget> {
    if let Ok(hover) = targets.get(entity) {
        return Some(hover.target);
    }
    parents.iter_ancestors(entity).find_map(|ancestor| {
        targets
            .get(ancestor)
            .ok()
            .filter(|hover| hover.includes_descendants)
            .map(|hover| hover.target)
    })
}

/// The nav bar and info panel sit on top of the scene and swallow the pointer.
fn pointer_over_ui(widgets: &Query<&Interaction>) -> bool {
    widgets
        .iter()
        .any(|interaction| *interaction != Interaction::None)
}

fn update_pointer_hover(
    mut cursor_moves: MessageReader<CursorMoved>,
    mut ray_cast: MeshRayCast,
    mut interaction: ResMut<InteractionLoop>,
    camera: Single<(&Camera, &GlobalTransform), With<ShowcaseCamera>>,
    targets: Query<&HoverTarget>,
    parents: Query<&ChildOf>,
    widgets: Query<&Interaction>,
    anchors: AnchorQuery,
    viewport: Res<Viewport>,
    config: Res<ShowcaseConfig>,
) {
    // each move overwrites the previous one's targets, so only the latest matters
    let Some(cursor) = cursor_moves.read().last().map(|moved| moved.position) else {
        return;
    };
    if !interaction.focus().is_none() || pointer_over_ui(&widgets) {
        return;
    }

    let (camera, camera_transform) = *camera;
    let Ok(ray) = camera.viewport_to_world(camera_transform, cursor) else {
        return;
    };

    let settings = MeshRayCastSettings::default().never_early_exit();
    let mut hits = PickHits::default();
    for (entity, _) in ray_cast.cast_ray(ray, &settings) {
        if let Some(target) = resolve_hover_target(*entity, &targets, &parents) {
            hits.record(target);
        }
    }

    let previous = interaction.hover();
    if interaction.pointer_hover(hits, &anchors.anchors(), &config) && interaction.hover() != previous {
        let hover = interaction.hover();
        debug!(
            "hover at {} -> planet {} legged {} wheeled {}",
            viewport.cursor_to_ndc(cursor),
            hover.over_planet(),
            hover.over_legged_rover(),
            hover.over_wheeled_rover()
        );
    }
}
