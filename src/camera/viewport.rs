use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy::window::WindowResized;

use super::ShowcaseCamera;
use super::constants::FALLBACK_VIEWPORT;

pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, size_viewport_to_window)
            .add_systems(Update, apply_window_resize);
    }
}

/// Logical size of the drawing surface.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width:  f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width:  FALLBACK_VIEWPORT.x,
            height: FALLBACK_VIEWPORT.y,
        }
    }
}

impl Viewport {
    /// Adopts the new size and returns the aspect ratio the camera should use.
    /// Degenerate sizes (a minimized window) are ignored.
    pub const fn resize(&mut self, width: f32, height: f32) -> Option<f32> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return None;
        }
        self.width = width;
        self.height = height;
        Some(self.aspect_ratio())
    }

    pub const fn aspect_ratio(&self) -> f32 { self.width / self.height }

    /// Window coordinates (origin top left, y down) to normalized device coordinates
    /// (origin centre, y up).
    pub fn cursor_to_ndc(&self, cursor: Vec2) -> Vec2 {
        Vec2::new(
            (cursor.x / self.width).mul_add(2.0, -1.0),
            (cursor.y / self.height).mul_add(-2.0, 1.0),
        )
    }
}

fn size_viewport_to_window(
    window: Single<&Window, With<PrimaryWindow>>,
    mut viewport: ResMut<Viewport>,
) {
    if let Some(aspect) = viewport.resize(window.width(), window.height()) {
        debug!("viewport {}x{} (aspect {aspect:.3})", viewport.width, viewport.height);
    }
}

/// Only the camera's aspect ratio follows the window; nothing else reacts to a resize.
fn apply_window_resize(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<Viewport>,
    mut projection: Single<&mut Projection, With<ShowcaseCamera>>,
) {
    for event in resized.read() {
        let Some(aspect) = viewport.resize(event.width, event.height) else {
            continue;
        };
        if let Projection::Perspective(perspective) = &mut **projection {
            perspective.aspect_ratio = aspect;
        }
        debug!("resized to {}x{} (aspect {aspect:.3})", event.width, event.height);
    }
}
