use bevy::prelude::*;

/// Vertical field of view, in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

pub const CLEAR_COLOR: Color = Color::srgb_u8(0x1a, 0x1a, 0x1a);

pub const FOG_COLOR: Color = Color::srgb_u8(0x22, 0x22, 0x22);
pub const FOG_START: f32 = 50.0;
pub const FOG_END: f32 = 200.0;

pub const AMBIENT_COLOR: Color = Color::srgb_u8(0x40, 0x40, 0x60);
pub const AMBIENT_BRIGHTNESS: f32 = 300.0;

/// Used until the primary window reports its real size.
pub const FALLBACK_VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
