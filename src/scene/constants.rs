use bevy::prelude::*;

// planet
pub const PLANET_RADIUS: f32 = 10.0;
pub const PLANET_SEGMENTS: u32 = 64;
pub const PLANET_ROUGHNESS: f32 = 0.9;
pub const PLANET_METALLIC: f32 = 0.1;
/// Drawn instead of the surface texture when it fails to load.
pub const MARS_FALLBACK_COLOR: Color = Color::srgb_u8(0xc1, 0x44, 0x0e);

pub const ORBITER_RADIUS: f32 = 1.0;
pub const ORBITER_POSITION: Vec3 = Vec3::new(20.0, 0.0, 0.0);
pub const EARTH_FALLBACK_COLOR: Color = Color::srgb_u8(0x2a, 0x5c, 0xaa);

// legged rover
pub const LEGGED_ROVER_LATITUDE: f32 = 0.0;
pub const LEGGED_ROVER_LONGITUDE: f32 = 60.0;
pub const LEGGED_ROVER_HEIGHT: f32 = 0.5;
pub const LEGGED_ROVER_COLOR: Color = Color::srgb_u8(0xff, 0xff, 0x00);
pub const LEG_COLOR: Color = Color::srgb_u8(0xfc, 0xcb, 0x02);
pub const EYE_COLOR: Color = Color::srgb_u8(0x00, 0xff, 0xff);
pub const LEG_REST_HEIGHT: f32 = -0.8;
/// Leg attachment points on the body, in gait order.
pub const LEG_OFFSETS: [Vec2; 4] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(-1.0, -1.0),
];

// wheeled rover
pub const WHEELED_ROVER_LATITUDE: f32 = 100.0;
pub const WHEELED_ROVER_LONGITUDE: f32 = 30.0;
pub const WHEELED_ROVER_HEIGHT: f32 = 0.0;
pub const WHEELED_ROVER_COLOR: Color = Color::srgb_u8(0x33, 0x99, 0xff);
pub const SOLAR_PANEL_COLOR: Color = Color::srgb_u8(0x1a, 0x1a, 0x3a);
pub const WHEEL_COLOR: Color = Color::srgb_u8(0x22, 0x22, 0x22);
pub const SPOKE_COLOR: Color = Color::srgb_u8(0x66, 0x66, 0x66);
pub const ANTENNA_COLOR: Color = Color::srgb_u8(0xcc, 0xcc, 0xcc);
pub const WHEEL_HEIGHT: f32 = 0.4;
pub const WHEEL_OFFSETS: [Vec2; 6] = [
    Vec2::new(1.0, 1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(-1.0, 1.0),
    Vec2::new(-1.0, -1.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(0.0, -1.0),
];
pub const SPOKES_PER_WHEEL: usize = 5;

// rocket
pub const ROCKET_POSITION: Vec3 = Vec3::new(10.0, 10.0, -10.0);
pub const ROCKET_TILT: f32 = -std::f32::consts::FRAC_PI_3;
pub const ROCKET_BODY_COLOR: Color = Color::srgb_u8(0xff, 0x00, 0x00);
pub const ROCKET_NOSE_COLOR: Color = Color::srgb_u8(0x30, 0xff, 0x30);
pub const ROCKET_FIN_COLOR: Color = Color::srgb_u8(0x00, 0x00, 0xff);
pub const ROCKET_FIN_COUNT: usize = 3;

// lights
pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(50.0, 50.0, -10.0);
pub const KEY_LIGHT_COLOR: Color = Color::srgb_u8(0xff, 0xde, 0x59);
pub const KEY_LIGHT_ILLUMINANCE: f32 = 8_000.0;
pub const FILL_LIGHT_POSITION: Vec3 = Vec3::new(-30.0, 20.0, 30.0);
pub const FILL_LIGHT_COLOR: Color = Color::srgb_u8(0x88, 0x99, 0xff);
pub const FILL_LIGHT_ILLUMINANCE: f32 = 2_400.0;

// stars
pub const STAR_COUNT: usize = 1000;
pub const STAR_FIELD_HALF_EXTENT: f32 = 200.0;
pub const STAR_RADIUS: f32 = 0.25;
