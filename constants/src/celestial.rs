use bevy::math::Vec3;

/// Radius of the shared unit sphere mesh; bodies are scaled from it.
pub const SPHERE_RADIUS: f32 = 1.0;
pub const SPHERE_SECTORS: u32 = 32;
pub const SPHERE_STACKS: u32 = 32;

pub const SUN_SCALE: f32 = 5.0;
pub const EARTH_SCALE: f32 = 1.0;
pub const MOON_SCALE: f32 = 0.5;

/// Offset of the Earth orbit node from the solar system root.
pub const EARTH_ORBIT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 12.5);
/// Offset of the moon orbit node from the Earth orbit node.
pub const MOON_ORBIT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 2.5);
/// Offset of the flat Earth orbit node, opposite the spherical Earth.
pub const FLAT_EARTH_ORBIT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, -12.5);

/// Tilt of the flat Earth group about its Z axis, in degrees.
pub const FLAT_EARTH_TILT_DEGREES: f32 = 15.0;
pub const FLAT_EARTH_RADIUS: f32 = 1.0;
pub const FLAT_EARTH_THICKNESS: f32 = 0.1;
pub const FLAT_EARTH_RESOLUTION: u32 = 64;

pub const DOME_RADIUS: f32 = 1.05;
pub const DOME_SECTORS: u32 = 64;
pub const DOME_STACKS: u32 = 32;
pub const DOME_OPACITY: f32 = 0.2;

/// Rim colour of the flat Earth disc (ice wall).
pub const FLAT_EARTH_RIM_COLOUR: [u8; 3] = [0xFF, 0xFF, 0xFF];
/// Underside colour of the flat Earth disc (soil).
pub const FLAT_EARTH_BASE_COLOUR: [u8; 3] = [0x39, 0x26, 0x20];
pub const DOME_COLOUR: [u8; 3] = [0x88, 0xCC, 0xFF];
pub const EARTH_EMISSIVE_COLOUR: [u8; 3] = [0x10, 0x20, 0x30];

/// Rotation of every spinning node about its local Y axis, in radians per second.
/// Matches 0.001 rad per frame at 60 frames per second.
pub const SPIN_RATE: f32 = 0.06;
