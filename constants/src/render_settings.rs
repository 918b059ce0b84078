use bevy::math::Vec3;

pub const CAMERA_FOV_DEGREES: f32 = 40.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_POSITION: Vec3 = Vec3::new(0.0, 30.0, -30.0);
pub const CAMERA_LOOK_AT: Vec3 = Vec3::ZERO;
/// Visible world height of the orthographic camera at scale 1.
pub const ORTHOGRAPHIC_VIEW_HEIGHT: f32 = 40.0;

pub const AMBIENT_BRIGHTNESS: f32 = 80.0;
pub const AMBIENT_BRIGHTNESS_RANGE: (f32, f32) = (0.0, 2_000.0);

/// Sun point light intensity in lumens.
pub const SUN_INTENSITY: f32 = 2_000_000.0;
pub const SUN_INTENSITY_RANGE: (f32, f32) = (0.0, 50_000_000.0);
pub const SUN_LIGHT_RANGE: f32 = 200.0;

/// Multiplicative step applied by the debug panel buttons.
pub const LIGHT_STEP_FACTOR: f32 = 1.25;
/// Value a light restarts from when stepped up from zero.
pub const LIGHT_STEP_FLOOR: f32 = 1.0;

/// Half extent of each helper grid in local units.
pub const HELPER_GRID_HALF_SIZE: f32 = 1.0;
pub const HELPER_GRID_DIVISIONS: u32 = 2;
pub const HELPER_AXES_LENGTH: f32 = 1.5;
pub const HELPER_GRID_COLOUR: [f32; 4] = [1.0, 1.0, 1.0, 0.5];

pub const CLEAR_COLOUR: [u8; 3] = [0x00, 0x00, 0x00];
