pub const SUN_MAP: &str = "textures/sun/sun_map.jpg";
pub const EARTH_MAP: &str = "textures/earth/earth_map.jpg";
pub const FLAT_EARTH_MAP: &str = "textures/earth/flat_earth_map.jpg";
pub const MOON_MAP: &str = "textures/moon/moon_map.jpg";

/// Scene manifest path relative to the asset root.
pub const MANIFEST_PATH: &str = "solar_system.json";
