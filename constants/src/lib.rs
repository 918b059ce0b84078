//! Compile-time defaults shared by the solar system viewer.
//!
//! Every value here is the fallback used when `solar_system.json` omits a
//! field or fails validation.

/// Orbit distances, body scales and spin rate of the celestial hierarchy.
pub mod celestial;

/// Fixed configuration reapplied to the orbit and fly control bindings.
pub mod controls;

/// Camera, light and helper-grid defaults.
pub mod render_settings;

/// Texture paths relative to the asset root.
pub mod texture;
