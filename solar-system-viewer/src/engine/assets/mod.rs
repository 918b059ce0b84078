//! Scene configuration and texture handles.
//!
//! The scene manifest is a JSON asset whose every field has a compiled-in
//! default, so a missing or partial file still yields a complete scene.

/// Solar system manifest: camera, lighting, layout, animation and texture paths.
pub mod scene_manifest;

/// Texture handles for the sun, Earth, moon and flat Earth maps.
pub mod textures;
