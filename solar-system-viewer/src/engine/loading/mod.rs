//! Loading pipeline from manifest request to a spawned scene.
//!
//! The manifest resolves first (falling back to defaults on failure), then
//! textures are requested, the scene and cameras are spawned, and loading
//! completes once every texture has loaded or failed.

/// Scene manifest request and resolution.
pub mod manifest_loader;

/// Loading progress resource and overlay label.
pub mod progress;

/// Scene graph, camera rig and runtime settings creation.
pub mod scene_creator;

/// Texture requests and load state tracking.
pub mod texture_loader;
