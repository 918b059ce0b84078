//! Celestial scene graph, animation, lighting and helper overlays.

/// Spin animation shared by every node of the hierarchy.
pub mod animation;

/// Line-list helper grids and axes attached to each scene node.
///
/// Hidden by default; visibility follows `HelperGridVisibility`.
pub mod grid;

/// Light levels and their propagation to the ambient and sun lights.
pub mod lighting;

/// Hemisphere dome, disc rim and disc cap meshes.
pub mod meshes;

pub mod nodes;

/// Construction of the sun, Earth, moon and flat Earth hierarchy.
pub mod solar_system;
