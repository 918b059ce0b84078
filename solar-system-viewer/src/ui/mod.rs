//! In-window user interface built with `bevy_ui`.

/// Collapsible panel for helper grids, light levels and camera status.
pub mod debug_panel;
