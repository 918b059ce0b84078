//! Runtime diagnostics.

/// Frame rate overlay for native builds.
pub mod fps_tracking;
