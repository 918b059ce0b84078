//! View cameras and the controls that drive them.
//!
//! Two cameras exist for the lifetime of the scene, one perspective and one
//! orthographic. `CameraModeCoordinator` decides which one renders and which
//! control scheme is enabled; switching carries the pose across and rebuilds
//! the control bindings on the incoming camera.

/// Control binding components and their construction and disposal.
pub mod bindings;

/// Free-flight controls: keyboard movement and mouse look.
pub mod fly_controls;

/// Camera and control kinds plus the mode coordinator state machine.
pub mod mode;

/// Orbit controls with damping, pan and distance-clamped zoom.
pub mod orbit_controls;

pub mod pose;

/// Spawning of the two view cameras.
pub mod rig;

/// Mode requests, key mapping and the plugin scheduling all camera systems.
pub mod switching;
