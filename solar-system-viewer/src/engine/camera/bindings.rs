use bevy::prelude::*;
use constants::controls::{CONTROL_SETTINGS, FlySettings, OrbitSettings};

use super::mode::{CameraKind, CameraModeCoordinator, CameraSwitch, ControlKind};

/// Orbit binding: rotates, pans and zooms the camera it is attached to around `target`.
#[derive(Component, Debug, Clone)]
pub struct OrbitControls {
    pub enabled: bool,
    pub generation: u32,
    pub target: Vec3,
    pub settings: OrbitSettings,
    /// Pending yaw/pitch in radians, consumed by damping.
    pub(super) rotate_velocity: Vec2,
    /// Pending pan along camera right/up in world units, consumed by damping.
    pub(super) pan_velocity: Vec2,
}

impl OrbitControls {
    pub fn new(settings: OrbitSettings, generation: u32, enabled: bool) -> Self {
        Self {
            enabled,
            generation,
            target: Vec3::ZERO,
            settings,
            rotate_velocity: Vec2::ZERO,
            pan_velocity: Vec2::ZERO,
        }
    }

    pub fn is_settled(&self) -> bool {
        self.rotate_velocity == Vec2::ZERO && self.pan_velocity == Vec2::ZERO
    }

    fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.rotate_velocity = Vec2::ZERO;
            self.pan_velocity = Vec2::ZERO;
        }
        self.enabled = enabled;
    }
}

/// Fly binding: free movement of the camera it is attached to.
#[derive(Component, Debug, Clone)]
pub struct FlyControls {
    pub enabled: bool,
    pub generation: u32,
    pub settings: FlySettings,
}

impl FlyControls {
    pub fn new(settings: FlySettings, generation: u32, enabled: bool) -> Self {
        Self {
            enabled,
            generation,
            settings,
        }
    }
}

/// Attach a fresh orbit and fly binding pair to `camera`, enabling only `enabled`.
pub fn bind_controls(commands: &mut Commands, camera: Entity, enabled: ControlKind, generation: u32) {
    commands.entity(camera).insert((
        OrbitControls::new(
            CONTROL_SETTINGS.orbit,
            generation,
            enabled == ControlKind::Orbit,
        ),
        FlyControls::new(CONTROL_SETTINGS.fly, generation, enabled == ControlKind::Fly),
    ));
}

pub fn dispose_controls(commands: &mut Commands, camera: Entity) {
    commands.entity(camera).remove::<(OrbitControls, FlyControls)>();
}

/// Replace the binding pair after a camera switch.
///
/// Bindings are removed from both cameras before the new pair is inserted; the
/// commands apply in order, so no camera ever holds two pairs.
pub fn rebind_controls(
    commands: &mut Commands,
    coordinator: &CameraModeCoordinator,
    switch: &CameraSwitch,
) {
    for kind in [CameraKind::Perspective, CameraKind::Orthographic] {
        dispose_controls(commands, coordinator.camera_entity(kind));
    }
    bind_controls(commands, switch.to, switch.control, switch.generation);

    debug!(
        "Control bindings rebuilt: generation {} on {:?}, {} enabled",
        switch.generation,
        switch.to,
        switch.control.label()
    );
}

/// Enable exactly the scheme the coordinator has selected.
pub fn sync_binding_enablement(
    coordinator: Res<CameraModeCoordinator>,
    mut orbit_bindings: Query<&mut OrbitControls>,
    mut fly_bindings: Query<&mut FlyControls>,
) {
    let active = coordinator.active_control();

    for mut orbit in &mut orbit_bindings {
        let enabled = active == ControlKind::Orbit;
        if orbit.enabled != enabled {
            orbit.set_enabled(enabled);
        }
    }

    for mut fly in &mut fly_bindings {
        let enabled = active == ControlKind::Fly;
        if fly.enabled != enabled {
            fly.enabled = enabled;
        }
    }
}
