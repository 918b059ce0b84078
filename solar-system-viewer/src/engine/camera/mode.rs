use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Projection variant of a view camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraKind {
    Perspective,
    Orthographic,
}

impl CameraKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Perspective => "Perspective",
            Self::Orthographic => "Orthographic",
        }
    }
}

/// Input control scheme bound to the active camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlKind {
    Orbit,
    Fly,
}

impl ControlKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Orbit => "Orbit",
            Self::Fly => "Fly",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Orbit => Self::Fly,
            Self::Fly => Self::Orbit,
        }
    }
}

/// Active camera and enabled control scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraMode {
    pub camera: CameraKind,
    pub control: ControlKind,
}

impl Default for CameraMode {
    fn default() -> Self {
        Self {
            camera: CameraKind::Perspective,
            control: ControlKind::Fly,
        }
    }
}

/// Work the ECS side must carry out after the coordinator accepted a camera switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraSwitch {
    /// Camera whose pose is copied and which loses its bindings.
    pub from: Entity,
    /// Camera that becomes active and receives the new bindings.
    pub to: Entity,
    /// Scheme to enable on the new bindings.
    pub control: ControlKind,
    /// Generation stamped on the new bindings.
    pub generation: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlToggle {
    pub disabled: ControlKind,
    pub enabled: ControlKind,
}

/// Owns both view cameras and decides which camera and control scheme are active.
///
/// The coordinator is a pure state machine: it never touches the world itself.
/// Each operation returns the work to perform, which `switching` applies within
/// a single frame.
#[derive(Resource, Debug, Clone)]
pub struct CameraModeCoordinator {
    perspective: Entity,
    orthographic: Entity,
    mode: CameraMode,
    binding_generation: u32,
}

impl CameraModeCoordinator {
    pub fn new(perspective: Entity, orthographic: Entity, initial: CameraMode) -> Self {
        Self {
            perspective,
            orthographic,
            mode: initial,
            binding_generation: 0,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn active_camera(&self) -> CameraKind {
        self.mode.camera
    }

    pub fn active_control(&self) -> ControlKind {
        self.mode.control
    }

    pub fn camera_entity(&self, kind: CameraKind) -> Entity {
        match kind {
            CameraKind::Perspective => self.perspective,
            CameraKind::Orthographic => self.orthographic,
        }
    }

    pub fn active_camera_entity(&self) -> Entity {
        self.camera_entity(self.mode.camera)
    }

    /// Generation of the control bindings currently attached to the active camera.
    pub fn binding_generation(&self) -> u32 {
        self.binding_generation
    }

    /// Make `kind` the active camera. Returns `None` when it already is.
    pub fn switch_to(&mut self, kind: CameraKind) -> Option<CameraSwitch> {
        if self.mode.camera == kind {
            return None;
        }

        let from = self.active_camera_entity();
        self.mode.camera = kind;
        self.binding_generation = self.binding_generation.wrapping_add(1);

        Some(CameraSwitch {
            from,
            to: self.camera_entity(kind),
            control: self.mode.control,
            generation: self.binding_generation,
        })
    }

    pub fn switch_to_orthographic(&mut self) -> Option<CameraSwitch> {
        self.switch_to(CameraKind::Orthographic)
    }

    pub fn switch_to_perspective(&mut self) -> Option<CameraSwitch> {
        self.switch_to(CameraKind::Perspective)
    }

    /// Flip between orbit and fly without touching the active camera.
    pub fn toggle_control_scheme(&mut self) -> ControlToggle {
        let disabled = self.mode.control;
        self.mode.control = disabled.other();
        ControlToggle {
            disabled,
            enabled: self.mode.control,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator() -> CameraModeCoordinator {
        CameraModeCoordinator::new(
            Entity::from_raw(1),
            Entity::from_raw(2),
            CameraMode::default(),
        )
    }

    #[test]
    fn starts_in_perspective_fly() {
        let coordinator = coordinator();
        assert_eq!(coordinator.active_camera(), CameraKind::Perspective);
        assert_eq!(coordinator.active_control(), ControlKind::Fly);
        assert_eq!(coordinator.active_camera_entity(), Entity::from_raw(1));
        assert_eq!(coordinator.binding_generation(), 0);
    }

    #[test]
    fn switch_plans_handover_between_cameras() {
        let mut coordinator = coordinator();
        let switch = coordinator.switch_to_orthographic().unwrap();

        assert_eq!(switch.from, Entity::from_raw(1));
        assert_eq!(switch.to, Entity::from_raw(2));
        assert_eq!(switch.control, ControlKind::Fly);
        assert_eq!(switch.generation, 1);
        assert_eq!(coordinator.active_camera_entity(), Entity::from_raw(2));
    }

    #[test]
    fn repeated_switch_is_a_no_op() {
        let mut once = coordinator();
        once.switch_to_orthographic();

        let mut twice = coordinator();
        twice.switch_to_orthographic();
        assert!(twice.switch_to_orthographic().is_none());

        assert_eq!(once.mode(), twice.mode());
        assert_eq!(once.binding_generation(), twice.binding_generation());
    }

    #[test]
    fn switching_to_active_camera_keeps_generation() {
        let mut coordinator = coordinator();
        assert!(coordinator.switch_to_perspective().is_none());
        assert_eq!(coordinator.binding_generation(), 0);
    }

    #[test]
    fn toggle_keeps_camera() {
        let mut coordinator = coordinator();
        coordinator.switch_to_orthographic();

        let toggle = coordinator.toggle_control_scheme();
        assert_eq!(toggle.disabled, ControlKind::Fly);
        assert_eq!(toggle.enabled, ControlKind::Orbit);
        assert_eq!(coordinator.active_camera(), CameraKind::Orthographic);
        assert_eq!(coordinator.binding_generation(), 1);

        coordinator.toggle_control_scheme();
        assert_eq!(coordinator.active_control(), ControlKind::Fly);
    }

    #[test]
    fn switch_carries_current_control_scheme() {
        let mut coordinator = coordinator();
        coordinator.toggle_control_scheme();
        let switch = coordinator.switch_to_orthographic().unwrap();
        assert_eq!(switch.control, ControlKind::Orbit);

        let back = coordinator.switch_to_perspective().unwrap();
        assert_eq!(back.from, Entity::from_raw(2));
        assert_eq!(back.to, Entity::from_raw(1));
        assert_eq!(back.generation, 2);
    }

    #[test]
    fn generation_counts_effective_switches_over_all_sequences() {
        // Every sequence of four operations drawn from {o, p, n}.
        for sequence in 0..81u32 {
            let mut coordinator = coordinator();
            let mut expected_camera = CameraKind::Perspective;
            let mut expected_control = ControlKind::Fly;
            let mut switches = 0;

            let mut code = sequence;
            for _ in 0..4 {
                match code % 3 {
                    0 => {
                        if coordinator.switch_to_orthographic().is_some() {
                            switches += 1;
                        }
                        expected_camera = CameraKind::Orthographic;
                    }
                    1 => {
                        if coordinator.switch_to_perspective().is_some() {
                            switches += 1;
                        }
                        expected_camera = CameraKind::Perspective;
                    }
                    _ => {
                        coordinator.toggle_control_scheme();
                        expected_control = expected_control.other();
                    }
                }
                code /= 3;

                assert_eq!(coordinator.active_camera(), expected_camera);
                assert_eq!(coordinator.active_control(), expected_control);
                assert_eq!(
                    coordinator.active_camera_entity(),
                    coordinator.camera_entity(expected_camera)
                );
                assert_eq!(coordinator.binding_generation(), switches);
            }
        }
    }

    #[test]
    fn kinds_deserialise_from_lowercase() {
        let camera: CameraKind = serde_json::from_str("\"orthographic\"").unwrap();
        let control: ControlKind = serde_json::from_str("\"orbit\"").unwrap();
        assert_eq!(camera, CameraKind::Orthographic);
        assert_eq!(control, ControlKind::Orbit);
    }
}
