use bevy::prelude::*;
use bevy::render::camera::ScalingMode;
use bevy::ui::IsDefaultUiCamera;
use constants::render_settings::{
    CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_LOOK_AT, CAMERA_NEAR, CAMERA_START_POSITION,
    ORTHOGRAPHIC_VIEW_HEIGHT,
};

use super::bindings::bind_controls;
use super::mode::{CameraKind, CameraMode, CameraModeCoordinator};
use crate::engine::assets::scene_manifest::CameraManifest;

/// Marks one of the two view cameras owned by the coordinator.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewCamera(pub CameraKind);

/// Placement and projection parameters shared by both view cameras.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRigConfig {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
    pub look_at: Vec3,
    pub orthographic_view_height: f32,
    pub initial: CameraMode,
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: CAMERA_START_POSITION,
            look_at: CAMERA_LOOK_AT,
            orthographic_view_height: ORTHOGRAPHIC_VIEW_HEIGHT,
            initial: CameraMode::default(),
        }
    }
}

impl From<&CameraManifest> for CameraRigConfig {
    fn from(manifest: &CameraManifest) -> Self {
        Self {
            fov_degrees: manifest.fov_degrees,
            near: manifest.near,
            far: manifest.far,
            position: Vec3::from_array(manifest.position),
            look_at: Vec3::from_array(manifest.look_at),
            orthographic_view_height: manifest.orthographic_view_height,
            initial: manifest.initial_mode(),
        }
    }
}

impl CameraRigConfig {
    fn start_transform(&self) -> Transform {
        Transform::from_translation(self.position).looking_at(self.look_at, Vec3::Y)
    }

    fn projection(&self, kind: CameraKind) -> Projection {
        match kind {
            CameraKind::Perspective => Projection::from(PerspectiveProjection {
                fov: self.fov_degrees.to_radians(),
                near: self.near,
                far: self.far,
                ..default()
            }),
            CameraKind::Orthographic => Projection::from(OrthographicProjection {
                near: self.near,
                far: self.far,
                scaling_mode: ScalingMode::FixedVertical {
                    viewport_height: self.orthographic_view_height,
                },
                ..OrthographicProjection::default_3d()
            }),
        }
    }
}

/// Spawn both view cameras at the same pose, bind controls to the initial camera
/// and insert the coordinator resource.
pub fn spawn_camera_rig(commands: &mut Commands, config: &CameraRigConfig) -> CameraModeCoordinator {
    let mut spawn = |kind: CameraKind| {
        commands
            .spawn((
                Name::new(format!("{} Camera", kind.label())),
                Camera3d::default(),
                Camera {
                    is_active: config.initial.camera == kind,
                    ..default()
                },
                config.projection(kind),
                config.start_transform(),
                ViewCamera(kind),
            ))
            .id()
    };

    let perspective = spawn(CameraKind::Perspective);
    let orthographic = spawn(CameraKind::Orthographic);

    let coordinator = CameraModeCoordinator::new(perspective, orthographic, config.initial);
    // Both cameras share an order, so the UI target has to be explicit.
    commands
        .entity(coordinator.active_camera_entity())
        .insert(IsDefaultUiCamera);
    bind_controls(
        commands,
        coordinator.active_camera_entity(),
        config.initial.control,
        coordinator.binding_generation(),
    );
    commands.insert_resource(coordinator.clone());

    info!(
        "Camera rig ready: {} camera, {} controls",
        config.initial.camera.label(),
        config.initial.control.label()
    );

    coordinator
}
