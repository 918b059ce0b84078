use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;

use super::bindings::{rebind_controls, sync_binding_enablement};
use super::fly_controls::fly_controls_system;
use super::mode::{CameraKind, CameraModeCoordinator, CameraSwitch};
use super::orbit_controls::orbit_controls_system;
use super::pose::Pose;
use super::rig::ViewCamera;

/// Keys bound to mode requests, polled in this order every frame.
pub const MODE_KEYS: [KeyCode; 3] = [KeyCode::KeyO, KeyCode::KeyP, KeyCode::KeyN];

/// Set while the pointer is over an interactive UI element; camera bindings ignore the mouse.
#[derive(Resource, Debug, Default)]
pub struct InputCapture {
    pub pointer_captured: bool,
}

/// A change of camera or control scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraModeAction {
    SwitchCamera(CameraKind),
    ToggleControlScheme,
}

impl CameraModeAction {
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyO => Some(Self::SwitchCamera(CameraKind::Orthographic)),
            KeyCode::KeyP => Some(Self::SwitchCamera(CameraKind::Perspective)),
            KeyCode::KeyN => Some(Self::ToggleControlScheme),
            _ => None,
        }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraModeRequest(pub CameraModeAction);

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CameraSystems {
    /// Turns raw input into mode requests.
    Input,
    /// Applies mode requests: pose handover, activation, rebinding.
    ModeSwitch,
    /// Runs the enabled bindings against the active camera.
    Controls,
}

pub fn camera_mode_keyboard_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<CameraModeRequest>,
) {
    for key in MODE_KEYS {
        if !keyboard.just_pressed(key) {
            continue;
        }
        if let Some(action) = CameraModeAction::from_key(key) {
            requests.write(CameraModeRequest(action));
        }
    }
}

/// Apply queued mode requests in arrival order.
///
/// A camera switch copies the outgoing pose onto the incoming camera, activates
/// it and rebuilds the control bindings. Every step lands in the same frame.
pub fn apply_camera_mode_requests(
    mut commands: Commands,
    mut requests: EventReader<CameraModeRequest>,
    mut coordinator: ResMut<CameraModeCoordinator>,
    mut cameras: Query<(Entity, &mut Transform, &mut Camera), With<ViewCamera>>,
) {
    for request in requests.read() {
        match request.0 {
            CameraModeAction::SwitchCamera(kind) => {
                let planned = match kind {
                    CameraKind::Orthographic => coordinator.switch_to_orthographic(),
                    CameraKind::Perspective => coordinator.switch_to_perspective(),
                };
                let Some(switch) = planned else {
                    debug!("{} camera already active", kind.label());
                    continue;
                };

                hand_over_view(&mut cameras, &coordinator, &switch);
                retarget_ui(&mut commands, &switch);
                rebind_controls(&mut commands, &coordinator, &switch);
                info!(
                    "Camera: {} ({} controls)",
                    kind.label(),
                    switch.control.label()
                );
            }
            CameraModeAction::ToggleControlScheme => {
                let toggle = coordinator.toggle_control_scheme();
                info!(
                    "Controls: {} -> {}",
                    toggle.disabled.label(),
                    toggle.enabled.label()
                );
            }
        }
    }
}

/// UI renders through the active camera; inactive cameras are not extracted.
fn retarget_ui(commands: &mut Commands, switch: &CameraSwitch) {
    commands.entity(switch.from).remove::<IsDefaultUiCamera>();
    commands.entity(switch.to).insert(IsDefaultUiCamera);
}

fn hand_over_view(
    cameras: &mut Query<(Entity, &mut Transform, &mut Camera), With<ViewCamera>>,
    coordinator: &CameraModeCoordinator,
    switch: &CameraSwitch,
) {
    let outgoing = cameras
        .get(switch.from)
        .map(|(_, transform, _)| Pose::of(transform));
    match outgoing {
        Ok(pose) => {
            if let Ok((_, mut incoming, _)) = cameras.get_mut(switch.to) {
                pose.apply_to(&mut incoming);
            }
        }
        Err(err) => warn!("Outgoing camera missing, pose not carried over: {err}"),
    }

    let active = coordinator.active_camera_entity();
    for (entity, _, mut camera) in cameras.iter_mut() {
        let is_active = entity == active;
        if camera.is_active != is_active {
            camera.is_active = is_active;
        }
    }
}

/// Mode switching and camera controls.
///
/// Systems run once a `CameraModeCoordinator` exists; see `rig::spawn_camera_rig`.
pub struct CameraControlPlugin;

impl Plugin for CameraControlPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputCapture>()
            .add_event::<CameraModeRequest>()
            .configure_sets(
                Update,
                (
                    CameraSystems::Input,
                    CameraSystems::ModeSwitch,
                    CameraSystems::Controls,
                )
                    .chain()
                    .run_if(resource_exists::<CameraModeCoordinator>),
            )
            .add_systems(
                Update,
                camera_mode_keyboard_system.in_set(CameraSystems::Input),
            )
            .add_systems(
                Update,
                apply_camera_mode_requests.in_set(CameraSystems::ModeSwitch),
            )
            .add_systems(
                Update,
                (
                    sync_binding_enablement
                        .run_if(resource_exists_and_changed::<CameraModeCoordinator>),
                    orbit_controls_system,
                    fly_controls_system,
                )
                    .chain()
                    .in_set(CameraSystems::Controls),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::bindings::{FlyControls, OrbitControls};
    use crate::engine::camera::mode::{CameraMode, ControlKind};
    use crate::engine::camera::rig::{CameraRigConfig, spawn_camera_rig};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::input::mouse::{MouseMotion, MouseWheel};
    use bevy::ui::DefaultUiCamera;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_event::<MouseMotion>()
            .add_event::<MouseWheel>()
            .add_plugins(CameraControlPlugin)
            .add_systems(Startup, |mut commands: Commands| {
                spawn_camera_rig(&mut commands, &CameraRigConfig::default());
            });
        app.update();
        app
    }

    fn press(app: &mut App, key: KeyCode) {
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
        app.update();
        let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(key);
        keyboard.clear();
    }

    fn mode(app: &App) -> CameraMode {
        app.world().resource::<CameraModeCoordinator>().mode()
    }

    fn camera(app: &App, kind: CameraKind) -> Entity {
        app.world()
            .resource::<CameraModeCoordinator>()
            .camera_entity(kind)
    }

    fn pose(app: &App, kind: CameraKind) -> Pose {
        Pose::of(app.world().get::<Transform>(camera(app, kind)).unwrap())
    }

    fn ui_camera(app: &mut App) -> Option<Entity> {
        app.world_mut()
            .run_system_once(|ui: DefaultUiCamera| ui.get())
            .unwrap()
    }

    fn active_cameras(app: &mut App) -> Vec<Entity> {
        let mut query = app
            .world_mut()
            .query_filtered::<(Entity, &Camera), With<ViewCamera>>();
        query
            .iter(app.world())
            .filter(|(_, camera)| camera.is_active)
            .map(|(entity, _)| entity)
            .collect()
    }

    /// Asserts the active camera carries exactly one binding pair of the current generation.
    fn assert_bindings_consistent(app: &mut App) {
        let coordinator = app.world().resource::<CameraModeCoordinator>().clone();
        let active = coordinator.active_camera_entity();

        let mut orbit_query = app.world_mut().query::<(Entity, &OrbitControls)>();
        let orbits: Vec<_> = orbit_query
            .iter(app.world())
            .map(|(e, c)| (e, c.enabled, c.generation))
            .collect();
        let mut fly_query = app.world_mut().query::<(Entity, &FlyControls)>();
        let flies: Vec<_> = fly_query
            .iter(app.world())
            .map(|(e, c)| (e, c.enabled, c.generation))
            .collect();

        let generation = coordinator.binding_generation();
        let orbit_enabled = coordinator.active_control() == ControlKind::Orbit;
        assert_eq!(orbits, vec![(active, orbit_enabled, generation)]);
        assert_eq!(flies, vec![(active, !orbit_enabled, generation)]);
    }

    #[test]
    fn starts_perspective_with_fly_bound() {
        let mut app = test_app();
        assert_eq!(mode(&app), CameraMode::default());
        assert_eq!(
            active_cameras(&mut app),
            vec![camera(&app, CameraKind::Perspective)]
        );
        assert_bindings_consistent(&mut app);
    }

    #[test]
    fn key_sequence_walks_through_modes() {
        let mut app = test_app();
        let start = pose(&app, CameraKind::Perspective);

        press(&mut app, KeyCode::KeyO);
        assert_eq!(
            mode(&app),
            CameraMode {
                camera: CameraKind::Orthographic,
                control: ControlKind::Fly
            }
        );
        assert_bindings_consistent(&mut app);
        assert!(pose(&app, CameraKind::Perspective).approx_eq(&start, 1e-5));
        assert!(pose(&app, CameraKind::Orthographic).approx_eq(&start, 1e-5));

        // Move the orthographic view so the copy back is observable.
        let orthographic = camera(&app, CameraKind::Orthographic);
        let moved = Transform::from_xyz(-9.0, 14.0, 21.0).looking_at(Vec3::new(2.0, 0.0, -3.0), Vec3::Y);
        *app.world_mut()
            .get_mut::<Transform>(orthographic)
            .unwrap() = moved;

        press(&mut app, KeyCode::KeyN);
        assert_eq!(
            mode(&app),
            CameraMode {
                camera: CameraKind::Orthographic,
                control: ControlKind::Orbit
            }
        );
        assert_bindings_consistent(&mut app);
        assert!(pose(&app, CameraKind::Orthographic).approx_eq(&Pose::of(&moved), 1e-5));

        press(&mut app, KeyCode::KeyP);
        assert_eq!(
            mode(&app),
            CameraMode {
                camera: CameraKind::Perspective,
                control: ControlKind::Orbit
            }
        );
        assert_bindings_consistent(&mut app);
        assert_eq!(
            active_cameras(&mut app),
            vec![camera(&app, CameraKind::Perspective)]
        );
        let perspective = pose(&app, CameraKind::Perspective);
        assert!(perspective.approx_eq(&pose(&app, CameraKind::Orthographic), 1e-5));
        assert!(perspective.approx_eq(&Pose::of(&moved), 1e-5));
    }

    #[test]
    fn ui_follows_active_camera() {
        let mut app = test_app();
        let active = |app: &App| {
            app.world()
                .resource::<CameraModeCoordinator>()
                .active_camera_entity()
        };
        assert_eq!(ui_camera(&mut app), Some(active(&app)));
        assert_eq!(ui_camera(&mut app), Some(camera(&app, CameraKind::Perspective)));

        press(&mut app, KeyCode::KeyO);
        assert_eq!(ui_camera(&mut app), Some(active(&app)));
        assert_eq!(ui_camera(&mut app), Some(camera(&app, CameraKind::Orthographic)));

        press(&mut app, KeyCode::KeyN);
        assert_eq!(ui_camera(&mut app), Some(camera(&app, CameraKind::Orthographic)));

        press(&mut app, KeyCode::KeyP);
        assert_eq!(ui_camera(&mut app), Some(active(&app)));
        assert_eq!(ui_camera(&mut app), Some(camera(&app, CameraKind::Perspective)));
    }

    #[test]
    fn switch_carries_pose_to_incoming_camera() {
        let mut app = test_app();
        let perspective = camera(&app, CameraKind::Perspective);
        let moved = Transform::from_xyz(12.0, 4.0, -7.0).looking_at(Vec3::new(1.0, 0.0, 2.0), Vec3::Y);
        *app.world_mut()
            .get_mut::<Transform>(perspective)
            .unwrap() = moved;

        press(&mut app, KeyCode::KeyO);

        let orthographic = camera(&app, CameraKind::Orthographic);
        let carried = app.world().get::<Transform>(orthographic).unwrap();
        assert!(Pose::of(carried).approx_eq(&Pose::of(&moved), 1e-5));
        assert_eq!(active_cameras(&mut app), vec![orthographic]);
    }

    #[test]
    fn pose_survives_switch_with_orbit_enabled() {
        let mut app = test_app();
        press(&mut app, KeyCode::KeyN);
        let perspective = camera(&app, CameraKind::Perspective);
        let aimed_off_origin = Transform::from_xyz(3.0, 8.0, 25.0).looking_at(Vec3::X * 6.0, Vec3::Y);
        *app.world_mut()
            .get_mut::<Transform>(perspective)
            .unwrap() = aimed_off_origin;

        press(&mut app, KeyCode::KeyO);

        let orthographic = camera(&app, CameraKind::Orthographic);
        let carried = app.world().get::<Transform>(orthographic).unwrap();
        assert!(Pose::of(carried).approx_eq(&Pose::of(&aimed_off_origin), 1e-5));
    }

    #[test]
    fn repeated_switch_changes_nothing() {
        let mut app = test_app();
        press(&mut app, KeyCode::KeyO);
        let generation = app
            .world()
            .resource::<CameraModeCoordinator>()
            .binding_generation();

        press(&mut app, KeyCode::KeyO);

        assert_eq!(mode(&app).camera, CameraKind::Orthographic);
        assert_eq!(
            app.world()
                .resource::<CameraModeCoordinator>()
                .binding_generation(),
            generation
        );
        assert_bindings_consistent(&mut app);
    }

    #[test]
    fn toggle_keeps_bindings_on_same_camera() {
        let mut app = test_app();
        press(&mut app, KeyCode::KeyN);
        assert_bindings_consistent(&mut app);
        press(&mut app, KeyCode::KeyN);
        assert_eq!(mode(&app), CameraMode::default());
        assert_bindings_consistent(&mut app);
        assert_eq!(
            app.world()
                .resource::<CameraModeCoordinator>()
                .binding_generation(),
            0
        );
    }

    #[test]
    fn requests_in_one_frame_apply_in_order() {
        let mut app = test_app();
        for action in [
            CameraModeAction::SwitchCamera(CameraKind::Orthographic),
            CameraModeAction::ToggleControlScheme,
            CameraModeAction::SwitchCamera(CameraKind::Perspective),
        ] {
            app.world_mut().send_event(CameraModeRequest(action));
        }
        app.update();

        assert_eq!(
            mode(&app),
            CameraMode {
                camera: CameraKind::Perspective,
                control: ControlKind::Orbit
            }
        );
        assert_bindings_consistent(&mut app);
        assert_eq!(active_cameras(&mut app).len(), 1);
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(CameraModeAction::from_key(KeyCode::KeyW), None);
        assert_eq!(
            CameraModeAction::from_key(KeyCode::KeyN),
            Some(CameraModeAction::ToggleControlScheme)
        );
    }
}
