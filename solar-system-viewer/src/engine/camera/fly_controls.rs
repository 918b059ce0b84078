use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;

use super::bindings::FlyControls;
use super::switching::InputCapture;

/// Keyboard and mouse input gathered for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlyInput {
    /// Movement along the camera's local axes, each component in -1..=1.
    pub translate: Vec3,
    /// Keyboard pitch (x), yaw (y) and roll (z), each in -1..=1.
    pub rotate: Vec3,
    /// Mouse look delta in pixels.
    pub look: Vec2,
    pub boost: bool,
}

impl FlyInput {
    pub fn from_keyboard(keyboard: &ButtonInput<KeyCode>) -> Self {
        let axis = |positive: KeyCode, negative: KeyCode| {
            keyboard.pressed(positive) as i32 as f32 - keyboard.pressed(negative) as i32 as f32
        };

        Self {
            translate: Vec3::new(
                axis(KeyCode::KeyD, KeyCode::KeyA),
                axis(KeyCode::KeyR, KeyCode::KeyF),
                axis(KeyCode::KeyS, KeyCode::KeyW),
            ),
            rotate: Vec3::new(
                axis(KeyCode::ArrowUp, KeyCode::ArrowDown),
                axis(KeyCode::ArrowLeft, KeyCode::ArrowRight),
                axis(KeyCode::KeyQ, KeyCode::KeyE),
            ),
            look: Vec2::ZERO,
            boost: keyboard.any_pressed([KeyCode::ShiftLeft, KeyCode::ShiftRight]),
        }
    }
}

/// Advance a fly binding by `dt` seconds. Motion is expressed in the camera's local frame.
pub fn fly_step(controls: &FlyControls, transform: &mut Transform, input: &FlyInput, dt: f32) {
    let settings = controls.settings;

    if input.translate != Vec3::ZERO {
        let mut speed = settings.movement_speed;
        if input.boost {
            speed *= settings.boost_factor;
        }
        let local = input.translate.normalize();
        transform.translation += transform.rotation * local * speed * dt;
    }

    let keyboard_step = settings.roll_speed * dt;
    let pitch = input.rotate.x * keyboard_step - input.look.y * settings.look_sensitivity;
    let yaw = input.rotate.y * keyboard_step - input.look.x * settings.look_sensitivity;
    let roll = input.rotate.z * keyboard_step;

    if pitch != 0.0 || yaw != 0.0 || roll != 0.0 {
        let delta = Quat::from_euler(EulerRot::YXZ, yaw, pitch, roll);
        transform.rotation = (transform.rotation * delta).normalize();
    }
}

pub fn fly_controls_system(
    mut cameras: Query<(&mut Transform, &FlyControls)>,
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    capture: Res<InputCapture>,
    time: Res<Time>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();
    let mut input = FlyInput::from_keyboard(&keyboard);

    for (mut transform, controls) in &mut cameras {
        if !controls.enabled {
            continue;
        }

        let looking = !controls.settings.drag_to_look || mouse_button.pressed(MouseButton::Left);
        input.look = if looking && !capture.pointer_captured {
            mouse_delta
        } else {
            Vec2::ZERO
        };

        fly_step(controls, &mut transform, &input, time.delta_secs());
    }
}
