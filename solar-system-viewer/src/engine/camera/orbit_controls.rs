use std::f32::consts::FRAC_PI_2;

use bevy::input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use super::bindings::OrbitControls;
use super::switching::InputCapture;

/// Pointer input gathered for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitInput {
    /// Drag delta in pixels while rotating.
    pub rotate: Vec2,
    /// Drag delta in pixels while panning.
    pub pan: Vec2,
    /// Wheel movement in lines, positive away from the user.
    pub zoom_lines: f32,
}

/// Advance an orbit binding by one frame.
///
/// Spherical coordinates are taken from the camera's current pose. A settled
/// binding with no input leaves the pose untouched, even when the camera is
/// not aimed at `target`.
pub fn orbit_step(
    controls: &mut OrbitControls,
    transform: &mut Transform,
    projection: &mut Projection,
    input: &OrbitInput,
) {
    if controls.is_settled() && *input == OrbitInput::default() {
        return;
    }

    let settings = controls.settings;

    let offset = transform.translation - controls.target;
    let mut radius = offset.length().max(f32::EPSILON);
    let mut yaw = offset.x.atan2(offset.z);
    let mut pitch = (offset.y / radius).clamp(-1.0, 1.0).asin();

    controls.rotate_velocity += -input.rotate * settings.rotate_speed;
    if settings.enable_pan && input.pan != Vec2::ZERO {
        controls.pan_velocity += Vec2::new(-input.pan.x, input.pan.y) * settings.pan_speed * radius;
    }

    let factor = if settings.enable_damping {
        settings.damping_factor
    } else {
        1.0
    };

    yaw += controls.rotate_velocity.x * factor;
    pitch += controls.rotate_velocity.y * factor;
    let pitch_limit = FRAC_PI_2 - settings.pole_margin;
    pitch = pitch.clamp(-pitch_limit, pitch_limit);

    let right = *transform.right();
    let up = *transform.up();
    controls.target += (right * controls.pan_velocity.x + up * controls.pan_velocity.y) * factor;

    if input.zoom_lines.abs() > f32::EPSILON {
        let zoom = settings.zoom_speed.powf(input.zoom_lines);
        match projection {
            Projection::Orthographic(ortho) => {
                ortho.scale =
                    (ortho.scale * zoom).clamp(settings.min_ortho_scale, settings.max_ortho_scale);
            }
            _ => radius *= zoom,
        }
    }
    radius = radius.clamp(settings.min_distance, settings.max_distance);

    if settings.enable_damping {
        controls.rotate_velocity *= 1.0 - settings.damping_factor;
        controls.pan_velocity *= 1.0 - settings.damping_factor;
        if controls.rotate_velocity.length_squared() < 1e-12 {
            controls.rotate_velocity = Vec2::ZERO;
        }
        if controls.pan_velocity.length_squared() < 1e-12 {
            controls.pan_velocity = Vec2::ZERO;
        }
    } else {
        controls.rotate_velocity = Vec2::ZERO;
        controls.pan_velocity = Vec2::ZERO;
    }

    let offset = Vec3::new(
        radius * pitch.cos() * yaw.sin(),
        radius * pitch.sin(),
        radius * pitch.cos() * yaw.cos(),
    );
    transform.translation = controls.target + offset;
    transform.look_at(controls.target, Vec3::Y);
}

pub fn orbit_controls_system(
    mut cameras: Query<(&mut Transform, &mut Projection, &mut OrbitControls)>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll_events: EventReader<MouseWheel>,
    capture: Res<InputCapture>,
) {
    let mouse_delta: Vec2 = mouse_motion.read().map(|m| m.delta).sum();

    let mut scroll_accum = 0.0;
    for ev in scroll_events.read() {
        scroll_accum += match ev.unit {
            MouseScrollUnit::Line => ev.y,
            MouseScrollUnit::Pixel => ev.y * 0.05,
        };
    }

    let input = if capture.pointer_captured {
        OrbitInput::default()
    } else {
        OrbitInput {
            rotate: if mouse_button.pressed(MouseButton::Left) {
                mouse_delta
            } else {
                Vec2::ZERO
            },
            pan: if mouse_button.any_pressed([MouseButton::Right, MouseButton::Middle]) {
                mouse_delta
            } else {
                Vec2::ZERO
            },
            zoom_lines: scroll_accum,
        }
    };

    for (mut transform, mut projection, mut controls) in &mut cameras {
        if !controls.enabled {
            continue;
        }
        orbit_step(&mut controls, &mut transform, &mut projection, &input);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::camera::pose::Pose;
    use constants::controls::CONTROL_SETTINGS;

    fn start() -> (OrbitControls, Transform, Projection) {
        (
            OrbitControls::new(CONTROL_SETTINGS.orbit, 0, true),
            Transform::from_xyz(0.0, 30.0, -30.0).looking_at(Vec3::ZERO, Vec3::Y),
            Projection::Perspective(PerspectiveProjection::default()),
        )
    }

    #[test]
    fn idle_binding_keeps_pose() {
        let (mut controls, mut transform, mut projection) = start();
        let before = Pose::of(&transform);

        for _ in 0..10 {
            orbit_step(&mut controls, &mut transform, &mut projection, &OrbitInput::default());
        }

        assert!(Pose::of(&transform).approx_eq(&before, 1e-4));
    }

    #[test]
    fn idle_binding_does_not_snap_to_target() {
        let (mut controls, _, mut projection) = start();
        let mut transform = Transform::from_xyz(5.0, 2.0, 40.0).looking_at(Vec3::X * 20.0, Vec3::Y);
        let before = transform;

        orbit_step(&mut controls, &mut transform, &mut projection, &OrbitInput::default());

        assert_eq!(transform, before);
    }

    #[test]
    fn zoom_is_clamped_to_distance_limits() {
        let (mut controls, mut transform, mut projection) = start();
        let zoom_in = OrbitInput {
            zoom_lines: 200.0,
            ..default()
        };
        orbit_step(&mut controls, &mut transform, &mut projection, &zoom_in);
        let distance = transform.translation.distance(controls.target);
        assert!((distance - CONTROL_SETTINGS.orbit.min_distance).abs() < 1e-3);

        let zoom_out = OrbitInput {
            zoom_lines: -500.0,
            ..default()
        };
        orbit_step(&mut controls, &mut transform, &mut projection, &zoom_out);
        let distance = transform.translation.distance(controls.target);
        assert!((distance - CONTROL_SETTINGS.orbit.max_distance).abs() < 1e-2);
    }

    #[test]
    fn orthographic_zoom_scales_projection() {
        let (mut controls, mut transform, _) = start();
        let mut projection = Projection::Orthographic(OrthographicProjection::default_3d());
        let distance_before = transform.translation.length();

        let zoom_in = OrbitInput {
            zoom_lines: 2.0,
            ..default()
        };
        orbit_step(&mut controls, &mut transform, &mut projection, &zoom_in);

        let Projection::Orthographic(ortho) = &projection else {
            panic!("projection variant changed");
        };
        assert!(ortho.scale < 1.0);
        assert!((transform.translation.length() - distance_before).abs() < 1e-3);
    }

    #[test]
    fn drag_rotates_with_damping_and_keeps_looking_at_target() {
        let (mut controls, mut transform, mut projection) = start();
        let drag = OrbitInput {
            rotate: Vec2::new(100.0, 0.0),
            ..default()
        };
        orbit_step(&mut controls, &mut transform, &mut projection, &drag);
        let after_first = transform.translation;
        assert!(!controls.is_settled());

        orbit_step(&mut controls, &mut transform, &mut projection, &OrbitInput::default());
        assert_ne!(transform.translation, after_first);

        let forward = *transform.forward();
        let to_target = (controls.target - transform.translation).normalize();
        assert!(forward.abs_diff_eq(to_target, 1e-4));
        let distance = transform.translation.distance(controls.target);
        assert!((distance - 30.0 * std::f32::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn pitch_stops_short_of_pole() {
        let (mut controls, mut transform, mut projection) = start();
        let drag_up = OrbitInput {
            rotate: Vec2::new(0.0, -100_000.0),
            ..default()
        };
        for _ in 0..50 {
            orbit_step(&mut controls, &mut transform, &mut projection, &drag_up);
        }
        assert!(transform.translation.x.is_finite());
        let offset = transform.translation - controls.target;
        let horizontal = Vec2::new(offset.x, offset.z).length();
        assert!(horizontal > 0.0);
    }

    #[test]
    fn pan_moves_target() {
        let (mut controls, mut transform, mut projection) = start();
        let pan = OrbitInput {
            pan: Vec2::new(50.0, 0.0),
            ..default()
        };
        orbit_step(&mut controls, &mut transform, &mut projection, &pan);
        assert_ne!(controls.target, Vec3::ZERO);
    }
}
