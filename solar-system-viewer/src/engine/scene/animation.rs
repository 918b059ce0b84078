use bevy::prelude::*;

/// Continuous rotation about the parent's Y axis, in radians per second.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub rate: f32,
}

/// Rotates every spinning node. Rotation is applied in the parent frame, so a
/// tilted node keeps its tilt while it turns.
pub fn spin_system(time: Res<Time>, mut spinners: Query<(&Spin, &mut Transform)>) {
    let dt = time.delta_secs();
    for (spin, mut transform) in &mut spinners {
        transform.rotate_y(spin.rate * dt);
    }
}
