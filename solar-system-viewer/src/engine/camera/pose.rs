use bevy::prelude::*;

/// Position and orientation of a camera, without scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Pose {
    pub fn of(transform: &Transform) -> Self {
        Self {
            translation: transform.translation,
            rotation: transform.rotation,
        }
    }

    /// Overwrite translation and rotation, leaving scale untouched.
    pub fn apply_to(&self, transform: &mut Transform) {
        transform.translation = self.translation;
        transform.rotation = self.rotation;
    }

    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Compare within `tolerance`, treating `q` and `-q` as the same orientation.
    pub fn approx_eq(&self, other: &Pose, tolerance: f32) -> bool {
        self.translation.abs_diff_eq(other.translation, tolerance)
            && (self.rotation.abs_diff_eq(other.rotation, tolerance)
                || self.rotation.abs_diff_eq(-other.rotation, tolerance))
    }
}
