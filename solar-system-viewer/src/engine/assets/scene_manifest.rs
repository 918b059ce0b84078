use bevy::prelude::*;
use constants::celestial::{
    EARTH_ORBIT_OFFSET, FLAT_EARTH_ORBIT_OFFSET, FLAT_EARTH_TILT_DEGREES, MOON_ORBIT_OFFSET,
    MOON_SCALE, SPIN_RATE, SUN_SCALE,
};
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_BRIGHTNESS_RANGE, CAMERA_FAR, CAMERA_FOV_DEGREES, CAMERA_LOOK_AT,
    CAMERA_NEAR, CAMERA_START_POSITION, ORTHOGRAPHIC_VIEW_HEIGHT, SUN_INTENSITY,
    SUN_INTENSITY_RANGE,
};
use constants::texture::{EARTH_MAP, FLAT_EARTH_MAP, MOON_MAP, SUN_MAP};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::camera::mode::{CameraKind, CameraMode, ControlKind};

/// Reasons a manifest is rejected. The defaults are used instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ManifestError {
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must be within {min}..={max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("camera.near ({near}) must be less than camera.far ({far})")]
    ClipPlanes { near: f32, far: f32 },
    #[error("textures.{0} must not be empty")]
    EmptyTexturePath(&'static str),
}

/// Camera rig placement and the mode the viewer starts in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraManifest {
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    pub orthographic_view_height: f32,
    pub initial_camera: CameraKind,
    pub initial_control: ControlKind,
}

impl Default for CameraManifest {
    fn default() -> Self {
        let mode = CameraMode::default();
        Self {
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: CAMERA_START_POSITION.to_array(),
            look_at: CAMERA_LOOK_AT.to_array(),
            orthographic_view_height: ORTHOGRAPHIC_VIEW_HEIGHT,
            initial_camera: mode.camera,
            initial_control: mode.control,
        }
    }
}

impl CameraManifest {
    pub fn initial_mode(&self) -> CameraMode {
        CameraMode {
            camera: self.initial_camera,
            control: self.initial_control,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingManifest {
    pub ambient_brightness: f32,
    /// Sun point light intensity in lumens.
    pub sun_intensity: f32,
}

impl Default for LightingManifest {
    fn default() -> Self {
        Self {
            ambient_brightness: AMBIENT_BRIGHTNESS,
            sun_intensity: SUN_INTENSITY,
        }
    }
}

/// Distances along Z and scales of the celestial hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutManifest {
    pub sun_scale: f32,
    pub moon_scale: f32,
    pub earth_orbit_distance: f32,
    pub moon_orbit_distance: f32,
    /// Placed at negative Z, opposite the spherical Earth.
    pub flat_earth_orbit_distance: f32,
    pub flat_earth_tilt_degrees: f32,
}

impl Default for LayoutManifest {
    fn default() -> Self {
        Self {
            sun_scale: SUN_SCALE,
            moon_scale: MOON_SCALE,
            earth_orbit_distance: EARTH_ORBIT_OFFSET.z,
            moon_orbit_distance: MOON_ORBIT_OFFSET.z,
            flat_earth_orbit_distance: -FLAT_EARTH_ORBIT_OFFSET.z,
            flat_earth_tilt_degrees: FLAT_EARTH_TILT_DEGREES,
        }
    }
}

impl LayoutManifest {
    pub fn earth_orbit_offset(&self) -> Vec3 {
        Vec3::Z * self.earth_orbit_distance
    }

    pub fn moon_orbit_offset(&self) -> Vec3 {
        Vec3::Z * self.moon_orbit_distance
    }

    pub fn flat_earth_orbit_offset(&self) -> Vec3 {
        Vec3::NEG_Z * self.flat_earth_orbit_distance
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationManifest {
    /// Radians per second about each spinning node's local Y axis.
    pub spin_rate: f32,
}

impl Default for AnimationManifest {
    fn default() -> Self {
        Self {
            spin_rate: SPIN_RATE,
        }
    }
}

/// Texture paths relative to the asset root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureManifest {
    pub sun: String,
    pub earth: String,
    pub moon: String,
    pub flat_earth: String,
}

impl Default for TextureManifest {
    fn default() -> Self {
        Self {
            sun: SUN_MAP.to_string(),
            earth: EARTH_MAP.to_string(),
            moon: MOON_MAP.to_string(),
            flat_earth: FLAT_EARTH_MAP.to_string(),
        }
    }
}

/// Runtime scene configuration loaded from `solar_system.json`.
/// Every section may be omitted.
#[derive(Asset, Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypePath, Resource)]
#[serde(default)]
pub struct SolarSystemManifest {
    pub camera: CameraManifest,
    pub lighting: LightingManifest,
    pub layout: LayoutManifest,
    pub animation: AnimationManifest,
    pub textures: TextureManifest,
}

impl SolarSystemManifest {
    /// Check every value the scene builder relies on. Reports the first problem found.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let camera = &self.camera;
        in_range("camera.fov_degrees", camera.fov_degrees, (1.0, 179.0))?;
        positive("camera.near", camera.near)?;
        positive("camera.far", camera.far)?;
        if camera.near >= camera.far {
            return Err(ManifestError::ClipPlanes {
                near: camera.near,
                far: camera.far,
            });
        }
        positive("camera.orthographic_view_height", camera.orthographic_view_height)?;
        for (field, value) in camera
            .position
            .iter()
            .chain(camera.look_at.iter())
            .enumerate()
            .map(|(i, v)| (if i < 3 { "camera.position" } else { "camera.look_at" }, *v))
        {
            finite(field, value)?;
        }

        in_range(
            "lighting.ambient_brightness",
            self.lighting.ambient_brightness,
            AMBIENT_BRIGHTNESS_RANGE,
        )?;
        in_range(
            "lighting.sun_intensity",
            self.lighting.sun_intensity,
            SUN_INTENSITY_RANGE,
        )?;

        let layout = &self.layout;
        positive("layout.sun_scale", layout.sun_scale)?;
        positive("layout.moon_scale", layout.moon_scale)?;
        finite("layout.earth_orbit_distance", layout.earth_orbit_distance)?;
        finite("layout.moon_orbit_distance", layout.moon_orbit_distance)?;
        finite(
            "layout.flat_earth_orbit_distance",
            layout.flat_earth_orbit_distance,
        )?;
        finite("layout.flat_earth_tilt_degrees", layout.flat_earth_tilt_degrees)?;

        finite("animation.spin_rate", self.animation.spin_rate)?;

        for (field, path) in [
            ("sun", &self.textures.sun),
            ("earth", &self.textures.earth),
            ("moon", &self.textures.moon),
            ("flat_earth", &self.textures.flat_earth),
        ] {
            if path.trim().is_empty() {
                return Err(ManifestError::EmptyTexturePath(field));
            }
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), ManifestError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ManifestError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ManifestError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ManifestError::NotPositive { field, value })
    }
}

fn in_range(field: &'static str, value: f32, (min, max): (f32, f32)) -> Result<(), ManifestError> {
    finite(field, value)?;
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ManifestError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let manifest: SolarSystemManifest = serde_json::from_str("{}").unwrap();
        assert_eq!(manifest, SolarSystemManifest::default());
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let manifest: SolarSystemManifest = serde_json::from_str(
            r#"{ "camera": { "initial_camera": "orthographic" }, "animation": { "spin_rate": 0.5 } }"#,
        )
        .unwrap();

        assert_eq!(manifest.camera.initial_camera, CameraKind::Orthographic);
        assert_eq!(manifest.camera.initial_control, ControlKind::Fly);
        assert_eq!(manifest.camera.fov_degrees, CAMERA_FOV_DEGREES);
        assert_eq!(manifest.animation.spin_rate, 0.5);
        assert_eq!(manifest.layout, LayoutManifest::default());
    }

    #[test]
    fn default_layout_matches_scene_constants() {
        let layout = LayoutManifest::default();
        assert_eq!(layout.earth_orbit_offset(), EARTH_ORBIT_OFFSET);
        assert_eq!(layout.moon_orbit_offset(), MOON_ORBIT_OFFSET);
        assert_eq!(layout.flat_earth_orbit_offset(), FLAT_EARTH_ORBIT_OFFSET);
    }

    #[test]
    fn inverted_clip_planes_rejected() {
        let mut manifest = SolarSystemManifest::default();
        manifest.camera.near = 10.0;
        manifest.camera.far = 5.0;
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::ClipPlanes {
                near: 10.0,
                far: 5.0
            })
        );
    }

    #[test]
    fn out_of_range_light_rejected() {
        let mut manifest = SolarSystemManifest::default();
        manifest.lighting.ambient_brightness = -1.0;
        assert!(matches!(
            manifest.validate(),
            Err(ManifestError::OutOfRange {
                field: "lighting.ambient_brightness",
                ..
            })
        ));
    }

    #[test]
    fn non_finite_position_names_field() {
        let mut manifest = SolarSystemManifest::default();
        manifest.camera.look_at[1] = f32::NAN;
        assert_eq!(
            manifest.validate(),
            Err(ManifestError::NotFinite {
                field: "camera.look_at"
            })
        );
    }

    #[test]
    fn empty_texture_path_rejected() {
        let mut manifest = SolarSystemManifest::default();
        manifest.textures.moon = "  ".into();
        let err = manifest.validate().unwrap_err();
        assert_eq!(err.to_string(), "textures.moon must not be empty");
    }

    #[test]
    fn unknown_camera_kind_fails_to_parse() {
        let parsed =
            serde_json::from_str::<SolarSystemManifest>(r#"{ "camera": { "initial_camera": "fisheye" } }"#);
        assert!(parsed.is_err());
    }
}
