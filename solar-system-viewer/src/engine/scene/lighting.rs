use bevy::prelude::*;
use constants::render_settings::{
    AMBIENT_BRIGHTNESS, AMBIENT_BRIGHTNESS_RANGE, LIGHT_STEP_FACTOR, LIGHT_STEP_FLOOR,
    SUN_INTENSITY, SUN_INTENSITY_RANGE,
};

use crate::engine::assets::scene_manifest::LightingManifest;

/// Marks the point light carried by the sun.
#[derive(Component)]
pub struct SunLight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightTarget {
    Ambient,
    Sun,
}

impl LightTarget {
    pub const ALL: [LightTarget; 2] = [Self::Ambient, Self::Sun];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Ambient => "Ambient",
            Self::Sun => "Sun",
        }
    }

    pub fn range(&self) -> (f32, f32) {
        match self {
            Self::Ambient => AMBIENT_BRIGHTNESS_RANGE,
            Self::Sun => SUN_INTENSITY_RANGE,
        }
    }
}

/// Current light levels. Changes are pushed to the scene by [`apply_lighting_settings`].
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct LightingSettings {
    pub ambient_brightness: f32,
    pub sun_intensity: f32,
}

impl Default for LightingSettings {
    fn default() -> Self {
        Self {
            ambient_brightness: AMBIENT_BRIGHTNESS,
            sun_intensity: SUN_INTENSITY,
        }
    }
}

impl From<&LightingManifest> for LightingSettings {
    fn from(manifest: &LightingManifest) -> Self {
        Self {
            ambient_brightness: manifest.ambient_brightness,
            sun_intensity: manifest.sun_intensity,
        }
    }
}

impl LightingSettings {
    pub fn get(&self, target: LightTarget) -> f32 {
        match target {
            LightTarget::Ambient => self.ambient_brightness,
            LightTarget::Sun => self.sun_intensity,
        }
    }

    /// Scale a light up or down by one step, clamped to its range.
    /// Stepping up from zero restarts at the floor value.
    pub fn step(&mut self, target: LightTarget, up: bool) -> f32 {
        let current = self.get(target);
        let next = if up {
            (current * LIGHT_STEP_FACTOR).max(LIGHT_STEP_FLOOR)
        } else if current <= LIGHT_STEP_FLOOR {
            0.0
        } else {
            current / LIGHT_STEP_FACTOR
        };

        let (min, max) = target.range();
        let next = next.clamp(min, max);
        match target {
            LightTarget::Ambient => self.ambient_brightness = next,
            LightTarget::Sun => self.sun_intensity = next,
        }
        next
    }
}

pub fn apply_lighting_settings(
    settings: Res<LightingSettings>,
    mut ambient: ResMut<AmbientLight>,
    mut sun_lights: Query<&mut PointLight, With<SunLight>>,
) {
    ambient.brightness = settings.ambient_brightness;
    for mut light in &mut sun_lights {
        light.intensity = settings.sun_intensity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn step_is_multiplicative() {
        let mut settings = LightingSettings::default();
        let up = settings.step(LightTarget::Ambient, true);
        assert!((up - AMBIENT_BRIGHTNESS * LIGHT_STEP_FACTOR).abs() < 1e-3);

        let down = settings.step(LightTarget::Ambient, false);
        assert!((down - AMBIENT_BRIGHTNESS).abs() < 1e-3);
    }

    #[test]
    fn step_clamps_to_range() {
        let mut settings = LightingSettings {
            ambient_brightness: AMBIENT_BRIGHTNESS_RANGE.1,
            sun_intensity: 0.5,
        };

        assert_eq!(
            settings.step(LightTarget::Ambient, true),
            AMBIENT_BRIGHTNESS_RANGE.1
        );
        assert_eq!(settings.step(LightTarget::Sun, false), 0.0);
        assert_eq!(settings.step(LightTarget::Sun, false), 0.0);
        assert_eq!(settings.step(LightTarget::Sun, true), LIGHT_STEP_FLOOR);
    }

    #[test]
    fn settings_reach_scene_lights() {
        let mut world = World::new();
        world.insert_resource(AmbientLight::default());
        world.insert_resource(LightingSettings {
            ambient_brightness: 12.0,
            sun_intensity: 3_000.0,
        });
        let sun = world.spawn((PointLight::default(), SunLight)).id();
        let other = world.spawn(PointLight::default()).id();
        let untouched = world.get::<PointLight>(other).unwrap().intensity;

        world.run_system_once(apply_lighting_settings).unwrap();

        assert_eq!(world.resource::<AmbientLight>().brightness, 12.0);
        assert_eq!(world.get::<PointLight>(sun).unwrap().intensity, 3_000.0);
        assert_eq!(world.get::<PointLight>(other).unwrap().intensity, untouched);
    }
}
