use bevy::prelude::*;

use super::scene_manifest::TextureManifest;

/// Colour maps of the celestial bodies.
#[derive(Resource, Debug, Clone, Default)]
pub struct CelestialTextures {
    pub sun: Handle<Image>,
    pub earth: Handle<Image>,
    pub moon: Handle<Image>,
    pub flat_earth: Handle<Image>,
}

impl CelestialTextures {
    /// Start loading every map listed in the manifest.
    pub fn load(asset_server: &AssetServer, paths: &TextureManifest) -> Self {
        info!(
            "Loading textures: {}, {}, {}, {}",
            paths.sun, paths.earth, paths.moon, paths.flat_earth
        );
        Self {
            sun: asset_server.load(paths.sun.clone()),
            earth: asset_server.load(paths.earth.clone()),
            moon: asset_server.load(paths.moon.clone()),
            flat_earth: asset_server.load(paths.flat_earth.clone()),
        }
    }

    /// Handles paired with a display name, for progress reporting.
    pub fn labelled(&self) -> [(&'static str, &Handle<Image>); 4] {
        [
            ("Sun", &self.sun),
            ("Earth", &self.earth),
            ("Moon", &self.moon),
            ("Flat Earth", &self.flat_earth),
        ]
    }
}
