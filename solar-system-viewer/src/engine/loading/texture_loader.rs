use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SolarSystemManifest;
use crate::engine::assets::textures::CelestialTextures;
use crate::engine::loading::progress::{LoadingProgress, TextureStatus};

/// Request every texture once the manifest is known.
pub fn start_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifest: Option<Res<SolarSystemManifest>>,
) {
    if loading_progress.textures_requested {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    commands.insert_resource(CelestialTextures::load(&asset_server, &manifest.textures));
    loading_progress.textures_requested = true;
}

pub fn check_texture_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    textures: Option<Res<CelestialTextures>>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.textures_settled {
        return;
    }
    let Some(textures) = textures else {
        return;
    };

    let states: Vec<(String, TextureStatus)> = textures
        .labelled()
        .into_iter()
        .map(|(label, handle)| {
            let status = TextureStatus::from_load_state(asset_server.get_load_state(handle));
            (label.to_string(), status)
        })
        .collect();

    if states.iter().all(|(_, status)| status.is_settled()) {
        for (label, status) in &states {
            if *status == TextureStatus::Failed {
                warn!("{label} texture failed to load; rendering untextured");
            }
        }
        info!("✓ Textures settled");
        loading_progress.textures_settled = true;
    }
    loading_progress.texture_states = states;
}
