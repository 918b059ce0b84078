use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::texture::MANIFEST_PATH;

use crate::engine::assets::scene_manifest::SolarSystemManifest;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SolarSystemManifest>>,
}

pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    info!("Loading scene manifest: {}", MANIFEST_PATH);
    manifest_loader.handle = Some(asset_server.load(MANIFEST_PATH));
}

/// Insert the manifest resource once the asset is available.
/// A failed load or a manifest that does not validate falls back to defaults.
pub fn resolve_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SolarSystemManifest>>,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(handle) = &manifest_loader.handle else {
        return;
    };

    let resolved = match manifests.get(handle) {
        Some(manifest) => Some(accept_manifest(manifest.clone())),
        None => match asset_server.get_load_state(handle) {
            Some(LoadState::Failed(err)) => {
                warn!("Scene manifest failed to load, using defaults: {err}");
                Some(SolarSystemManifest::default())
            }
            _ => None,
        },
    };

    if let Some(manifest) = resolved {
        commands.insert_resource(manifest);
        loading_progress.manifest_resolved = true;
    }
}

/// Validated manifest, or the defaults when validation fails.
pub fn accept_manifest(manifest: SolarSystemManifest) -> SolarSystemManifest {
    match manifest.validate() {
        Ok(()) => {
            info!("✓ Scene manifest loaded");
            manifest
        }
        Err(err) => {
            warn!("Scene manifest rejected, using defaults: {err}");
            SolarSystemManifest::default()
        }
    }
}
