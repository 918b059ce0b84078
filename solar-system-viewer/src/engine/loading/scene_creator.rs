use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SolarSystemManifest;
use crate::engine::assets::textures::CelestialTextures;
use crate::engine::camera::rig::{CameraRigConfig, spawn_camera_rig};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::grid::HelperGridVisibility;
use crate::engine::scene::lighting::LightingSettings;
use crate::engine::scene::solar_system::spawn_solar_system;

/// Spawn the scene graph and camera rig as soon as texture handles exist.
/// Textures may still be streaming in.
pub fn create_scene_when_ready(
    mut loading_progress: ResMut<LoadingProgress>,
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    textures: Option<Res<CelestialTextures>>,
    manifest: Option<Res<SolarSystemManifest>>,
) {
    if loading_progress.scene_created {
        return;
    }
    let (Some(textures), Some(manifest)) = (textures, manifest) else {
        return;
    };

    spawn_solar_system(
        &mut commands,
        &mut meshes,
        &mut materials,
        &textures,
        &manifest,
    );
    spawn_camera_rig(&mut commands, &CameraRigConfig::from(&manifest.camera));

    commands.insert_resource(LightingSettings::from(&manifest.lighting));
    commands.insert_resource(HelperGridVisibility::default());

    loading_progress.scene_created = true;
    info!("Scene and cameras ready");
}
