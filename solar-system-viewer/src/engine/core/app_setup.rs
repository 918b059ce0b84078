use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;
use constants::render_settings::{AMBIENT_BRIGHTNESS, CLEAR_COLOUR};

// Crate engine modules
use crate::engine::assets::scene_manifest::SolarSystemManifest;
use crate::engine::camera::switching::{CameraControlPlugin, CameraSystems};
use crate::engine::core::app_state::{
    AppState, despawn_loading_overlay, spawn_loading_overlay, transition_to_running,
    transition_to_scene_ready, update_loading_text,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, resolve_manifest_system, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::scene_creator::create_scene_when_ready;
use crate::engine::loading::texture_loader::{check_texture_loading, start_texture_loading};
use crate::engine::scene::animation::spin_system;
use crate::engine::scene::grid::{HelperGridVisibility, apply_helper_grid_visibility};
use crate::engine::scene::lighting::{LightingSettings, apply_lighting_settings};
// Crate ui modules
use crate::ui::debug_panel::DebugPanelPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};

pub fn create_app() -> App {
    let mut app = App::new();

    let [r, g, b] = CLEAR_COLOUR;
    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SolarSystemManifest as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<SolarSystemManifest>::new(&["json"]))
        .add_plugins(CameraControlPlugin)
        .add_plugins(DebugPanelPlugin)
        .insert_resource(ClearColor(Color::srgb_u8(r, g, b)))
        .insert_resource(AmbientLight {
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        });

    // Initialise resources early
    app.init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>();

    // Camera input and controls wait for the scene.
    app.configure_sets(
        Update,
        (
            CameraSystems::Input,
            CameraSystems::ModeSwitch,
            CameraSystems::Controls,
        )
            .run_if(in_state(AppState::Running)),
    );

    // State-based system scheduling
    app.add_systems(Startup, (start_loading, spawn_loading_overlay).chain())
        .add_systems(
            Update,
            (
                // Loading phase systems
                resolve_manifest_system,
                start_texture_loading,
                create_scene_when_ready,
                check_texture_loading,
                update_loading_text,
                transition_to_scene_ready,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(
            Update,
            transition_to_running.run_if(in_state(AppState::SceneReady)),
        )
        .add_systems(OnEnter(AppState::Running), despawn_loading_overlay);

    // Runtime systems - only run when everything is ready
    app.add_systems(
        Update,
        (
            spin_system,
            apply_lighting_settings.run_if(resource_exists_and_changed::<LightingSettings>),
            apply_helper_grid_visibility
                .run_if(resource_exists_and_changed::<HelperGridVisibility>),
        )
            .run_if(in_state(AppState::Running)),
    );

    // FPS overlay only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
