//! Collapsible debug panel on the right edge of the window.
//!
//! Shows the active camera and control scheme (read only), one toggle per
//! helper grid and `-`/`+` steps for the ambient and sun lights. The panel
//! only edits [`HelperGridVisibility`] and [`LightingSettings`]; scene
//! systems push those resources into the world. Camera mode changes stay on
//! the keyboard, so the camera coordinator never depends on the panel.
//!
//! While the pointer is over the panel, [`InputCapture`] is set and the
//! camera bindings ignore mouse drags and scrolls.
//!
//! [`HelperGridVisibility`]: crate::engine::scene::grid::HelperGridVisibility
//! [`LightingSettings`]: crate::engine::scene::lighting::LightingSettings
//! [`InputCapture`]: crate::engine::camera::switching::InputCapture

/// Button interactions for collapse, helper toggles and light steps.
///
/// Also owns pointer capture for the camera bindings.
pub mod interactions;

/// Panel state resource, marker components and label text.
pub mod state;

/// Panel spawning and the systems that mirror resources into it.
pub mod ui;

use bevy::prelude::*;

pub use state::DebugPanelUiState;

use crate::engine::camera::mode::CameraModeCoordinator;
use crate::engine::camera::switching::CameraSystems;
use crate::engine::core::app_state::AppState;
use crate::engine::scene::grid::HelperGridVisibility;
use crate::engine::scene::lighting::LightingSettings;

use interactions::{
    collapse_button_interaction, helper_toggle_button_interaction,
    light_step_button_interaction, pointer_capture_system,
};
use ui::{
    apply_collapse_state, reflect_camera_status, reflect_helper_toggles, reflect_light_values,
    spawn_debug_panel,
};

// Registers the debug panel, its state and systems.
pub struct DebugPanelPlugin;

impl Plugin for DebugPanelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugPanelUiState>()
            .add_systems(Startup, spawn_debug_panel)
            .add_systems(
                Update,
                (
                    collapse_button_interaction,
                    apply_collapse_state,
                    pointer_capture_system.before(CameraSystems::Input),
                ),
            )
            .add_systems(
                Update,
                (
                    helper_toggle_button_interaction,
                    light_step_button_interaction,
                    reflect_helper_toggles
                        .after(helper_toggle_button_interaction)
                        .run_if(resource_exists_and_changed::<HelperGridVisibility>),
                    reflect_light_values
                        .after(light_step_button_interaction)
                        .run_if(resource_exists_and_changed::<LightingSettings>),
                    reflect_camera_status
                        .after(CameraSystems::ModeSwitch)
                        .run_if(resource_exists_and_changed::<CameraModeCoordinator>),
                )
                    .run_if(in_state(AppState::Running)),
            );
    }
}
