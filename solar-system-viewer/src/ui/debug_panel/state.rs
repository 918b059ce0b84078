use bevy::prelude::*;

use crate::engine::camera::mode::CameraMode;
use crate::engine::scene::lighting::LightTarget;
use crate::engine::scene::nodes::SceneNode;

// Resources
#[derive(Resource)]
pub struct DebugPanelUiState {
    pub collapsed: bool,
    pub open_width: f32,
    pub closed_width: f32,
}
impl Default for DebugPanelUiState {
    fn default() -> Self {
        Self {
            collapsed: false,
            open_width: 260.0,
            closed_width: 32.0,
        }
    }
}

// Components
#[derive(Component)]
pub struct DebugPanelRoot;
#[derive(Component)]
pub struct DebugPanelBody;
#[derive(Component)]
pub struct HeaderNode;
#[derive(Component)]
pub struct TitleText;
#[derive(Component)]
pub struct CollapseButton;
#[derive(Component)]
pub struct CollapseLabel;
#[derive(Component)]
pub struct CameraStatusLabel;

/// Shows or hides the helper grid of one scene node.
#[derive(Component, Clone, Copy)]
pub struct HelperToggleButton(pub SceneNode);

/// Steps one light up or down.
#[derive(Component, Clone, Copy)]
pub struct LightStepButton {
    pub target: LightTarget,
    pub up: bool,
}

#[derive(Component, Clone, Copy)]
pub struct LightValueLabel(pub LightTarget);

// Button palette
pub const BUTTON_IDLE: Color = Color::srgb(0.22, 0.24, 0.28);
pub const BUTTON_HOVER: Color = Color::srgb(0.26, 0.28, 0.32);
pub const BUTTON_PRESSED: Color = Color::srgb(0.18, 0.20, 0.24);
pub const BUTTON_ACTIVE: Color = Color::srgb(0.20, 0.45, 0.30);

pub fn helper_toggle_colour(visible: bool) -> Color {
    if visible { BUTTON_ACTIVE } else { BUTTON_IDLE }
}

pub fn camera_status_text(mode: CameraMode) -> String {
    format!(
        "Camera: {} / Controls: {}",
        mode.camera.label(),
        mode.control.label()
    )
}

pub fn light_value_text(target: LightTarget, value: f32) -> String {
    if value >= 10_000.0 {
        format!("{}: {:.0}k", target.label(), value / 1_000.0)
    } else {
        format!("{}: {:.1}", target.label(), value)
    }
}
