use bevy::prelude::*;

use super::state::*;
use crate::engine::camera::switching::InputCapture;
use crate::engine::scene::grid::HelperGridVisibility;
use crate::engine::scene::lighting::LightingSettings;

// Chevron icon toggles collapse state
pub fn collapse_button_interaction(
    mut q: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>, With<CollapseButton>)>,
    mut state: ResMut<DebugPanelUiState>,
) {
    for (interaction, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => { state.collapsed = !state.collapsed; *bg = BackgroundColor(BUTTON_PRESSED); }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None    => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

// Grid buttons flip the helper of their node, green while visible
pub fn helper_toggle_button_interaction(
    mut q: Query<(&Interaction, &HelperToggleButton, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
    visibility: Option<ResMut<HelperGridVisibility>>,
) {
    let Some(mut visibility) = visibility else { return; };
    for (interaction, toggle, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                let visible = visibility.toggle(toggle.0);
                debug!("{} helper grid visible: {visible}", toggle.0.label());
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None    => {
                *bg = BackgroundColor(helper_toggle_colour(visibility.is_visible(toggle.0)))
            }
        }
    }
}

// -/+ buttons step a light multiplicatively
pub fn light_step_button_interaction(
    mut q: Query<(&Interaction, &LightStepButton, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
    lighting: Option<ResMut<LightingSettings>>,
) {
    let Some(mut lighting) = lighting else { return; };
    for (interaction, step, mut bg) in &mut q {
        match *interaction {
            Interaction::Pressed => {
                let value = lighting.step(step.target, step.up);
                debug!("{} light set to {value}", step.target.label());
                *bg = BackgroundColor(BUTTON_PRESSED);
            }
            Interaction::Hovered => *bg = BackgroundColor(BUTTON_HOVER),
            Interaction::None    => *bg = BackgroundColor(BUTTON_IDLE),
        }
    }
}

/// Keeps camera controls from reacting to drags and scrolls aimed at the panel.
pub fn pointer_capture_system(
    roots: Query<&Interaction, With<DebugPanelRoot>>,
    mut capture: ResMut<InputCapture>,
) {
    let captured = roots.iter().any(|interaction| *interaction != Interaction::None);
    if capture.pointer_captured != captured {
        capture.pointer_captured = captured;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scene::lighting::LightTarget;
    use crate::engine::scene::nodes::SceneNode;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn pressing_grid_button_toggles_visibility() {
        let mut world = World::new();
        world.init_resource::<HelperGridVisibility>();
        world.spawn((
            HelperToggleButton(SceneNode::Moon),
            Button,
            BackgroundColor(BUTTON_IDLE),
            Interaction::Pressed,
        ));

        let _ = world.run_system_once(helper_toggle_button_interaction);
        assert!(world.resource::<HelperGridVisibility>().is_visible(SceneNode::Moon));
        assert!(!world.resource::<HelperGridVisibility>().is_visible(SceneNode::Earth));
    }

    #[test]
    fn pressing_plus_raises_the_light() {
        let mut world = World::new();
        world.insert_resource(LightingSettings::default());
        let before = world.resource::<LightingSettings>().get(LightTarget::Sun);
        world.spawn((
            LightStepButton { target: LightTarget::Sun, up: true },
            Button,
            BackgroundColor(BUTTON_IDLE),
            Interaction::Pressed,
        ));

        let _ = world.run_system_once(light_step_button_interaction);
        assert!(world.resource::<LightingSettings>().get(LightTarget::Sun) > before);
    }

    #[test]
    fn hovering_the_panel_captures_the_pointer() {
        let mut world = World::new();
        world.init_resource::<InputCapture>();
        let root = world.spawn((DebugPanelRoot, Interaction::Hovered)).id();

        let _ = world.run_system_once(pointer_capture_system);
        assert!(world.resource::<InputCapture>().pointer_captured);

        world.entity_mut(root).insert(Interaction::None);
        let _ = world.run_system_once(pointer_capture_system);
        assert!(!world.resource::<InputCapture>().pointer_captured);
    }
}
