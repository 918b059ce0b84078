use bevy::prelude::*;
use bevy::ui::FocusPolicy;

use super::state::*;
use crate::engine::camera::mode::{CameraMode, CameraModeCoordinator};
use crate::engine::scene::grid::HelperGridVisibility;
use crate::engine::scene::lighting::{LightTarget, LightingSettings};
use crate::engine::scene::nodes::SceneNode;

fn button_node(width: Val, height: f32) -> Node {
    Node {
        width,
        height: Val::Px(height),
        display: Display::Flex,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        border: UiRect::all(Val::Px(1.0)),
        ..default()
    }
}

fn section_heading(body: &mut ChildSpawnerCommands, title: &str) {
    body.spawn((
        Text::new(title),
        TextFont { font_size: 14.0, ..default() },
        TextColor(Color::srgb(0.70, 0.72, 0.76)),
    ));
}

// Spawns the debug panel with camera status, helper grid toggles and light steps
pub fn spawn_debug_panel(mut commands: Commands, state: Res<DebugPanelUiState>) {
    let width = if state.collapsed { state.closed_width } else { state.open_width };
    let body_display = if state.collapsed { Display::None } else { Display::Flex };

    commands
        .spawn((
            DebugPanelRoot,
            Name::new("DebugPanel"),
            Interaction::default(),
            FocusPolicy::Pass,
            BackgroundColor(Color::srgb(0.10, 0.11, 0.13)),
            Node {
                width: Val::Px(width),
                min_width: Val::Px(0.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Stretch,
                justify_content: JustifyContent::FlexStart,
                overflow: Overflow::clip(),
                ..default()
            },
        ))
        .with_children(|parent| {
            let (pad, btn) = if state.collapsed { (4.0, 24.0) } else { (12.0, 28.0) };

            parent
                .spawn((
                    HeaderNode,
                    Name::new("Header"),
                    BackgroundColor(Color::srgb(0.14, 0.16, 0.20)),
                    Node {
                        width: Val::Percent(100.0),
                        padding: UiRect::all(Val::Px(pad)),
                        display: Display::Flex,
                        align_items: AlignItems::Center,
                        justify_content: if state.collapsed { JustifyContent::FlexEnd } else { JustifyContent::SpaceBetween },
                        ..default()
                    },
                ))
                .with_children(|header| {
                    header.spawn((
                        TitleText,
                        Name::new("Title"),
                        Text::new("Solar System"),
                        TextFont { font_size: 18.0, ..default() },
                        TextColor(Color::srgb(1.0, 1.0, 1.0)),
                        Node { display: if state.collapsed { Display::None } else { Display::Flex }, ..default() },
                    ));

                    let chevron = if state.collapsed { "<" } else { ">" };
                    header
                        .spawn((
                            CollapseButton,
                            Name::new("CollapseButton"),
                            Button,
                            BackgroundColor(BUTTON_IDLE),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            button_node(Val::Px(btn), btn),
                        ))
                        .with_children(|btn_parent| {
                            btn_parent.spawn((
                                CollapseLabel,
                                Text::new(chevron),
                                TextFont { font_size: 18.0, ..default() },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                });

            parent
                .spawn((
                    DebugPanelBody,
                    Name::new("Body"),
                    BackgroundColor(Color::srgb(0.12, 0.13, 0.15)),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(8.0)),
                        row_gap: Val::Px(6.0),
                        display: body_display,
                        flex_direction: FlexDirection::Column,
                        overflow: Overflow::clip_y(),
                        ..default()
                    },
                ))
                .with_children(|body| {
                    body.spawn((
                        CameraStatusLabel,
                        Name::new("CameraStatus"),
                        Text::new(camera_status_text(CameraMode::default())),
                        TextFont { font_size: 14.0, ..default() },
                        TextColor(Color::srgb(0.90, 0.90, 0.60)),
                    ));

                    section_heading(body, "Helper grids");
                    for node in SceneNode::ALL {
                        body.spawn((
                            HelperToggleButton(node),
                            Button,
                            Name::new(format!("Grid{}", node.label())),
                            BackgroundColor(helper_toggle_colour(false)),
                            BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
                            button_node(Val::Percent(100.0), 26.0),
                        ))
                        .with_children(|btn| {
                            btn.spawn((
                                Text::new(node.label()),
                                TextFont { font_size: 14.0, ..default() },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                        });
                    }

                    section_heading(body, "Lighting");
                    for target in LightTarget::ALL {
                        body.spawn(Node {
                            width: Val::Percent(100.0),
                            display: Display::Flex,
                            align_items: AlignItems::Center,
                            justify_content: JustifyContent::SpaceBetween,
                            column_gap: Val::Px(6.0),
                            ..default()
                        })
                        .with_children(|row| {
                            spawn_step_button(row, target, false);
                            row.spawn((
                                LightValueLabel(target),
                                Text::new(target.label()),
                                TextFont { font_size: 14.0, ..default() },
                                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                            ));
                            spawn_step_button(row, target, true);
                        });
                    }
                });
        });
}

fn spawn_step_button(row: &mut ChildSpawnerCommands, target: LightTarget, up: bool) {
    row.spawn((
        LightStepButton { target, up },
        Button,
        BackgroundColor(BUTTON_IDLE),
        BorderColor(Color::srgba(0.0, 0.0, 0.0, 0.25)),
        button_node(Val::Px(28.0), 26.0),
    ))
    .with_children(|btn| {
        btn.spawn((
            Text::new(if up { "+" } else { "-" }),
            TextFont { font_size: 16.0, ..default() },
            TextColor(Color::srgb(1.0, 1.0, 1.0)),
        ));
    });
}

pub fn apply_collapse_state(
    state: Res<DebugPanelUiState>,
    mut nodes: ParamSet<(
        Query<&mut Node, With<DebugPanelRoot>>,
        Query<&mut Node, With<DebugPanelBody>>,
        Query<&mut Node, With<HeaderNode>>,
        Query<&mut Node, With<TitleText>>,
        Query<&mut Node, With<CollapseButton>>,
    )>,
    mut chevrons: Query<&mut Text, With<CollapseLabel>>,
) {
    if !state.is_changed() { return; }

    if let Ok(mut n) = nodes.p0().single_mut() {
        n.width = Val::Px(if state.collapsed { state.closed_width } else { state.open_width });
    }
    if let Ok(mut n) = nodes.p1().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p2().single_mut() {
        let pad = if state.collapsed { 4.0 } else { 12.0 };
        n.padding = UiRect::all(Val::Px(pad));
        n.justify_content = if state.collapsed { JustifyContent::FlexEnd } else { JustifyContent::SpaceBetween };
    }
    if let Ok(mut n) = nodes.p3().single_mut() {
        n.display = if state.collapsed { Display::None } else { Display::Flex };
    }
    if let Ok(mut n) = nodes.p4().single_mut() {
        let s = if state.collapsed { 24.0 } else { 28.0 };
        n.width = Val::Px(s);
        n.height = Val::Px(s);
    }
    // Panel sits on the right, so the chevron points at where it will move.
    for mut t in &mut chevrons {
        *t = Text::new(if state.collapsed { "<" } else { ">" });
    }
}

pub fn reflect_helper_toggles(
    visibility: Res<HelperGridVisibility>,
    mut q: Query<(&HelperToggleButton, &Interaction, &mut BackgroundColor)>,
) {
    if !visibility.is_changed() { return; }
    for (toggle, interaction, mut bg) in &mut q {
        if *interaction == Interaction::None {
            *bg = BackgroundColor(helper_toggle_colour(visibility.is_visible(toggle.0)));
        }
    }
}

pub fn reflect_light_values(
    lighting: Res<LightingSettings>,
    mut q: Query<(&LightValueLabel, &mut Text)>,
) {
    if !lighting.is_changed() { return; }
    for (label, mut text) in &mut q {
        let value = light_value_text(label.0, lighting.get(label.0));
        if text.0 != value { *text = Text::new(value); }
    }
}

pub fn reflect_camera_status(
    coordinator: Res<CameraModeCoordinator>,
    mut q: Query<&mut Text, With<CameraStatusLabel>>,
) {
    if !coordinator.is_changed() { return; }
    let status = camera_status_text(coordinator.mode());
    if let Ok(mut t) = q.single_mut() {
        if t.0 != status { *t = Text::new(status); }
    }
}
