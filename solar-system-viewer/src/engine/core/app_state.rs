use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    SceneReady,
    Running,
}

/// Full-window container of the loading label.
#[derive(Component)]
pub struct LoadingOverlay;

/// Centred label shown while the scene loads.
#[derive(Component)]
pub struct LoadingText;

pub fn spawn_loading_overlay(mut commands: Commands) {
    commands
        .spawn((
            LoadingOverlay,
            Name::new("LoadingOverlay"),
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent.spawn((
                LoadingText,
                Text::new("Loading..."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}

pub fn update_loading_text(
    loading_progress: Res<LoadingProgress>,
    mut query: Query<&mut Text, With<LoadingText>>,
) {
    if !loading_progress.is_changed() {
        return;
    }
    let label = loading_progress.label();
    for mut text in &mut query {
        if text.0 != label {
            text.0 = label.clone();
        }
    }
}

pub fn despawn_loading_overlay(mut commands: Commands, query: Query<Entity, With<LoadingOverlay>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

// Transition to SceneReady once every texture has loaded or failed
pub fn transition_to_scene_ready(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        info!("→ Transitioning to SceneReady state");
        next_state.set(AppState::SceneReady);
    }
}

// Final transition to running state
pub fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    info!("→ Scene ready, transitioning to Running state");
    next_state.set(AppState::Running);
}
