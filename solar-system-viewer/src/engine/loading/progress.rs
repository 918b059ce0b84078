use bevy::asset::LoadState;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureStatus {
    Pending,
    Loaded,
    Failed,
}

impl TextureStatus {
    pub fn from_load_state(state: Option<LoadState>) -> Self {
        match state {
            Some(LoadState::Loaded) => Self::Loaded,
            Some(LoadState::Failed(_)) => Self::Failed,
            _ => Self::Pending,
        }
    }

    /// Loaded and failed textures both let loading finish.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Resource, Default, Debug)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub textures_requested: bool,
    pub texture_states: Vec<(String, TextureStatus)>,
    pub textures_settled: bool,
    pub scene_created: bool,
}

impl LoadingProgress {
    pub fn is_complete(&self) -> bool {
        self.manifest_resolved && self.scene_created && self.textures_settled
    }

    /// One-line summary for the loading overlay.
    pub fn label(&self) -> String {
        if !self.manifest_resolved {
            return "Loading scene manifest...".to_string();
        }
        if self.texture_states.is_empty() {
            return "Loading textures...".to_string();
        }

        let settled = self
            .texture_states
            .iter()
            .filter(|(_, status)| status.is_settled())
            .count();
        let failed = self
            .texture_states
            .iter()
            .filter(|(_, status)| *status == TextureStatus::Failed)
            .count();

        let mut label = format!(
            "Loading textures {settled}/{}",
            self.texture_states.len()
        );
        if failed > 0 {
            label.push_str(&format!(" ({failed} failed)"));
        }
        label
    }
}
