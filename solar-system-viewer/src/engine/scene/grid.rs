//! Per-node helper grids and axes, toggled from the debug panel.
use std::collections::HashSet;

use bevy::asset::RenderAssetUsages;
use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::view::NoFrustumCulling;
use constants::render_settings::{
    HELPER_AXES_LENGTH, HELPER_GRID_COLOUR, HELPER_GRID_DIVISIONS, HELPER_GRID_HALF_SIZE,
};

use super::nodes::SceneNode;

/// Helper grid or axes entity attached to a scene node.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelperGrid(pub SceneNode);

/// Scene nodes whose helpers are shown. Empty by default.
#[derive(Resource, Debug, Default, Clone)]
pub struct HelperGridVisibility {
    visible: HashSet<SceneNode>,
}

impl HelperGridVisibility {
    pub fn is_visible(&self, node: SceneNode) -> bool {
        self.visible.contains(&node)
    }

    pub fn set_visible(&mut self, node: SceneNode, visible: bool) {
        if visible {
            self.visible.insert(node);
        } else {
            self.visible.remove(&node);
        }
    }

    /// Flip a node's helper and return the new state.
    pub fn toggle(&mut self, node: SceneNode) -> bool {
        let visible = !self.is_visible(node);
        self.set_visible(node, visible);
        visible
    }
}

/// Shared mesh and material handles for every helper.
#[derive(Clone)]
pub struct HelperGridAssets {
    grid_mesh: Handle<Mesh>,
    axes_mesh: Handle<Mesh>,
    material: Handle<StandardMaterial>,
}

impl HelperGridAssets {
    pub fn new(meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) -> Self {
        let [r, g, b, a] = HELPER_GRID_COLOUR;
        Self {
            grid_mesh: meshes.add(helper_grid_mesh(
                HELPER_GRID_HALF_SIZE,
                HELPER_GRID_DIVISIONS,
                LinearRgba::new(r, g, b, a),
            )),
            axes_mesh: meshes.add(axes_mesh(HELPER_AXES_LENGTH)),
            material: materials.add(StandardMaterial {
                base_color: Color::WHITE,
                alpha_mode: AlphaMode::Blend,
                unlit: true,
                ..default()
            }),
        }
    }
}

/// Square line grid in the XZ plane, `divisions` cells across.
pub fn helper_grid_mesh(half_size: f32, divisions: u32, colour: LinearRgba) -> Mesh {
    let divisions = divisions.max(1);
    let step = half_size * 2.0 / divisions as f32;

    let mut positions = Vec::new();
    for i in 0..=divisions {
        let offset = -half_size + i as f32 * step;
        // Line parallel to Z, then line parallel to X.
        positions.push([offset, 0.0, -half_size]);
        positions.push([offset, 0.0, half_size]);
        positions.push([-half_size, 0.0, offset]);
        positions.push([half_size, 0.0, offset]);
    }
    let colours = vec![colour.to_f32_array(); positions.len()];

    line_list_mesh(positions, colours)
}

/// Three coloured axes from the origin: X red, Y green, Z blue.
pub fn axes_mesh(length: f32) -> Mesh {
    let positions = vec![
        [0.0, 0.0, 0.0],
        [length, 0.0, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, length, 0.0],
        [0.0, 0.0, 0.0],
        [0.0, 0.0, length],
    ];
    let colours = [LinearRgba::RED, LinearRgba::GREEN, LinearRgba::BLUE]
        .iter()
        .flat_map(|c| [c.to_f32_array(); 2])
        .collect::<Vec<_>>();

    line_list_mesh(positions, colours)
}

fn line_list_mesh(positions: Vec<[f32; 3]>, colours: Vec<[f32; 4]>) -> Mesh {
    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_COLOR, colours)
}

/// Attach a hidden grid and axes helper under `parent`.
pub fn spawn_helper_grid(
    commands: &mut Commands,
    assets: &HelperGridAssets,
    node: SceneNode,
    parent: Entity,
) {
    for mesh in [&assets.grid_mesh, &assets.axes_mesh] {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(assets.material.clone()),
            Transform::IDENTITY,
            Visibility::Hidden,
            NoFrustumCulling,
            NotShadowCaster,
            HelperGrid(node),
            ChildOf(parent),
        ));
    }
}

pub fn apply_helper_grid_visibility(
    settings: Res<HelperGridVisibility>,
    mut helpers: Query<(&HelperGrid, &mut Visibility)>,
) {
    for (helper, mut visibility) in &mut helpers {
        let wanted = if settings.is_visible(helper.0) {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}
