//! Procedural meshes for the flat Earth model.
use std::f32::consts::{FRAC_PI_2, TAU};

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Upper half of a UV sphere, open at the equator, centred on the origin.
pub fn hemisphere_mesh(radius: f32, sectors: u32, stacks: u32) -> Mesh {
    let sectors = sectors.max(3);
    let stacks = stacks.max(1);

    let vertex_count = ((sectors + 1) * (stacks + 1)) as usize;
    let mut positions = Vec::with_capacity(vertex_count);
    let mut normals = Vec::with_capacity(vertex_count);
    let mut uvs = Vec::with_capacity(vertex_count);

    for stack in 0..=stacks {
        let v = stack as f32 / stacks as f32;
        // Polar angle from the top pole down to the equator.
        let theta = v * FRAC_PI_2;
        let (sin_theta, cos_theta) = theta.sin_cos();

        for sector in 0..=sectors {
            let u = sector as f32 / sectors as f32;
            let phi = u * TAU;
            let (sin_phi, cos_phi) = phi.sin_cos();

            let normal = Vec3::new(sin_theta * cos_phi, cos_theta, sin_theta * sin_phi);
            positions.push((normal * radius).to_array());
            normals.push(normal.to_array());
            uvs.push([u, v]);
        }
    }

    let row = sectors + 1;
    let mut indices = Vec::with_capacity((sectors * stacks * 6) as usize);
    for stack in 0..stacks {
        for sector in 0..sectors {
            let a = stack * row + sector;
            let b = a + row;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// Side wall of a cylinder of `height` centred on the origin, without caps.
pub fn cylinder_rim_mesh(radius: f32, height: f32, resolution: u32) -> Mesh {
    let resolution = resolution.max(3);
    let half = height * 0.5;

    let mut positions = Vec::with_capacity(((resolution + 1) * 2) as usize);
    let mut normals = Vec::with_capacity(positions.capacity());
    let mut uvs = Vec::with_capacity(positions.capacity());

    for segment in 0..=resolution {
        let u = segment as f32 / resolution as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = Vec3::new(cos, 0.0, sin);

        for (y, v) in [(half, 0.0), (-half, 1.0)] {
            positions.push([radius * cos, y, radius * sin]);
            normals.push(normal.to_array());
            uvs.push([u, v]);
        }
    }

    let mut indices = Vec::with_capacity((resolution * 6) as usize);
    for segment in 0..resolution {
        let top = segment * 2;
        let bottom = top + 1;
        let next_top = top + 2;
        let next_bottom = top + 3;
        indices.extend_from_slice(&[top, next_top, bottom, next_top, next_bottom, bottom]);
    }

    Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    )
    .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
    .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
    .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
    .with_inserted_indices(Indices::U32(indices))
}

/// Flat disc cap for the flat Earth, built in the XY plane facing +Z.
/// Place it with [`cap_transform`].
pub fn disc_cap_mesh(radius: f32, resolution: u32) -> Mesh {
    Circle::new(radius).mesh().resolution(resolution).build()
}

/// Transform laying a disc cap at the top (`facing_up`) or bottom of a disc of `height`.
pub fn cap_transform(height: f32, facing_up: bool) -> Transform {
    let half = height * 0.5;
    if facing_up {
        Transform::from_xyz(0.0, half, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2))
    } else {
        Transform::from_xyz(0.0, -half, 0.0).with_rotation(Quat::from_rotation_x(FRAC_PI_2))
    }
}
