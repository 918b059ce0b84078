use bevy::pbr::NotShadowCaster;
use bevy::prelude::*;
use constants::celestial::{
    DOME_COLOUR, DOME_OPACITY, DOME_RADIUS, DOME_SECTORS, DOME_STACKS, EARTH_EMISSIVE_COLOUR,
    EARTH_SCALE, FLAT_EARTH_BASE_COLOUR, FLAT_EARTH_RADIUS, FLAT_EARTH_RESOLUTION,
    FLAT_EARTH_RIM_COLOUR, FLAT_EARTH_THICKNESS, SPHERE_RADIUS, SPHERE_SECTORS, SPHERE_STACKS,
};
use constants::render_settings::SUN_LIGHT_RANGE;

use super::animation::Spin;
use super::grid::{HelperGridAssets, spawn_helper_grid};
use super::lighting::SunLight;
use super::meshes::{cap_transform, cylinder_rim_mesh, disc_cap_mesh, hemisphere_mesh};
use super::nodes::SceneNode;
use crate::engine::assets::scene_manifest::SolarSystemManifest;
use crate::engine::assets::textures::CelestialTextures;

fn srgb([r, g, b]: [u8; 3]) -> Color {
    Color::srgb_u8(r, g, b)
}

/// Spawn the celestial hierarchy and return the solar system root.
///
/// ```text
/// SolarSystem
/// ├── Sun (+ point light)
/// ├── EarthOrbit
/// │   ├── Earth
/// │   └── MoonOrbit
/// │       └── Moon
/// └── FlatEarthOrbit
///     └── FlatEarth (tilted)
///         ├── disc: rim, top, bottom
///         └── dome
/// ```
pub fn spawn_solar_system(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &CelestialTextures,
    manifest: &SolarSystemManifest,
) -> Entity {
    let layout = &manifest.layout;
    let spin = Spin {
        rate: manifest.animation.spin_rate,
    };
    let helpers = HelperGridAssets::new(meshes, materials);
    let sphere = meshes.add(
        Sphere::new(SPHERE_RADIUS)
            .mesh()
            .uv(SPHERE_SECTORS, SPHERE_STACKS),
    );

    let root = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::SolarSystem,
        Transform::IDENTITY,
        None,
    );

    // Sun
    let sun = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::Sun,
        Transform::from_scale(Vec3::splat(layout.sun_scale)),
        Some(root),
    );
    commands.entity(sun).insert((
        Mesh3d(sphere.clone()),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(textures.sun.clone()),
            unlit: true,
            ..default()
        })),
        NotShadowCaster,
    ));
    commands.spawn((
        Name::new("Sun Light"),
        PointLight {
            color: Color::WHITE,
            intensity: manifest.lighting.sun_intensity,
            range: SUN_LIGHT_RANGE,
            shadows_enabled: true,
            ..default()
        },
        Transform::IDENTITY,
        SunLight,
        ChildOf(sun),
    ));

    // Spherical Earth and moon
    let earth_orbit = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::EarthOrbit,
        Transform::from_translation(layout.earth_orbit_offset()),
        Some(root),
    );
    let earth = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::Earth,
        Transform::from_scale(Vec3::splat(EARTH_SCALE)),
        Some(earth_orbit),
    );
    commands.entity(earth).insert((
        Mesh3d(sphere.clone()),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(textures.earth.clone()),
            emissive: srgb(EARTH_EMISSIVE_COLOUR).into(),
            perceptual_roughness: 0.8,
            ..default()
        })),
    ));

    let moon_orbit = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::MoonOrbit,
        Transform::from_translation(layout.moon_orbit_offset()),
        Some(earth_orbit),
    );
    let moon = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::Moon,
        Transform::from_scale(Vec3::splat(layout.moon_scale)),
        Some(moon_orbit),
    );
    commands.entity(moon).insert((
        Mesh3d(sphere),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color_texture: Some(textures.moon.clone()),
            perceptual_roughness: 0.9,
            ..default()
        })),
    ));

    // Flat Earth
    let flat_earth_orbit = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::FlatEarthOrbit,
        Transform::from_translation(layout.flat_earth_orbit_offset()),
        Some(root),
    );
    let flat_earth = spawn_node(
        commands,
        &helpers,
        spin,
        SceneNode::FlatEarth,
        Transform::from_rotation(Quat::from_rotation_z(
            layout.flat_earth_tilt_degrees.to_radians(),
        )),
        Some(flat_earth_orbit),
    );
    spawn_flat_earth_disc(commands, meshes, materials, textures, spin, flat_earth);
    spawn_dome(commands, meshes, materials, spin, flat_earth);

    info!("Solar system scene spawned");
    root
}

/// Spawn a spinning hierarchy node with its helper grid.
fn spawn_node(
    commands: &mut Commands,
    helpers: &HelperGridAssets,
    spin: Spin,
    kind: SceneNode,
    transform: Transform,
    parent: Option<Entity>,
) -> Entity {
    let mut entity = commands.spawn((
        Name::new(kind.label()),
        kind,
        spin,
        transform,
        Visibility::default(),
    ));
    if let Some(parent) = parent {
        entity.insert(ChildOf(parent));
    }
    let id = entity.id();
    spawn_helper_grid(commands, helpers, kind, id);
    id
}

fn spawn_flat_earth_disc(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &CelestialTextures,
    spin: Spin,
    parent: Entity,
) {
    let disc = commands
        .spawn((
            Name::new("Flat Earth Disc"),
            spin,
            Transform::IDENTITY,
            Visibility::default(),
            ChildOf(parent),
        ))
        .id();

    let cap = meshes.add(disc_cap_mesh(FLAT_EARTH_RADIUS, FLAT_EARTH_RESOLUTION));
    let parts = [
        (
            "Rim",
            meshes.add(cylinder_rim_mesh(
                FLAT_EARTH_RADIUS,
                FLAT_EARTH_THICKNESS,
                FLAT_EARTH_RESOLUTION,
            )),
            StandardMaterial {
                base_color: srgb(FLAT_EARTH_RIM_COLOUR),
                ..default()
            },
            Transform::IDENTITY,
        ),
        (
            "Top",
            cap.clone(),
            StandardMaterial {
                base_color_texture: Some(textures.flat_earth.clone()),
                ..default()
            },
            cap_transform(FLAT_EARTH_THICKNESS, true),
        ),
        (
            "Bottom",
            cap,
            StandardMaterial {
                base_color: srgb(FLAT_EARTH_BASE_COLOUR),
                ..default()
            },
            cap_transform(FLAT_EARTH_THICKNESS, false),
        ),
    ];

    for (name, mesh, material, transform) in parts {
        commands.spawn((
            Name::new(format!("Flat Earth {name}")),
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(material)),
            transform,
            NotShadowCaster,
            ChildOf(disc),
        ));
    }
}

fn spawn_dome(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    spin: Spin,
    parent: Entity,
) {
    commands.spawn((
        Name::new("Flat Earth Dome"),
        Mesh3d(meshes.add(hemisphere_mesh(DOME_RADIUS, DOME_SECTORS, DOME_STACKS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: srgb(DOME_COLOUR).with_alpha(DOME_OPACITY),
            alpha_mode: AlphaMode::Blend,
            double_sided: true,
            cull_mode: None,
            ..default()
        })),
        spin,
        Transform::IDENTITY,
        NotShadowCaster,
        ChildOf(parent),
    ));
}
