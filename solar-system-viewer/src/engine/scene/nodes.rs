use bevy::prelude::*;

/// Transform nodes of the celestial hierarchy that can show a helper grid.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneNode {
    SolarSystem,
    Sun,
    EarthOrbit,
    Earth,
    MoonOrbit,
    Moon,
    FlatEarthOrbit,
    FlatEarth,
}

impl SceneNode {
    /// Display order in the debug panel, root first.
    pub const ALL: [SceneNode; 8] = [
        Self::SolarSystem,
        Self::Sun,
        Self::EarthOrbit,
        Self::Earth,
        Self::MoonOrbit,
        Self::Moon,
        Self::FlatEarthOrbit,
        Self::FlatEarth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::SolarSystem => "Solar System",
            Self::Sun => "Sun",
            Self::EarthOrbit => "Earth Orbit",
            Self::Earth => "Earth",
            Self::MoonOrbit => "Moon Orbit",
            Self::Moon => "Moon",
            Self::FlatEarthOrbit => "Flat Earth Orbit",
            Self::FlatEarth => "Flat Earth",
        }
    }
}
