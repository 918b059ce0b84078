/// Orbit binding configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSettings {
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub enable_pan: bool,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Radians of rotation per pixel of mouse drag.
    pub rotate_speed: f32,
    /// Fraction of the orbit distance panned per pixel of mouse drag.
    pub pan_speed: f32,
    /// Scale factor applied per wheel line.
    pub zoom_speed: f32,
    /// Pitch stays this far from the poles, in radians.
    pub pole_margin: f32,
    pub min_ortho_scale: f32,
    pub max_ortho_scale: f32,
}

/// Fly binding configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlySettings {
    /// Units per second.
    pub movement_speed: f32,
    /// Radians per second for keyboard roll, pitch and yaw.
    pub roll_speed: f32,
    /// Look around only while the left mouse button is held.
    pub drag_to_look: bool,
    /// Radians per pixel of mouse motion.
    pub look_sensitivity: f32,
    /// Multiplier while shift is held.
    pub boost_factor: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSettings {
    pub orbit: OrbitSettings,
    pub fly: FlySettings,
}

pub const CONTROL_SETTINGS: ControlSettings = ControlSettings {
    orbit: OrbitSettings {
        enable_damping: true,
        damping_factor: 0.05,
        enable_pan: true,
        min_distance: 20.0,
        max_distance: 500.0,
        rotate_speed: 0.005,
        pan_speed: 0.0015,
        zoom_speed: 0.95,
        pole_margin: 0.01,
        min_ortho_scale: 0.1,
        max_ortho_scale: 10.0,
    },
    fly: FlySettings {
        movement_speed: 10.0,
        roll_speed: std::f32::consts::FRAC_PI_6,
        drag_to_look: true,
        look_sensitivity: 0.003,
        boost_factor: 3.5,
    },
};
