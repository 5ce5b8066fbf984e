use claustrophobia_math::Vec3;
use serde::{Deserialize, Serialize};

/// Position and vertical-motion constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Where the camera starts.
    pub start_position: Vec3,
    /// Resting y coordinate; the camera lands here.
    pub ground_height: f32,
    /// Jump apex; upward motion stops once y reaches it.
    pub jump_y_limit: f32,
    /// Units per second, used for both rising and falling.
    pub jump_velocity: f32,
    /// Horizontal units per second.
    pub camera_velocity: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            start_position: Vec3::new(2.0, 0.5, -3.0),
            ground_height: 0.5,
            jump_y_limit: 2.0,
            jump_velocity: 4.5,
            camera_velocity: 10.5,
        }
    }
}

/// Initial orientation and mouse-look tuning, all in degrees.
///
/// Expects `0 < pitch_limit < 90`; `DemoConfig::validate` in the scene crate
/// checks this for loaded configs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookConfig {
    /// Yaw of -90 looks down -z.
    pub yaw: f32,
    pub pitch: f32,
    /// Degrees per pixel of cursor travel.
    pub sensitivity: f32,
    pub pitch_limit: f32,
}

impl Default for LookConfig {
    fn default() -> Self {
        Self {
            yaw: -90.0,
            pitch: 0.0,
            sensitivity: 0.17,
            pitch_limit: 89.0,
        }
    }
}

/// Projection parameters. Angles in degrees.
///
/// Expects `0 < fov_min <= fov <= fov_max` and `0 < near < far`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LensConfig {
    pub fov: f32,
    /// Scroll zoom lower bound.
    pub fov_min: f32,
    /// Scroll zoom upper bound.
    pub fov_max: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            fov: 45.0,
            fov_min: 1.0,
            fov_max: 45.0,
            near: 0.1,
            far: 100.0,
        }
    }
}
