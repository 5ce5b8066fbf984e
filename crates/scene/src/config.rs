use std::path::Path;

use claustrophobia_camera::{LensConfig, LookConfig, MovementConfig};
use claustrophobia_math::Vec3;
use serde::{Deserialize, Serialize};

use crate::layout::SceneVariant;

/// Errors from loading or validating a demo configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn positive(v: f32) -> bool {
    v > 0.0 && v.is_finite()
}

/// NaN slips through every ordered comparison, so finiteness is checked
/// before any of them.
fn finite(field: &'static str, values: &[f32]) -> Result<(), ConfigError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(invalid(field, format!("must be finite, got {v}"))),
        None => Ok(()),
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

/// Initial framebuffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "claustrophobia".into(),
            width: 1200,
            height: 800,
        }
    }
}

/// Everything that differs between the demo variants.
///
/// Missing sections fall back to the corridor defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub variant: SceneVariant,
    pub window: WindowConfig,
    pub lens: LensConfig,
    pub movement: MovementConfig,
    pub look: LookConfig,
}

impl DemoConfig {
    /// Walled corridor walked at eye height 0.5.
    pub fn corridor() -> Self {
        Self::default()
    }

    /// Single cube viewed from +z on a ground plane at 0.
    pub fn cube() -> Self {
        Self {
            variant: SceneVariant::Cube,
            window: WindowConfig {
                title: "claustrophobia: cube".into(),
                width: 800,
                height: 600,
            },
            lens: LensConfig::default(),
            movement: MovementConfig {
                start_position: Vec3::new(0.0, 0.0, 3.0),
                ground_height: 0.0,
                jump_y_limit: 1.5,
                jump_velocity: 3.0,
                camera_velocity: 2.5,
            },
            look: LookConfig {
                sensitivity: 0.1,
                ..LookConfig::default()
            },
        }
    }

    pub fn preset(variant: SceneVariant) -> Self {
        match variant {
            SceneVariant::Corridor => Self::corridor(),
            SceneVariant::Cube => Self::cube(),
        }
    }

    /// Parse and validate.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&data)?;
        tracing::debug!(path = %path.display(), variant = ?config.variant, "loaded demo config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the preconditions the math core does not check itself:
    /// a usable frustum, a non-empty framebuffer, and a jump that goes up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let w = &self.window;
        if w.width == 0 || w.height == 0 {
            return Err(invalid(
                "window",
                format!("size must be non-zero, got {}x{}", w.width, w.height),
            ));
        }

        let l = &self.lens;
        let zoom_range_ok = 0.0 < l.fov_min && l.fov_min <= l.fov_max && l.fov_max < 180.0;
        if !zoom_range_ok {
            return Err(invalid(
                "lens.fov_min/fov_max",
                format!("need 0 < min <= max < 180, got {} and {}", l.fov_min, l.fov_max),
            ));
        }
        if !(l.fov_min..=l.fov_max).contains(&l.fov) {
            return Err(invalid(
                "lens.fov",
                format!("{} outside [{}, {}]", l.fov, l.fov_min, l.fov_max),
            ));
        }
        let depth_ok = 0.0 < l.near && l.near < l.far && l.far.is_finite();
        if !depth_ok {
            return Err(invalid(
                "lens.near/far",
                format!("need 0 < near < far, got {} and {}", l.near, l.far),
            ));
        }

        let m = &self.movement;
        finite("movement.start_position", &m.start_position.to_array())?;
        finite("movement.ground_height", &[m.ground_height])?;
        finite("movement.jump_y_limit", &[m.jump_y_limit])?;
        if !positive(m.jump_velocity) {
            return Err(invalid("movement.jump_velocity", "must be positive"));
        }
        if !positive(m.camera_velocity) {
            return Err(invalid("movement.camera_velocity", "must be positive"));
        }
        if m.jump_y_limit <= m.ground_height {
            return Err(invalid(
                "movement.jump_y_limit",
                format!("{} is not above ground {}", m.jump_y_limit, m.ground_height),
            ));
        }
        if m.start_position.y() < m.ground_height {
            return Err(invalid(
                "movement.start_position",
                format!("y {} is below ground {}", m.start_position.y(), m.ground_height),
            ));
        }

        let k = &self.look;
        finite("look.yaw", &[k.yaw])?;
        finite("look.pitch", &[k.pitch])?;
        let pitch_ok = 0.0 < k.pitch_limit && k.pitch_limit < 90.0;
        if !pitch_ok {
            return Err(invalid(
                "look.pitch_limit",
                format!("need 0 < limit < 90, got {}", k.pitch_limit),
            ));
        }
        finite("look.sensitivity", &[k.sensitivity])?;

        Ok(())
    }
}
