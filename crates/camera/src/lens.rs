use claustrophobia_math::{Mat4, perspective, radians};
use serde::{Deserialize, Serialize};

use crate::config::LensConfig;

/// Field of view and viewport aspect, turned into a projection each frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lens {
    config: LensConfig,
    /// Current field of view in degrees.
    fov: f32,
    aspect: f32,
}

impl Lens {
    pub fn new(config: LensConfig, width: u32, height: u32) -> Self {
        let mut lens = Self {
            config,
            fov: config.fov,
            aspect: 1.0,
        };
        lens.resize(width, height);
        lens
    }

    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    /// Scrolling up narrows the view.
    pub fn zoom(&mut self, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let (min, max) = (self.config.fov_min, self.config.fov_max);
        self.fov = (self.fov - scroll).max(min).min(max);
        tracing::trace!(fov = self.fov, "zoom");
    }

    /// A zero-sized framebuffer (minimized window) keeps the old aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            tracing::debug!(width, height, "ignoring degenerate framebuffer size");
            return;
        }
        self.aspect = width as f32 / height as f32;
    }

    pub fn projection(&self) -> Mat4 {
        perspective(
            radians(self.fov),
            self.aspect,
            self.config.near,
            self.config.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lens() -> Lens {
        Lens::new(LensConfig::default(), 1200, 800)
    }

    #[test]
    fn aspect_from_window_size() {
        assert_eq!(lens().aspect(), 1.5);
    }

    #[test]
    fn zoom_clamps_to_range() {
        let mut l = lens();
        l.zoom(10.0);
        assert_eq!(l.fov(), 35.0);
        l.zoom(100.0);
        assert_eq!(l.fov(), 1.0);
        l.zoom(-500.0);
        assert_eq!(l.fov(), 45.0);
    }

    #[test]
    fn inverted_zoom_range_does_not_panic() {
        let config = LensConfig {
            fov_min: 30.0,
            fov_max: 10.0,
            ..LensConfig::default()
        };
        let mut l = Lens::new(config, 800, 600);
        l.zoom(1.0);
        assert_eq!(l.fov(), 10.0);
    }

    #[test]
    fn degenerate_resize_is_ignored() {
        let mut l = lens();
        l.resize(1920, 0);
        assert_eq!(l.aspect(), 1.5);
        l.resize(1920, 1080);
        assert!((l.aspect() - 16.0 / 9.0).abs() < 1e-6);
    }

    #[test]
    fn projection_tracks_fov_and_aspect() {
        let mut l = lens();
        let wide = l.projection();
        l.zoom(20.0);
        let narrow = l.projection();
        assert!(narrow[1][1] > wide[1][1]);
        assert!((wide[1][1] / wide[0][0] - 1.5).abs() < 1e-4);
        assert_eq!(wide[2][3], -1.0);
    }
}
